//! Public cat surface.
//!
//! `Neko` resolves omitted keys from a [`NekoConfig`]; the free functions
//! delegate to a default-configured instance.

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use crate::config::{ConfigError, NekoConfig};
use crate::modules::bubble::SpeechBubble;
use crate::modules::catalog::{art, list_keys, all_entries, Catalog, CatalogError, Category, CAT_TYPES};
use crate::modules::selector;

lazy_static! {
    static ref DEFAULT_NEKO: Neko = Neko::default();
}

#[derive(Debug, Clone, Default)]
pub struct Neko {
    config: NekoConfig,
}

impl Neko {
    pub fn new(config: NekoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &NekoConfig {
        &self.config
    }

    fn resolve(&self, category: Category, key: Option<&str>) -> Result<&'static str, CatalogError> {
        Catalog::global().lookup(category, key, self.config.defaults.for_category(category))
    }

    pub fn random_cat(&self) -> &'static str {
        selector::random_pick()
    }

    pub fn cat_by_mood(&self, mood: Option<&str>) -> Result<&'static str, CatalogError> {
        self.resolve(Category::Standard, mood)
    }

    pub fn cat_with_message(&self, message: &str, mood: Option<&str>) -> Result<String, CatalogError> {
        let cat = self.cat_by_mood(mood)?;
        Ok(SpeechBubble::new(self.config.bubble.min_width).wrap(message, cat))
    }

    pub fn cat_face(&self, kind: Option<&str>) -> Result<&'static str, CatalogError> {
        self.resolve(Category::Face, kind)
    }

    pub fn kitten(&self, kind: Option<&str>) -> Result<&'static str, CatalogError> {
        self.resolve(Category::Kitten, kind)
    }

    pub fn big_cat(&self, pose: Option<&str>) -> Result<&'static str, CatalogError> {
        self.resolve(Category::BigCat, pose)
    }

    pub fn action_cat(&self, action: Option<&str>) -> Result<&'static str, CatalogError> {
        self.resolve(Category::Action, action)
    }

    pub fn sleeping_cat(&self) -> &'static str {
        art::SLEEPING_CAT
    }

    pub fn cat_parade(&self, count: Option<i64>) -> String {
        selector::parade(count.unwrap_or(self.config.defaults.parade_count), Category::Face)
    }
}

pub fn get_random_cat() -> &'static str {
    DEFAULT_NEKO.random_cat()
}

pub fn get_cat_by_mood(mood: Option<&str>) -> Result<&'static str, CatalogError> {
    DEFAULT_NEKO.cat_by_mood(mood)
}

pub fn get_cat_with_message(message: &str, mood: Option<&str>) -> Result<String, CatalogError> {
    DEFAULT_NEKO.cat_with_message(message, mood)
}

pub fn get_cat_face(kind: Option<&str>) -> Result<&'static str, CatalogError> {
    DEFAULT_NEKO.cat_face(kind)
}

pub fn get_kitten(kind: Option<&str>) -> Result<&'static str, CatalogError> {
    DEFAULT_NEKO.kitten(kind)
}

pub fn get_big_cat(pose: Option<&str>) -> Result<&'static str, CatalogError> {
    DEFAULT_NEKO.big_cat(pose)
}

pub fn get_action_cat(action: Option<&str>) -> Result<&'static str, CatalogError> {
    DEFAULT_NEKO.action_cat(action)
}

pub fn get_sleeping_cat() -> &'static str {
    DEFAULT_NEKO.sleeping_cat()
}

pub fn get_cat_parade(count: Option<i64>) -> String {
    DEFAULT_NEKO.cat_parade(count)
}

pub fn list_moods() -> Vec<String> {
    list_keys(Category::Standard)
}

pub fn list_actions() -> Vec<String> {
    list_keys(Category::Action)
}

pub fn list_cat_types() -> Vec<String> {
    CAT_TYPES.iter().map(|name| name.to_string()).collect()
}

pub fn get_all_cats_by_type(name: &str) -> Result<BTreeMap<String, String>, CatalogError> {
    Ok(all_entries(Category::parse(name)?))
}
