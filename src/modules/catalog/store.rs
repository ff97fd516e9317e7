use std::collections::{BTreeMap, HashMap};

use lazy_static::lazy_static;
use tracing::debug;

use crate::modules::catalog::category::Category;
use crate::modules::catalog::error::CatalogError;

lazy_static! {
    static ref CATALOG: Catalog = Catalog::build();
}

/// Categories drawn from by random selection. Faces are left out; they are
/// reserved for parades.
pub const RANDOM_POOL: [Category; 4] = [
    Category::Standard,
    Category::Kitten,
    Category::BigCat,
    Category::Action,
];

#[derive(Debug)]
struct CategoryIndex {
    keys: Vec<&'static str>,
    arts: Vec<&'static str>,
    by_key: HashMap<&'static str, &'static str>,
}

impl CategoryIndex {
    fn new(category: Category) -> Self {
        let entries = category.entries();
        Self {
            keys: entries.iter().map(|(key, _)| *key).collect(),
            arts: entries.iter().map(|(_, art)| *art).collect(),
            by_key: entries.iter().copied().collect(),
        }
    }
}

/// Read-only index over the art tables, built once per process.
#[derive(Debug)]
pub struct Catalog {
    tables: [CategoryIndex; 5],
    random_pool: Vec<&'static str>,
}

impl Catalog {
    fn build() -> Self {
        let tables = Category::ALL.map(CategoryIndex::new);
        let random_pool: Vec<&'static str> = RANDOM_POOL
            .iter()
            .flat_map(|category| tables[category.index()].arts.iter().copied())
            .collect();

        debug!(
            entries = tables.iter().map(|t| t.keys.len()).sum::<usize>(),
            random_pool = random_pool.len(),
            "cat catalog built"
        );

        Self { tables, random_pool }
    }

    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    fn table(&self, category: Category) -> &CategoryIndex {
        &self.tables[category.index()]
    }

    /// Resolve `key` (or `default` when absent) case-insensitively.
    pub fn lookup(
        &self,
        category: Category,
        key: Option<&str>,
        default: &str,
    ) -> Result<&'static str, CatalogError> {
        let requested = key.unwrap_or(default);
        let normalized = requested.to_lowercase();

        match self.table(category).by_key.get(normalized.as_str()).copied() {
            Some(art) => Ok(art),
            None => {
                debug!(category = category.name(), key = requested, "unknown catalog key");
                Err(CatalogError::unknown_key(
                    category.key_kind(),
                    requested,
                    self.keys(category).iter().copied(),
                ))
            }
        }
    }

    pub fn contains(&self, category: Category, key: &str) -> bool {
        self.table(category).by_key.contains_key(key.to_lowercase().as_str())
    }

    pub fn keys(&self, category: Category) -> &[&'static str] {
        &self.table(category).keys
    }

    pub fn arts(&self, category: Category) -> &[&'static str] {
        &self.table(category).arts
    }

    pub fn random_pool(&self) -> &[&'static str] {
        &self.random_pool
    }

    pub fn list_keys(&self, category: Category) -> Vec<String> {
        self.keys(category).iter().map(|key| key.to_string()).collect()
    }

    pub fn all_entries(&self, category: Category) -> BTreeMap<String, String> {
        category
            .entries()
            .iter()
            .map(|(key, art)| (key.to_string(), art.to_string()))
            .collect()
    }
}

pub fn lookup(category: Category, key: Option<&str>, default: &str) -> Result<&'static str, CatalogError> {
    Catalog::global().lookup(category, key, default)
}

pub fn list_keys(category: Category) -> Vec<String> {
    Catalog::global().list_keys(category)
}

pub fn all_entries(category: Category) -> BTreeMap<String, String> {
    Catalog::global().all_entries(category)
}
