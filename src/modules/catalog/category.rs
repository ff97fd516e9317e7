use std::fmt;
use std::str::FromStr;

use crate::modules::catalog::art;
use crate::modules::catalog::error::{CatalogError, KeyKind};

pub const MOODS: &[&str] = &[
    "standard", "happy", "sad", "sleepy", "excited", "angry", "curious", "love", "wink", "surprised",
];

pub const ACTIONS: &[&str] = &["running", "sleeping", "pouncing", "hunting"];

pub const CAT_TYPES: &[&str] = &["standard", "face", "kitten", "big", "action"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Standard,
    Face,
    Kitten,
    BigCat,
    Action,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Standard,
        Category::Face,
        Category::Kitten,
        Category::BigCat,
        Category::Action,
    ];

    /// Public name, as accepted by `Category::parse`.
    pub fn name(self) -> &'static str {
        match self {
            Category::Standard => "standard",
            Category::Face => "face",
            Category::Kitten => "kitten",
            Category::BigCat => "big",
            Category::Action => "action",
        }
    }

    pub fn key_kind(self) -> KeyKind {
        match self {
            Category::Standard => KeyKind::Mood,
            Category::Face => KeyKind::FaceType,
            Category::Kitten => KeyKind::KittenType,
            Category::BigCat => KeyKind::Pose,
            Category::Action => KeyKind::Action,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Category::Standard => art::MOOD_CATS,
            Category::Face => art::CAT_FACES,
            Category::Kitten => art::KITTENS,
            Category::BigCat => art::BIG_CATS,
            Category::Action => art::ACTION_CATS,
        }
    }

    /// Case-insensitive parse of a category name.
    pub fn parse(name: &str) -> Result<Self, CatalogError> {
        let normalized = name.to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.name() == normalized)
            .ok_or_else(|| CatalogError::unknown_key(KeyKind::CatType, name, CAT_TYPES.iter().copied()))
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
