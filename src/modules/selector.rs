use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::modules::catalog::{Catalog, Category};

pub const PARADE_SEPARATOR: &str = "  ";

/// Uniform pick over every standard, kitten, big-cat and action entry.
pub fn random_pick() -> &'static str {
    random_pick_with(&mut rand::rng())
}

pub fn random_pick_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    Catalog::global()
        .random_pool()
        .choose(rng)
        .copied()
        .unwrap_or_default()
}

/// `count` picks with replacement from `category`, joined by two spaces.
/// Non-positive counts give an empty string.
pub fn parade(count: i64, category: Category) -> String {
    parade_with(&mut rand::rng(), count, category)
}

pub fn parade_with<R: Rng + ?Sized>(rng: &mut R, count: i64, category: Category) -> String {
    let arts = Catalog::global().arts(category);
    let mut parade = Vec::new();
    for _ in 0..count.max(0) {
        if let Some(art) = arts.choose(rng) {
            parade.push(*art);
        }
    }
    parade.join(PARADE_SEPARATOR)
}
