pub mod art;
pub mod category;
pub mod error;
pub mod store;

pub use category::{Category, ACTIONS, CAT_TYPES, MOODS};
pub use error::{CatalogError, KeyKind};
pub use store::{all_entries, list_keys, lookup, Catalog, RANDOM_POOL};
