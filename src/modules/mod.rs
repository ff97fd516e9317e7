pub mod bubble;
pub mod catalog;
pub mod selector;

pub use bubble::{with_speech_bubble, SpeechBubble};
pub use catalog::{Catalog, CatalogError, Category, KeyKind};
pub use selector::{parade, random_pick};
