pub mod config;
pub mod modules;
pub mod api;
pub mod neko;

#[cfg(test)]
mod _test_mock;

pub use config::{NekoConfig, DefaultKeys, BubbleConfig, ConfigError};
pub use modules::catalog::{Catalog, Category, CatalogError, KeyKind, ACTIONS, CAT_TYPES, MOODS};
pub use modules::bubble::{with_speech_bubble, SpeechBubble};
pub use modules::selector::{parade, random_pick};
pub use neko::{
    Neko, get_random_cat, get_cat_by_mood, get_cat_with_message, get_cat_face, get_kitten,
    get_big_cat, get_action_cat, get_sleeping_cat, get_cat_parade, list_moods, list_actions,
    list_cat_types, get_all_cats_by_type,
};
