pub mod neko_config;

pub use neko_config::{BubbleConfig, ConfigError, DefaultKeys, NekoConfig, CONFIG_FILE};
