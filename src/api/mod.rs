pub mod types;
pub mod services;
pub mod endpoints;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use types::{ApiResult};
pub use endpoints::*;
