pub mod catalog_service;
pub mod validation_service;

pub use catalog_service::*;
pub use validation_service::*;
