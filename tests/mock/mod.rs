pub mod api_mock;

pub use api_mock::*;
