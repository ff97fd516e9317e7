pub mod catalog_mock;
