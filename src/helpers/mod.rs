pub mod config_helper;
pub mod schema_builder;
