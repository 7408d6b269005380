pub mod filter_config;
pub mod selection;
