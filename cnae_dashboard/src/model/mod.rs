pub mod configs;
pub mod filter;
pub mod stock;
