pub mod agg;
pub mod chart;
pub mod page;
