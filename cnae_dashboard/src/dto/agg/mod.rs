pub mod cnae_total;
pub mod monthly_point;
pub mod region_value;
pub mod section_total;
