pub mod cnae_section;
pub mod month;
pub mod page_type;
