pub mod stock_columns;
pub mod stock_record;
pub mod stock_table;
