pub mod dashboard_metrics;
pub mod page_result;
