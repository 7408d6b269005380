pub mod aggregate_service;
pub mod chart_service;
pub mod dashboard_service;
pub mod page_service;
