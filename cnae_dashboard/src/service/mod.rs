pub mod aggregate_service_impl;
pub mod chart_service_impl;
pub mod dashboard_service_impl;
pub mod page_service_impl;
