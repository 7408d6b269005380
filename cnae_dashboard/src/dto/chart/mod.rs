pub mod grouped_bar_data;
pub mod line_chart_data;
pub mod map_region;
