use crate::common::*;

use crate::dto::chart::{grouped_bar_data::*, line_chart_data::*, map_region::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Generate a grouped bar chart (one bar per series inside each category) and save it as an image file
        # Arguments
        * `title` - Chart title
        * `data` - Categories and per-series values
        * `output_path` - Path where the chart image will be saved
        * `x_label` - Label for X-axis
        * `y_label` - Label for Y-axis
    "]
    async fn generate_grouped_bar_chart(
        &self,
        title: &str,
        data: GroupedBarData,
        output_path: &Path,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<()>;

    #[doc = "
        Generate a multi-series line chart with point markers and save it as an image file
        # Arguments
        * `title` - Chart title
        * `data` - X labels and series (colour / dash groups)
        * `output_path` - Path where the chart image will be saved
        * `x_label` - Label for X-axis
        * `y_label` - Label for Y-axis
    "]
    async fn generate_line_chart(
        &self,
        title: &str,
        data: LineChartData,
        output_path: &Path,
        x_label: &str,
        y_label: &str,
    ) -> anyhow::Result<()>;

    #[doc = "
        Generate a choropleth map where each region is filled on a sequential colour scale
        # Arguments
        * `title` - Chart title
        * `data` - Region polygons with their values
        * `output_path` - Path where the map image will be saved
    "]
    async fn generate_choropleth_map(
        &self,
        title: &str,
        data: ChoroplethData,
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
