use crate::common::*;

use crate::dto::page::{dashboard_metrics::*, page_result::*};
use crate::model::filter::selection::*;

#[async_trait]
pub trait DashboardService: Send + Sync {
    #[doc = "필터 선택 내역, 요약 지표, 페이지 결과를 HTML 대시보드로 묶어 저장하고 경로를 반환"]
    async fn publish_dashboard(
        &self,
        selection: &Selection,
        metrics: Option<&DashboardMetrics>,
        warnings: &[String],
        pages: &[PageResult],
    ) -> anyhow::Result<PathBuf>;
}
