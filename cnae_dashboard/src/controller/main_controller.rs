use crate::common::*;

use crate::dto::page::{dashboard_metrics::*, page_result::*};

use crate::enums::page_type::*;

use crate::model::{
    filter::{filter_config::*, selection::*},
    stock::{stock_record::*, stock_table::*},
};

use crate::traits::{
    repository_traits::dataset_repository::*,
    service_traits::{dashboard_service::*, page_service::*},
};

pub const NO_MUNICIPALITY_WARNING: &str =
    "Selecione pelo menos um município nos filtros da barra lateral.";
pub const PAGE_FAILURE_WARNING: &str = "Não foi possível gerar o gráfico desta página.";

#[derive(Debug, new)]
pub struct MainController<R: DatasetRepository, P: PageService, D: DashboardService> {
    dataset_repository: R,
    page_service: P,
    dashboard_service: D,
}

impl<R: DatasetRepository, P: PageService, D: DashboardService> MainController<R, P, D> {
    #[doc = r#"
        대시보드 한 번을 생성하는 핵심 함수.

        1. 재고 CSV 와 경계 GeoJSON 을 적재 (프로세스 전체에서 한 번)
        2. 필터 파일을 최종 선택값으로 해석 (생략 시 첫 옵션 기본 선택)
        3. 선택된 municipio 가 없으면 경고만 담아 대시보드 발행
        4. 페이지별로 필터 -> 집계 -> 차트 생성, 실패한 페이지는 경고로 대체
        5. HTML 대시보드 발행

        # Returns
        * `anyhow::Result<PathBuf>` - 생성된 index.html 경로
    "#]
    pub async fn main_task(&self, filter_config: &FilterConfig) -> anyhow::Result<PathBuf> {
        let table: StockTable = self.dataset_repository.load_stock_table().await?;

        let boundaries: FeatureCollection = match self.dataset_repository.load_boundaries().await
        {
            Ok(boundaries) => boundaries,
            Err(e) => {
                /* 경계 파일이 없어도 지도 외 페이지는 그릴 수 있다 */
                error!("[MainController->main_task] {:?}", e);
                FeatureCollection {
                    bbox: None,
                    features: Vec::new(),
                    foreign_members: None,
                }
            }
        };

        let selection: Selection = table.resolve_selection(filter_config);

        info!(
            "Selection resolved: {} municipalities, {} sections",
            selection.municipalities().len(),
            selection.sections().len()
        );

        if selection.municipalities().is_empty() {
            warn!("[MainController->main_task] {}", NO_MUNICIPALITY_WARNING);

            return self
                .dashboard_service
                .publish_dashboard(
                    &selection,
                    None,
                    &[NO_MUNICIPALITY_WARNING.to_string()],
                    &[],
                )
                .await;
        }

        let rows: Vec<&StockRecord> = table.filter(&selection);
        let metrics: DashboardMetrics = DashboardMetrics::from_rows(
            selection.municipalities().len(),
            selection.sections().len(),
            &rows,
        );

        let pages: Vec<PageResult> = self
            .render_pages(&filter_config.pages_or_all(), &table, &selection, &boundaries)
            .await;

        self.dashboard_service
            .publish_dashboard(&selection, Some(&metrics), &[], &pages)
            .await
    }

    #[doc = "페이지 렌더링. 개별 페이지 실패는 로그와 경고로 남기고 다음 페이지로 진행"]
    async fn render_pages(
        &self,
        pages: &[PageType],
        table: &StockTable,
        selection: &Selection,
        boundaries: &FeatureCollection,
    ) -> Vec<PageResult> {
        let mut page_results: Vec<PageResult> = Vec::new();

        for page in pages {
            match self
                .page_service
                .render_page(*page, table, selection, boundaries)
                .await
            {
                Ok(page_result) => page_results.push(page_result),
                Err(e) => {
                    error!(
                        "[MainController->render_pages] Failed to render '{}': {:?}",
                        page.nav_label(),
                        e
                    );
                    page_results.push(PageResult::warning_only(*page, PAGE_FAILURE_WARNING));
                }
            }
        }

        page_results
    }
}
