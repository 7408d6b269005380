use crate::common::*;

use crate::dto::{
    agg::{cnae_total::*, monthly_point::*, region_value::*, section_total::*},
    chart::{grouped_bar_data::*, line_chart_data::*, map_region::*},
    page::page_result::*,
};
use crate::enums::page_type::*;
use crate::model::{filter::selection::*, stock::stock_record::*, stock::stock_table::*};
use crate::traits::service_traits::{aggregate_service::*, chart_service::*, page_service::*};
use crate::utils_modules::{io_utils::*, traits::*};

pub const NO_SECTION_WARNING: &str = "Selecione pelo menos uma seção CNAE nos filtros.";
pub const NO_DATA_WARNING: &str = "Nenhum dado encontrado para os filtros selecionados.";
pub const NO_POSITIVE_CNAE_WARNING: &str =
    "Nenhum CNAE com empregados encontrado para os filtros selecionados.";
pub const NO_POLYGON_WARNING: &str = "Nenhum polígono de município encontrado no GeoJSON.";

const EMPLOYEES_LABEL: &str = "Total de Empregados";

#[derive(Debug, new)]
pub struct PageServiceImpl<A: AggregateService, C: ChartService> {
    aggregate_service: A,
    chart_service: C,
    output_dir: PathBuf,
    region_name_property: String,
}

#[doc = "제목에 들어갈 섹션 목록: 3개 이하면 이름 나열, 그보다 많으면 개수"]
pub fn sections_title(section_labels: &[&str]) -> String {
    if section_labels.len() <= 3 {
        section_labels.join(", ")
    } else {
        format!("{} seções selecionadas", section_labels.len())
    }
}

fn to_table<T: ToTableRow>(items: &[T]) -> (Vec<&'static str>, Vec<Vec<String>>) {
    (
        T::table_headers(),
        items.iter().map(|item| item.table_cells()).collect(),
    )
}

impl<A, C> PageServiceImpl<A, C>
where
    A: AggregateService,
    C: ChartService,
{
    fn chart_path(&self, page: PageType) -> PathBuf {
        self.output_dir.join(format!("{}.png", page.slug()))
    }

    fn data_path(&self, page: PageType) -> PathBuf {
        self.output_dir.join(format!("{}.json", page.slug()))
    }

    #[doc = r#"
        이전 실행에서 남은 페이지 산출물(차트 이미지, 집계 JSON) 제거.
        경고만 남는 페이지가 예전 선택의 차트를 계속 가리키지 않도록 렌더링 전에 호출한다.
    "#]
    async fn clear_page_artifacts(&self, page: PageType) -> anyhow::Result<()> {
        for path in [self.chart_path(page), self.data_path(page)] {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => info!("Removed stale page artifact: {:?}", path),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(anyhow!(
                        "[PageServiceImpl->clear_page_artifacts] Failed to remove {:?}: {:?}",
                        path,
                        e
                    ))
                }
            }
        }

        Ok(())
    }

    fn finish_page<T: ToTableRow + Serialize>(
        &self,
        page: PageType,
        title: String,
        items: &[T],
    ) -> anyhow::Result<PageResult> {
        write_json_to_file(&self.data_path(page), &items)?;

        let (table_headers, table_rows) = to_table(items);

        Ok(PageResult::new(
            page,
            title,
            Some(self.chart_path(page)),
            Vec::new(),
            table_headers,
            table_rows,
        ))
    }

    #[doc = "섹션별 그룹 막대 차트"]
    async fn render_section_bar(&self, rows: &[&StockRecord]) -> anyhow::Result<PageResult> {
        let page: PageType = PageType::SectionBar;
        let totals: Vec<SectionTotal> = self.aggregate_service.section_totals(rows);

        if totals.is_empty() {
            return Ok(PageResult::warning_only(page, NO_DATA_WARNING));
        }

        let title: String = String::from("Total de Empregados por Seção CNAE e Município");

        self.chart_service
            .generate_grouped_bar_chart(
                &title,
                GroupedBarData::from_section_totals(&totals),
                &self.chart_path(page),
                "Seção CNAE",
                EMPLOYEES_LABEL,
            )
            .await?;

        self.finish_page(page, title, &totals)
    }

    #[doc = "월별 시계열 선 차트. 섹션이 2개 이상 선택된 경우에만 섹션별 선 패턴을 구분"]
    async fn render_monthly_line(
        &self,
        rows: &[&StockRecord],
        selection: &Selection,
    ) -> anyhow::Result<PageResult> {
        let page: PageType = PageType::MonthlyLine;
        let points: Vec<MonthlyPoint> = self.aggregate_service.monthly_series(rows);

        if points.is_empty() {
            return Ok(PageResult::warning_only(page, NO_DATA_WARNING));
        }

        let title: String =
            String::from("Evolução Mensal de Empregados por Município e Seção CNAE");
        let dash_by_section: bool = selection.sections().len() > 1;

        self.chart_service
            .generate_line_chart(
                &title,
                LineChartData::from_monthly_points(&points, dash_by_section),
                &self.chart_path(page),
                "Mês",
                EMPLOYEES_LABEL,
            )
            .await?;

        self.finish_page(page, title, &points)
    }

    #[doc = r#"
        CNAE 5자리 코드별 그룹 막대 차트.

        1. 선택된 섹션이 없으면 경고
        2. 필터 결과가 비어 있으면 경고
        3. 고용 인원이 0 보다 큰 CNAE 가 없으면 경고
    "#]
    async fn render_cnae_breakdown(
        &self,
        rows: &[&StockRecord],
        selection: &Selection,
    ) -> anyhow::Result<PageResult> {
        let page: PageType = PageType::CnaeBreakdown;

        if selection.sections().is_empty() {
            return Ok(PageResult::warning_only(page, NO_SECTION_WARNING));
        }

        if rows.is_empty() {
            return Ok(PageResult::warning_only(page, NO_DATA_WARNING));
        }

        let totals: Vec<CnaeTotal> = self.aggregate_service.cnae_totals(rows);

        if totals.is_empty() {
            return Ok(PageResult::warning_only(page, NO_POSITIVE_CNAE_WARNING));
        }

        let title: String = format!(
            "Total de Empregados por CNAE (5 dígitos) - {}",
            sections_title(&selection.section_labels())
        );

        self.chart_service
            .generate_grouped_bar_chart(
                &title,
                GroupedBarData::from_cnae_totals(&totals),
                &self.chart_path(page),
                "CNAE (5 dígitos)",
                EMPLOYEES_LABEL,
            )
            .await?;

        self.finish_page(page, title, &totals)
    }

    #[doc = r#"
        municipio 단계구분도. 선택 섹션 기준으로 전체 municipio 를 칠하고,
        사이드바에서 선택된 municipio 는 외곽선으로 강조한다.
    "#]
    async fn render_choropleth_map(
        &self,
        table: &StockTable,
        selection: &Selection,
        boundaries: &FeatureCollection,
    ) -> anyhow::Result<PageResult> {
        let page: PageType = PageType::ChoroplethMap;

        if selection.sections().is_empty() {
            return Ok(PageResult::warning_only(page, NO_SECTION_WARNING));
        }

        let rows: Vec<&StockRecord> = table.filter_sections(selection);
        let values: Vec<RegionValue> = self.aggregate_service.municipality_totals(&rows);

        let map_data: ChoroplethData = ChoroplethData::from_features(
            boundaries,
            &self.region_name_property,
            &values,
            selection.municipalities(),
        );

        if map_data.regions().is_empty() {
            return Ok(PageResult::warning_only(page, NO_POLYGON_WARNING));
        }

        let unmatched: usize = map_data.regions().iter().filter(|r| r.value().is_none()).count();
        if unmatched > 0 {
            info!(
                "[PageServiceImpl->render_choropleth_map] {} regions without stock data",
                unmatched
            );
        }

        let title: String = format!(
            "Total de Empregados por Município - {}",
            sections_title(&selection.section_labels())
        );

        self.chart_service
            .generate_choropleth_map(&title, map_data, &self.chart_path(page))
            .await?;

        self.finish_page(page, title, &values)
    }
}

#[async_trait]
impl<A, C> PageService for PageServiceImpl<A, C>
where
    A: AggregateService,
    C: ChartService,
{
    async fn render_page(
        &self,
        page: PageType,
        table: &StockTable,
        selection: &Selection,
        boundaries: &FeatureCollection,
    ) -> anyhow::Result<PageResult> {
        info!("Rendering page: {}", page.nav_label());

        self.clear_page_artifacts(page).await?;

        let rows: Vec<&StockRecord> = table.filter(selection);

        match page {
            PageType::SectionBar => self.render_section_bar(&rows).await,
            PageType::MonthlyLine => self.render_monthly_line(&rows, selection).await,
            PageType::CnaeBreakdown => self.render_cnae_breakdown(&rows, selection).await,
            PageType::ChoroplethMap => {
                self.render_choropleth_map(table, selection, boundaries).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::enums::cnae_section::*;
    use crate::service::aggregate_service_impl::*;
    use std::sync::Mutex;

    #[doc = "실제 그리기 대신 빈 파일만 남기고 호출 내역을 기록하는 차트 서비스"]
    #[derive(Default)]
    struct RecordingChartService {
        calls: Mutex<Vec<(String, PathBuf)>>,
        dash_groups: Mutex<Vec<Option<usize>>>,
    }

    impl RecordingChartService {
        fn record(&self, title: &str, output_path: &Path) -> anyhow::Result<()> {
            fs::write(output_path, b"")?;
            self.calls
                .lock()
                .unwrap()
                .push((title.to_string(), output_path.to_path_buf()));
            Ok(())
        }
    }

    #[async_trait]
    impl ChartService for RecordingChartService {
        async fn generate_grouped_bar_chart(
            &self,
            title: &str,
            _data: GroupedBarData,
            output_path: &Path,
            _x_label: &str,
            _y_label: &str,
        ) -> anyhow::Result<()> {
            self.record(title, output_path)
        }

        async fn generate_line_chart(
            &self,
            title: &str,
            data: LineChartData,
            output_path: &Path,
            _x_label: &str,
            _y_label: &str,
        ) -> anyhow::Result<()> {
            assert_eq!(data.x_labels().len(), 12);
            self.dash_groups
                .lock()
                .unwrap()
                .extend(data.series().iter().map(|s| *s.dash_group()));
            self.record(title, output_path)
        }

        async fn generate_choropleth_map(
            &self,
            title: &str,
            data: ChoroplethData,
            output_path: &Path,
        ) -> anyhow::Result<()> {
            assert!(!data.regions().is_empty());
            self.record(title, output_path)
        }
    }

    fn sample_table() -> StockTable {
        StockTable::new(
            vec![
                StockRecord::classified("Joinville".to_string(), 41204, [10; 12]),
                StockRecord::classified("Joinville".to_string(), 42111, [0; 12]),
                StockRecord::classified("Blumenau".to_string(), 41204, [3; 12]),
                StockRecord::classified("Blumenau".to_string(), 85139, [0; 12]),
            ],
            0,
        )
    }

    fn sample_boundaries() -> FeatureCollection {
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"name":"Joinville"},"geometry":{"type":"Polygon","coordinates":[[[-49.0,-26.4],[-48.8,-26.4],[-48.8,-26.2],[-49.0,-26.4]]]}},
            {"type":"Feature","properties":{"name":"Blumenau"},"geometry":{"type":"Polygon","coordinates":[[[-49.2,-27.0],[-49.0,-27.0],[-49.0,-26.8],[-49.2,-27.0]]]}}
        ]}"#
        .parse()
        .unwrap()
    }

    fn selection(municipalities: &[&str], sections: &[CnaeSection]) -> Selection {
        Selection::new(
            municipalities.iter().map(|m| m.to_string()).collect(),
            sections.iter().copied().collect(),
        )
    }

    fn service(output_dir: &Path) -> PageServiceImpl<AggregateServiceImpl, RecordingChartService> {
        PageServiceImpl::new(
            AggregateServiceImpl::new(),
            RecordingChartService::default(),
            output_dir.to_path_buf(),
            "name".to_string(),
        )
    }

    #[test]
    fn sections_title_lists_up_to_three() {
        assert_eq!(sections_title(&["Educação"]), "Educação");
        assert_eq!(sections_title(&["A", "B", "C"]), "A, B, C");
        assert_eq!(sections_title(&["A", "B", "C", "D"]), "4 seções selecionadas");
    }

    #[tokio::test]
    async fn section_bar_renders_chart_and_table() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(dir.path());

        let result: PageResult = service
            .render_page(
                PageType::SectionBar,
                &sample_table(),
                &selection(&["Joinville", "Blumenau"], &[CnaeSection::Construction]),
                &sample_boundaries(),
            )
            .await
            .unwrap();

        assert!(result.warnings().is_empty());
        assert_eq!(result.chart_path(), &Some(dir.path().join("section_bar.png")));
        assert_eq!(result.table_rows().len(), 2);
        assert_eq!(result.table_rows()[1][2], "120");
        assert!(dir.path().join("section_bar.json").exists());
        assert_eq!(service.chart_service.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn cnae_breakdown_validation_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(dir.path());
        let table: StockTable = sample_table();
        let boundaries: FeatureCollection = sample_boundaries();

        let no_section: PageResult = service
            .render_page(PageType::CnaeBreakdown, &table, &selection(&["Joinville"], &[]), &boundaries)
            .await
            .unwrap();
        assert_eq!(no_section.warnings(), &vec![NO_SECTION_WARNING.to_string()]);
        assert!(no_section.chart_path().is_none());

        let no_rows: PageResult = service
            .render_page(
                PageType::CnaeBreakdown,
                &table,
                &selection(&["Joinville"], &[CnaeSection::Education]),
                &boundaries,
            )
            .await
            .unwrap();
        assert_eq!(no_rows.warnings(), &vec![NO_DATA_WARNING.to_string()]);

        let only_zero: PageResult = service
            .render_page(
                PageType::CnaeBreakdown,
                &table,
                &selection(&["Blumenau"], &[CnaeSection::Education]),
                &boundaries,
            )
            .await
            .unwrap();
        assert_eq!(only_zero.warnings(), &vec![NO_POSITIVE_CNAE_WARNING.to_string()]);

        assert!(service.chart_service.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn cnae_breakdown_keeps_positive_codes_only() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(dir.path());

        let result: PageResult = service
            .render_page(
                PageType::CnaeBreakdown,
                &sample_table(),
                &selection(&["Joinville"], &[CnaeSection::Construction]),
                &sample_boundaries(),
            )
            .await
            .unwrap();

        assert_eq!(result.table_rows().len(), 1);
        assert_eq!(result.table_rows()[0][1], "41204");
        assert_eq!(
            result.title(),
            "Total de Empregados por CNAE (5 dígitos) - Construção"
        );
    }

    #[tokio::test]
    async fn monthly_line_and_map_render() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(dir.path());
        let table: StockTable = sample_table();
        let boundaries: FeatureCollection = sample_boundaries();
        let selected: Selection = selection(&["Joinville"], &[CnaeSection::Construction]);

        let line: PageResult = service
            .render_page(PageType::MonthlyLine, &table, &selected, &boundaries)
            .await
            .unwrap();
        assert_eq!(line.table_rows().len(), 12);

        let map: PageResult = service
            .render_page(PageType::ChoroplethMap, &table, &selected, &boundaries)
            .await
            .unwrap();
        /* 지도는 섹션 기준으로 전체 municipio 를 집계 */
        assert_eq!(map.table_rows().len(), 2);
        assert_eq!(service.chart_service.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn empty_selection_yields_no_data_warning() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(dir.path());

        let result: PageResult = service
            .render_page(
                PageType::SectionBar,
                &sample_table(),
                &selection(&["Joinville"], &[CnaeSection::Education]),
                &sample_boundaries(),
            )
            .await
            .unwrap();

        assert_eq!(result.warnings(), &vec![NO_DATA_WARNING.to_string()]);
    }

    #[tokio::test]
    async fn warning_page_removes_previous_chart_and_data() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(dir.path());
        let table: StockTable = sample_table();
        let boundaries: FeatureCollection = sample_boundaries();

        service
            .render_page(
                PageType::CnaeBreakdown,
                &table,
                &selection(&["Joinville"], &[CnaeSection::Construction]),
                &boundaries,
            )
            .await
            .unwrap();

        let chart_path: PathBuf = dir.path().join("cnae_breakdown.png");
        let data_path: PathBuf = dir.path().join("cnae_breakdown.json");
        assert!(chart_path.exists());
        assert!(data_path.exists());

        let result: PageResult = service
            .render_page(
                PageType::CnaeBreakdown,
                &table,
                &selection(&["Joinville"], &[CnaeSection::Education]),
                &boundaries,
            )
            .await
            .unwrap();

        assert_eq!(result.warnings(), &vec![NO_DATA_WARNING.to_string()]);
        assert!(!chart_path.exists());
        assert!(!data_path.exists());
    }

    #[tokio::test]
    async fn monthly_line_dashes_only_with_several_sections() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(dir.path());
        let boundaries: FeatureCollection = sample_boundaries();
        let table: StockTable = StockTable::new(
            vec![
                StockRecord::classified("Joinville".to_string(), 41204, [10; 12]),
                StockRecord::classified("Joinville".to_string(), 85139, [4; 12]),
            ],
            0,
        );

        service
            .render_page(
                PageType::MonthlyLine,
                &table,
                &selection(&["Joinville"], &[CnaeSection::Construction]),
                &boundaries,
            )
            .await
            .unwrap();
        assert_eq!(*service.chart_service.dash_groups.lock().unwrap(), vec![None]);

        service.chart_service.dash_groups.lock().unwrap().clear();

        service
            .render_page(
                PageType::MonthlyLine,
                &table,
                &selection(
                    &["Joinville"],
                    &[CnaeSection::Construction, CnaeSection::Education],
                ),
                &boundaries,
            )
            .await
            .unwrap();

        let dash_groups: Vec<Option<usize>> =
            service.chart_service.dash_groups.lock().unwrap().clone();
        assert_eq!(dash_groups.len(), 2);
        assert!(dash_groups.iter().all(|g| g.is_some()));
        assert_ne!(dash_groups[0], dash_groups[1]);
    }
}
