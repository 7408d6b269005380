use crate::common::*;

use crate::dto::page::{dashboard_metrics::*, page_result::*};
use crate::model::filter::selection::*;
use crate::traits::service_traits::dashboard_service::*;
use crate::utils_modules::time_utils::*;

const CELL_STYLE: &str =
    "border: 1px solid #ddd; padding: 8px; text-align: left; background-color: #fff;";
const HEADER_STYLE: &str =
    "border: 1px solid #ddd; padding: 8px; text-align: left; background-color: #f2f2f2;";

#[derive(Debug, new)]
pub struct DashboardServiceImpl {
    output_dir: PathBuf,
    template_path: PathBuf,
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl DashboardServiceImpl {
    #[doc = "사이드바: 선택된 municipio / 섹션 목록"]
    fn generate_sidebar_html(&self, selection: &Selection) -> String {
        let list = |items: Vec<String>| -> String {
            if items.is_empty() {
                return String::from("<li><em>Nenhum</em></li>");
            }
            items
                .iter()
                .map(|item| format!("<li>{}</li>", escape_html(item)))
                .collect::<Vec<String>>()
                .join("")
        };

        format!(
            r#"<h2>Filtros</h2>
            <h3>Município(s)</h3><ul>{}</ul>
            <h3>Seção(ões) CNAE</h3><ul>{}</ul>"#,
            list(selection.municipalities().iter().cloned().collect()),
            list(
                selection
                    .section_labels()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            )
        )
    }

    #[doc = "내비게이션: 렌더링된 페이지 앵커 목록"]
    fn generate_navigation_html(&self, pages: &[PageResult]) -> String {
        let items: String = pages
            .iter()
            .map(|p| {
                format!(
                    r##"<li><a href="#{}">{}</a></li>"##,
                    p.page().slug(),
                    p.page().nav_label()
                )
            })
            .collect::<Vec<String>>()
            .join("");

        format!("<h2>Navegação</h2><ul>{}</ul>", items)
    }

    fn generate_metrics_html(&self, metrics: Option<&DashboardMetrics>) -> String {
        let Some(metrics) = metrics else {
            return String::new();
        };

        metrics
            .labeled()
            .into_iter()
            .map(|(label, value)| {
                format!(
                    r#"<div class="metric"><div class="metric-label">{}</div><div class="metric-value">{}</div></div>"#,
                    label, value
                )
            })
            .collect::<Vec<String>>()
            .join("")
    }

    fn generate_warnings_html(&self, warnings: &[String]) -> String {
        warnings
            .iter()
            .map(|w| format!(r#"<div class="warning">⚠ {}</div>"#, escape_html(w)))
            .collect::<Vec<String>>()
            .join("")
    }

    #[doc = "집계 결과 데이터 테이블"]
    fn generate_table_html(&self, page: &PageResult) -> String {
        if page.table_rows().is_empty() {
            return String::new();
        }

        let mut table_html: String = String::from("<table><tr>");

        for header in page.table_headers() {
            table_html.push_str(&format!(
                r#"<th style="{}">{}</th>"#,
                HEADER_STYLE,
                escape_html(header)
            ));
        }
        table_html.push_str("</tr>");

        for row in page.table_rows() {
            table_html.push_str("<tr>");
            for cell in row {
                table_html.push_str(&format!(
                    r#"<td style="{}">{}</td>"#,
                    CELL_STYLE,
                    escape_html(cell)
                ));
            }
            table_html.push_str("</tr>");
        }

        table_html.push_str("</table>");
        table_html
    }

    fn generate_page_html(&self, page: &PageResult) -> String {
        let chart_html: String = match page.chart_path() {
            Some(chart_path) => {
                /* 이미지는 index.html 과 같은 디렉토리에 있으므로 파일명만 참조 */
                let file_name: String = chart_path
                    .file_name()
                    .map(|f| f.to_string_lossy().to_string())
                    .unwrap_or_default();
                format!(
                    r#"<img src="{}" alt="{}" style="max-width: 100%;">"#,
                    escape_html(&file_name),
                    escape_html(page.title())
                )
            }
            None => String::new(),
        };

        format!(
            r#"<section id="{}"><h1>{}</h1>{}{}{}</section>"#,
            page.page().slug(),
            page.page().page_title(),
            self.generate_warnings_html(page.warnings()),
            chart_html,
            self.generate_table_html(page)
        )
    }

    fn generate_dashboard_html(
        &self,
        template_content: &str,
        selection: &Selection,
        metrics: Option<&DashboardMetrics>,
        warnings: &[String],
        pages: &[PageResult],
    ) -> String {
        let pages_html: String = format!(
            "{}{}",
            self.generate_warnings_html(warnings),
            pages
                .iter()
                .map(|p| self.generate_page_html(p))
                .collect::<Vec<String>>()
                .join("")
        );

        template_content
            .replace("{{GENERATED_AT}}", &get_current_local_time_str())
            .replace("{{SIDEBAR}}", &self.generate_sidebar_html(selection))
            .replace("{{NAVIGATION}}", &self.generate_navigation_html(pages))
            .replace("{{METRICS}}", &self.generate_metrics_html(metrics))
            .replace("{{PAGES}}", &pages_html)
    }
}

#[async_trait]
impl DashboardService for DashboardServiceImpl {
    async fn publish_dashboard(
        &self,
        selection: &Selection,
        metrics: Option<&DashboardMetrics>,
        warnings: &[String],
        pages: &[PageResult],
    ) -> anyhow::Result<PathBuf> {
        /* HTML 템플릿 파일 읽기 */
        let template_content: String = tokio::fs::read_to_string(&self.template_path)
            .await
            .map_err(|e| {
                anyhow!(
                    "[DashboardServiceImpl->publish_dashboard] Failed to read template {:?}: {:?}",
                    self.template_path,
                    e
                )
            })?;

        let html_content: String =
            self.generate_dashboard_html(&template_content, selection, metrics, warnings, pages);

        tokio::fs::create_dir_all(&self.output_dir).await?;
        let index_path: PathBuf = self.output_dir.join("index.html");
        tokio::fs::write(&index_path, html_content).await?;

        info!("Dashboard published: {:?}", index_path);

        Ok(index_path)
    }
}
