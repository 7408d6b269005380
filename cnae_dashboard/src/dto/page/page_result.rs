use crate::common::*;

use crate::enums::page_type::*;

#[doc = r#"
    페이지 하나의 렌더링 결과.

    # Fields
    * `page` - 페이지 종류
    * `title` - 차트 제목
    * `chart_path` - 생성된 차트 이미지, 그릴 데이터가 없으면 `None`
    * `warnings` - 사용자에게 보여줄 입력 검증 경고
    * `table_headers` / `table_rows` - 집계 결과 데이터 테이블
"#]
#[derive(Debug, Clone, Getters, Setters, new)]
#[getset(get = "pub", set = "pub")]
pub struct PageResult {
    pub page: PageType,
    pub title: String,
    pub chart_path: Option<PathBuf>,
    pub warnings: Vec<String>,
    pub table_headers: Vec<&'static str>,
    pub table_rows: Vec<Vec<String>>,
}

impl PageResult {
    #[doc = "차트 없이 경고만 담은 결과"]
    pub fn warning_only(page: PageType, warning: &str) -> Self {
        warn!("[{}] {}", page.nav_label(), warning);
        PageResult::new(
            page,
            page.page_title().to_string(),
            None,
            vec![warning.to_string()],
            Vec::new(),
            Vec::new(),
        )
    }
}
