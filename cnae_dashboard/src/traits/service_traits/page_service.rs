use crate::common::*;

use crate::dto::page::page_result::*;
use crate::enums::page_type::*;
use crate::model::{filter::selection::*, stock::stock_table::*};

#[async_trait]
pub trait PageService: Send + Sync {
    #[doc = r#"
        페이지 하나를 렌더링한다: 필터 -> 집계 -> 차트 입력 변환 -> 차트 이미지 생성.
        입력 검증에 걸리면 차트 없이 경고만 담긴 `PageResult` 를 반환한다.
    "#]
    async fn render_page(
        &self,
        page: PageType,
        table: &StockTable,
        selection: &Selection,
        boundaries: &FeatureCollection,
    ) -> anyhow::Result<PageResult>;
}
