use crate::common::*;

use crate::model::stock::stock_table::*;

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    #[doc = "재고 CSV 를 읽어 섹션 분류까지 끝난 테이블로 적재"]
    async fn load_stock_table(&self) -> Result<StockTable, anyhow::Error>;

    #[doc = "municipio 경계 GeoJSON FeatureCollection 적재"]
    async fn load_boundaries(&self) -> Result<FeatureCollection, anyhow::Error>;
}
