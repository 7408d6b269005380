use crate::common::*;

use crate::model::{
    configs::dataset_config::*,
    stock::{stock_columns::*, stock_record::*, stock_table::*},
};

use crate::traits::repository_traits::dataset_repository::*;

use crate::utils_modules::traits::*;

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct DatasetRepositoryImpl {
    csv_path: PathBuf,
    geojson_path: PathBuf,
}

impl DatasetRepositoryImpl {
    pub fn from_config(dataset_config: &DatasetConfig) -> Self {
        DatasetRepositoryImpl::new(
            PathBuf::from(dataset_config.csv_path()),
            PathBuf::from(dataset_config.geojson_path()),
        )
    }

    #[doc = r#"
        CSV 리더에서 재고 테이블을 구성한다.

        1. 헤더에서 필수 컬럼(municipio, CNAE, estoque_*) 위치를 찾는다 - 없으면 오류
        2. 행마다 `StockRecord` 로 변환하며 섹션을 분류한다
        3. 변환에 실패한 행은 건너뛰고 개수만 센다
    "#]
    fn parse_stock_csv<R: std::io::Read>(reader: R) -> Result<StockTable, anyhow::Error> {
        let mut csv_reader: csv::Reader<R> = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: csv::StringRecord = csv_reader
            .headers()
            .context("[DatasetRepositoryImpl->parse_stock_csv] Failed to read CSV header")?
            .clone();
        let columns: StockColumns = StockColumns::from_headers(&headers)?;

        let mut records: Vec<StockRecord> = Vec::new();
        let mut skipped_rows: usize = 0;

        for (line_idx, result) in csv_reader.records().enumerate() {
            let row: csv::StringRecord = match result {
                Ok(row) => row,
                Err(e) => {
                    warn!(
                        "[DatasetRepositoryImpl->parse_stock_csv] Row {}: CSV parse error: {}",
                        line_idx + 2,
                        e
                    );
                    skipped_rows += 1;
                    continue;
                }
            };

            match StockRecord::from_csv_row(&row, &columns) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(
                        "[DatasetRepositoryImpl->parse_stock_csv] Row {}: {}",
                        line_idx + 2,
                        e
                    );
                    skipped_rows += 1;
                }
            }
        }

        if skipped_rows > 0 {
            warn!(
                "[DatasetRepositoryImpl->parse_stock_csv] {} invalid rows skipped",
                skipped_rows
            );
        }

        Ok(StockTable::new(records, skipped_rows))
    }
}

#[async_trait]
impl DatasetRepository for DatasetRepositoryImpl {
    async fn load_stock_table(&self) -> Result<StockTable, anyhow::Error> {
        let csv_path: PathBuf = self.csv_path.clone();

        let table: StockTable = tokio::task::spawn_blocking(move || {
            let file: fs::File = fs::File::open(&csv_path).with_context(|| {
                format!(
                    "[DatasetRepositoryImpl->load_stock_table] Failed to open {:?}",
                    csv_path
                )
            })?;
            Self::parse_stock_csv(std::io::BufReader::new(file))
        })
        .await
        .context("[DatasetRepositoryImpl->load_stock_table] blocking task join failed")??;

        info!(
            "Stock table loaded: {} rows ({} skipped), {} municipalities, {} sections",
            table.records().len(),
            table.skipped_rows(),
            table.municipalities().len(),
            table.sections().len()
        );

        Ok(table)
    }

    async fn load_boundaries(&self) -> Result<FeatureCollection, anyhow::Error> {
        let content: String = tokio::fs::read_to_string(&self.geojson_path)
            .await
            .with_context(|| {
                format!(
                    "[DatasetRepositoryImpl->load_boundaries] Failed to read {:?}",
                    self.geojson_path
                )
            })?;

        let collection: FeatureCollection = match content.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(collection) => collection,
            GeoJson::Feature(feature) => FeatureCollection {
                bbox: None,
                features: vec![feature],
                foreign_members: None,
            },
            GeoJson::Geometry(_) => {
                return Err(anyhow!(
                    "[DatasetRepositoryImpl->load_boundaries] {:?} holds a bare geometry, expected features",
                    self.geojson_path
                ))
            }
        };

        info!("Boundaries loaded: {} features", collection.features.len());

        Ok(collection)
    }
}
