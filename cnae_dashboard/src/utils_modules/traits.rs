/* CSV 한 행 → 도메인 타입 변환을 위한 공통 트레이트 */
pub trait FromCsvRow
where
    Self: Sized,
{
    type Columns;

    fn from_csv_row(row: &csv::StringRecord, columns: &Self::Columns) -> Result<Self, anyhow::Error>;
}

/* 집계 결과 → 대시보드 데이터 테이블 행 변환을 위한 공통 트레이트 */
pub trait ToTableRow {
    fn table_headers() -> Vec<&'static str>;
    fn table_cells(&self) -> Vec<String>;
}
