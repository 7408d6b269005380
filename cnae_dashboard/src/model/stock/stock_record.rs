use crate::common::*;

use crate::enums::{cnae_section::*, month::*};
use crate::model::stock::stock_columns::*;
use crate::utils_modules::traits::*;

#[doc = r#"
    재고 CSV 한 행.

    # Fields
    * `municipality` - municipio 명
    * `cnae` - CNAE 5자리 코드
    * `section` - `cnae` 로부터 분류된 섹션
    * `monthly` - 1월~12월 재고(고용 인원), `Month::index()` 순서
"#]
#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct StockRecord {
    pub municipality: String,
    pub cnae: u32,
    pub section: CnaeSection,
    pub monthly: [i64; 12],
}

impl StockRecord {
    #[doc = "섹션을 분류하면서 레코드를 생성"]
    pub fn classified(municipality: String, cnae: u32, monthly: [i64; 12]) -> Self {
        StockRecord::new(municipality, cnae, CnaeSection::classify(cnae), monthly)
    }

    pub fn month(&self, month: Month) -> i64 {
        self.monthly[month.index()]
    }

    #[doc = "12개월 재고 합계 (total_empregados)"]
    pub fn total(&self) -> i64 {
        self.monthly.iter().sum()
    }
}

impl FromCsvRow for StockRecord {
    type Columns = StockColumns;

    fn from_csv_row(row: &csv::StringRecord, columns: &StockColumns) -> Result<Self, anyhow::Error> {
        let cell = |idx: usize| row.get(idx).map(str::trim).unwrap_or("");

        let municipality: &str = cell(*columns.municipality());
        if municipality.is_empty() {
            return Err(anyhow!("[StockRecord->from_csv_row] Empty 'municipio'"));
        }

        let cnae: u32 = cell(*columns.cnae()).parse::<u32>().map_err(|e| {
            anyhow!(
                "[StockRecord->from_csv_row] Invalid CNAE '{}': {:?}",
                cell(*columns.cnae()),
                e
            )
        })?;

        /* 빈 셀은 0 으로 취급 */
        let mut monthly: [i64; 12] = [0; 12];
        for month in Month::ALL {
            let raw: &str = cell(columns.months()[month.index()]);
            if raw.is_empty() {
                continue;
            }

            monthly[month.index()] = raw.parse::<i64>().map_err(|e| {
                anyhow!(
                    "[StockRecord->from_csv_row] Invalid value '{}' in '{}': {:?}",
                    raw,
                    month.column_name(),
                    e
                )
            })?;
        }

        Ok(StockRecord::classified(municipality.to_string(), cnae, monthly))
    }
}
