use crate::common::*;

use crate::enums::month::*;

#[doc = r#"
    재고 CSV 헤더에서 필요한 컬럼 위치를 찾아 둔 인덱스.

    컬럼은 이름으로 찾으며, 필수 컬럼이 하나라도 없으면 오류를 반환한다.
"#]
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct StockColumns {
    municipality: usize,
    cnae: usize,
    months: [usize; 12],
}

pub const MUNICIPALITY_COLUMN: &str = "municipio";
pub const CNAE_COLUMN: &str = "CNAE";

impl StockColumns {
    pub fn from_headers(headers: &csv::StringRecord) -> anyhow::Result<Self> {
        let position = |name: &str| -> anyhow::Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| {
                    anyhow!(
                        "[StockColumns->from_headers] Required column '{}' is missing",
                        name
                    )
                })
        };

        let mut months: [usize; 12] = [0; 12];
        for month in Month::ALL {
            months[month.index()] = position(month.column_name())?;
        }

        Ok(StockColumns {
            municipality: position(MUNICIPALITY_COLUMN)?,
            cnae: position(CNAE_COLUMN)?,
            months,
        })
    }
}
