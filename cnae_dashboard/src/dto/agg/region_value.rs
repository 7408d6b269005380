use crate::common::*;

use crate::utils_modules::{number_utils::*, traits::*};

#[doc = r#"
    지도용으로 컬럼명을 바꾼 집계 행.

    # Fields
    * `region_name` - GeoJSON 피처의 이름 속성과 매칭되는 municipio 명
    * `value` - 선택 섹션 기준 총 고용 인원
"#]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct RegionValue {
    pub region_name: String,
    pub value: i64,
}

impl ToTableRow for RegionValue {
    fn table_headers() -> Vec<&'static str> {
        vec!["Município", "Total de Empregados"]
    }

    fn table_cells(&self) -> Vec<String> {
        vec![self.region_name.clone(), format_thousands(self.value)]
    }
}
