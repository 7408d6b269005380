use crate::common::*;

use crate::enums::{cnae_section::*, month::*};
use crate::utils_modules::{number_utils::*, traits::*};

#[doc = "wide -> long 으로 변환된 월별 시계열 한 점"]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct MonthlyPoint {
    pub municipality: String,
    pub section: CnaeSection,
    pub month: Month,
    pub employees: i64,
}

impl ToTableRow for MonthlyPoint {
    fn table_headers() -> Vec<&'static str> {
        vec!["Município", "Seção CNAE", "Mês", "Empregados"]
    }

    fn table_cells(&self) -> Vec<String> {
        vec![
            self.municipality.clone(),
            self.section.label().to_string(),
            self.month.legend().to_string(),
            format_thousands(self.employees),
        ]
    }
}
