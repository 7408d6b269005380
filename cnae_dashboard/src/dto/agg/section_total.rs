use crate::common::*;

use crate::enums::cnae_section::*;
use crate::utils_modules::{number_utils::*, traits::*};

#[doc = "(municipio, 섹션) 별 총 고용 인원"]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct SectionTotal {
    pub municipality: String,
    pub section: CnaeSection,
    pub total_employees: i64,
}

impl ToTableRow for SectionTotal {
    fn table_headers() -> Vec<&'static str> {
        vec!["Município", "Seção CNAE", "Total de Empregados"]
    }

    fn table_cells(&self) -> Vec<String> {
        vec![
            self.municipality.clone(),
            self.section.label().to_string(),
            format_thousands(self.total_employees),
        ]
    }
}
