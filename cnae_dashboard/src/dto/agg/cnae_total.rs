use crate::common::*;

use crate::enums::cnae_section::*;
use crate::utils_modules::{number_utils::*, traits::*};

#[doc = "(municipio, CNAE, 섹션) 별 총 고용 인원"]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct CnaeTotal {
    pub municipality: String,
    pub cnae: u32,
    pub section: CnaeSection,
    pub total_employees: i64,
}

impl ToTableRow for CnaeTotal {
    fn table_headers() -> Vec<&'static str> {
        vec!["Município", "CNAE (5 dígitos)", "Seção CNAE", "Total de Empregados"]
    }

    fn table_cells(&self) -> Vec<String> {
        vec![
            self.municipality.clone(),
            format!("{:05}", self.cnae),
            self.section.label().to_string(),
            format_thousands(self.total_employees),
        ]
    }
}
