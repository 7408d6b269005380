use crate::common::*;

use crate::model::stock::stock_record::*;
use crate::utils_modules::number_utils::*;

#[doc = "대시보드 상단 요약 지표"]
#[derive(Debug, Clone, PartialEq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct DashboardMetrics {
    pub municipality_count: usize,
    pub section_count: usize,
    pub total_employees: i64,
    pub distinct_cnae_count: usize,
}

impl DashboardMetrics {
    pub fn from_rows(municipality_count: usize, section_count: usize, rows: &[&StockRecord]) -> Self {
        let total_employees: i64 = rows.iter().map(|r| r.total()).sum();
        let distinct_cnae_count: usize = rows
            .iter()
            .map(|r| *r.cnae())
            .collect::<BTreeSet<u32>>()
            .len();

        DashboardMetrics::new(
            municipality_count,
            section_count,
            total_employees,
            distinct_cnae_count,
        )
    }

    #[doc = "(라벨, 표시값) 목록"]
    pub fn labeled(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Municípios selecionados", format_thousands(self.municipality_count as i64)),
            ("Seções selecionadas", format_thousands(self.section_count as i64)),
            ("Total de Empregados", format_thousands(self.total_employees)),
            ("CNAEs distintos", format_thousands(self.distinct_cnae_count as i64)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_sum_rows_and_count_codes() {
        let a: StockRecord = StockRecord::classified("Itajaí".to_string(), 47110, [100; 12]);
        let b: StockRecord = StockRecord::classified("Itajaí".to_string(), 47110, [1; 12]);
        let c: StockRecord = StockRecord::classified("Itajaí".to_string(), 85139, [0; 12]);

        let metrics: DashboardMetrics = DashboardMetrics::from_rows(1, 2, &[&a, &b, &c]);

        assert_eq!(*metrics.total_employees(), 1212);
        assert_eq!(*metrics.distinct_cnae_count(), 2);
        assert_eq!(metrics.labeled()[2].1, "1,212");
    }
}
