use crate::common::*;

use crate::dto::agg::{cnae_total::*, monthly_point::*, region_value::*, section_total::*};
use crate::enums::{cnae_section::*, month::*};
use crate::model::stock::stock_record::*;
use crate::traits::service_traits::aggregate_service::*;

#[derive(Debug, Clone, new)]
pub struct AggregateServiceImpl;

impl AggregateService for AggregateServiceImpl {
    fn section_totals(&self, rows: &[&StockRecord]) -> Vec<SectionTotal> {
        let mut grouped: BTreeMap<(CnaeSection, &str), i64> = BTreeMap::new();

        for row in rows {
            *grouped
                .entry((*row.section(), row.municipality().as_str()))
                .or_insert(0) += row.total();
        }

        grouped
            .into_iter()
            .map(|((section, municipality), total)| {
                SectionTotal::new(municipality.to_string(), section, total)
            })
            .collect()
    }

    fn monthly_series(&self, rows: &[&StockRecord]) -> Vec<MonthlyPoint> {
        let mut grouped: BTreeMap<(&str, CnaeSection, Month), i64> = BTreeMap::new();

        for row in rows {
            for month in Month::ALL {
                *grouped
                    .entry((row.municipality().as_str(), *row.section(), month))
                    .or_insert(0) += row.month(month);
            }
        }

        grouped
            .into_iter()
            .map(|((municipality, section, month), employees)| {
                MonthlyPoint::new(municipality.to_string(), section, month, employees)
            })
            .collect()
    }

    fn cnae_totals(&self, rows: &[&StockRecord]) -> Vec<CnaeTotal> {
        let mut grouped: BTreeMap<(u32, &str), (CnaeSection, i64)> = BTreeMap::new();

        for row in rows {
            grouped
                .entry((*row.cnae(), row.municipality().as_str()))
                .or_insert((*row.section(), 0))
                .1 += row.total();
        }

        grouped
            .into_iter()
            .filter(|(_, (_, total))| *total > 0)
            .map(|((cnae, municipality), (section, total))| {
                CnaeTotal::new(municipality.to_string(), cnae, section, total)
            })
            .collect()
    }

    fn municipality_totals(&self, rows: &[&StockRecord]) -> Vec<RegionValue> {
        let mut grouped: BTreeMap<&str, i64> = BTreeMap::new();

        for row in rows {
            *grouped.entry(row.municipality().as_str()).or_insert(0) += row.total();
        }

        grouped
            .into_iter()
            .map(|(municipality, total)| RegionValue::new(municipality.to_string(), total))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<StockRecord> {
        let mut rising: [i64; 12] = [0; 12];
        for (i, v) in rising.iter_mut().enumerate() {
            *v = i as i64 + 1;
        }

        vec![
            StockRecord::classified("Joinville".to_string(), 41204, [10; 12]),
            StockRecord::classified("Joinville".to_string(), 42111, rising),
            StockRecord::classified("Blumenau".to_string(), 41204, [1; 12]),
            StockRecord::classified("Blumenau".to_string(), 47110, [0; 12]),
        ]
    }

    #[test]
    fn section_totals_group_by_municipality_and_section() {
        let rows: Vec<StockRecord> = rows();
        let refs: Vec<&StockRecord> = rows.iter().collect();

        let totals: Vec<SectionTotal> = AggregateServiceImpl::new().section_totals(&refs);

        assert_eq!(
            totals,
            vec![
                SectionTotal::new("Blumenau".to_string(), CnaeSection::Commerce, 0),
                SectionTotal::new("Blumenau".to_string(), CnaeSection::Construction, 12),
                SectionTotal::new("Joinville".to_string(), CnaeSection::Construction, 198),
            ]
        );
    }

    #[test]
    fn monthly_series_is_long_and_in_calendar_order() {
        let rows: Vec<StockRecord> = rows();
        let refs: Vec<&StockRecord> = rows.iter().filter(|r| r.municipality() == "Joinville").collect();

        let points: Vec<MonthlyPoint> = AggregateServiceImpl::new().monthly_series(&refs);

        assert_eq!(points.len(), 12);
        assert_eq!(*points[0].month(), Month::Jan);
        assert_eq!(*points[0].employees(), 11);
        assert_eq!(*points[11].month(), Month::Dez);
        assert_eq!(*points[11].employees(), 22);
    }

    #[test]
    fn cnae_totals_drop_codes_without_employees() {
        let rows: Vec<StockRecord> = rows();
        let refs: Vec<&StockRecord> = rows.iter().collect();

        let totals: Vec<CnaeTotal> = AggregateServiceImpl::new().cnae_totals(&refs);

        assert_eq!(totals.len(), 3);
        assert!(totals.iter().all(|t| *t.total_employees() > 0));
        assert_eq!(*totals[0].cnae(), 41204);
        assert_eq!(totals[0].municipality(), "Blumenau");
        assert_eq!(*totals[2].cnae(), 42111);
        assert_eq!(*totals[2].total_employees(), 78);
    }

    #[test]
    fn municipality_totals_rename_for_map() {
        let rows: Vec<StockRecord> = rows();
        let refs: Vec<&StockRecord> = rows.iter().collect();

        let values: Vec<RegionValue> = AggregateServiceImpl::new().municipality_totals(&refs);

        assert_eq!(
            values,
            vec![
                RegionValue::new("Blumenau".to_string(), 12),
                RegionValue::new("Joinville".to_string(), 198),
            ]
        );
    }
}
