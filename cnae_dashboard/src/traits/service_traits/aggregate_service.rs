use crate::dto::agg::{cnae_total::*, monthly_point::*, region_value::*, section_total::*};
use crate::model::stock::stock_record::*;

pub trait AggregateService: Send + Sync {
    #[doc = "(municipio, 섹션) 별 total_empregados 합계, (섹션, municipio) 순 정렬"]
    fn section_totals(&self, rows: &[&StockRecord]) -> Vec<SectionTotal>;

    #[doc = "wide -> long 변환 후 (municipio, 섹션, 월) 별 합계, 월은 달력 순"]
    fn monthly_series(&self, rows: &[&StockRecord]) -> Vec<MonthlyPoint>;

    #[doc = "(municipio, CNAE, 섹션) 별 합계, 합계가 0 이하인 그룹은 제외. (CNAE, municipio) 순 정렬"]
    fn cnae_totals(&self, rows: &[&StockRecord]) -> Vec<CnaeTotal>;

    #[doc = "municipio 별 합계를 지도용 (region_name, value) 로 반환"]
    fn municipality_totals(&self, rows: &[&StockRecord]) -> Vec<RegionValue>;
}
