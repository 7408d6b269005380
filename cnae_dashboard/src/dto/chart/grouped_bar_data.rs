use crate::common::*;

use crate::dto::agg::{cnae_total::*, section_total::*};

#[doc = r#"
    그룹 막대 차트 입력.

    # Fields
    * `categories` - X축 카테고리 라벨 (그룹 단위)
    * `series` - 범례 항목별 값. `values[i]` 는 `categories[i]` 에 대응
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct GroupedBarData {
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
}

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<i64>,
}

impl GroupedBarData {
    pub fn max_value(&self) -> i64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() || self.series.is_empty()
    }

    #[doc = r#"
        카테고리 x 범례 항목 테이블로 펼친다. 값이 없는 칸은 0.

        `entries` 는 (카테고리 키, 범례 이름, 값) 이며, 카테고리와 범례 모두 키 순서로 정렬된다.
    "#]
    fn pivot<K: Ord + Clone>(
        entries: Vec<(K, String, i64)>,
        category_label: impl Fn(&K) -> String,
    ) -> Self {
        let categories: Vec<K> = entries
            .iter()
            .map(|(k, _, _)| k.clone())
            .collect::<BTreeSet<K>>()
            .into_iter()
            .collect();

        let mut by_series: BTreeMap<String, Vec<i64>> = BTreeMap::new();
        for (key, name, value) in entries {
            let idx: usize = match categories.binary_search(&key) {
                Ok(idx) => idx,
                Err(_) => continue,
            };

            let values: &mut Vec<i64> = by_series
                .entry(name)
                .or_insert_with(|| vec![0; categories.len()]);
            values[idx] += value;
        }

        GroupedBarData::new(
            categories.iter().map(category_label).collect(),
            by_series
                .into_iter()
                .map(|(name, values)| BarSeries::new(name, values))
                .collect(),
        )
    }

    #[doc = "X = 섹션, 색 = municipio"]
    pub fn from_section_totals(totals: &[SectionTotal]) -> Self {
        Self::pivot(
            totals
                .iter()
                .map(|t| (*t.section(), t.municipality().clone(), *t.total_employees()))
                .collect(),
            |section| section.label().to_string(),
        )
    }

    #[doc = "X = CNAE 5자리 코드, 색 = municipio"]
    pub fn from_cnae_totals(totals: &[CnaeTotal]) -> Self {
        Self::pivot(
            totals
                .iter()
                .map(|t| (*t.cnae(), t.municipality().clone(), *t.total_employees()))
                .collect(),
            |cnae| format!("{:05}", cnae),
        )
    }
}
