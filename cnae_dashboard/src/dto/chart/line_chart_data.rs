use crate::common::*;

use crate::dto::agg::monthly_point::*;
use crate::enums::{cnae_section::*, month::*};

#[doc = r#"
    다중 시리즈 선 차트 입력.

    `color_group` 이 같은 시리즈는 같은 색, `dash_group` 이 같은 시리즈는 같은 선 패턴을 쓴다.
    `dash_group` 이 `None` 이면 실선.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct LineChartData {
    pub x_labels: Vec<String>,
    pub series: Vec<LineSeriesData>,
}

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct LineSeriesData {
    pub name: String,
    pub color_group: usize,
    pub dash_group: Option<usize>,
    pub values: Vec<i64>,
}

impl LineChartData {
    pub fn is_empty(&self) -> bool {
        self.x_labels.is_empty() || self.series.is_empty()
    }

    #[doc = r#"
        월별 시계열 점들을 (municipio, 섹션) 단위 시리즈로 묶는다.

        X축은 항상 달력 순서의 12개월이며, 값이 없는 달은 0.
        `dash_by_section` 이 참이면 섹션마다 다른 선 패턴을 준다.
    "#]
    pub fn from_monthly_points(points: &[MonthlyPoint], dash_by_section: bool) -> Self {
        let municipalities: Vec<&String> = points
            .iter()
            .map(|p| p.municipality())
            .collect::<BTreeSet<&String>>()
            .into_iter()
            .collect();

        let sections: Vec<CnaeSection> = points
            .iter()
            .map(|p| *p.section())
            .collect::<BTreeSet<CnaeSection>>()
            .into_iter()
            .collect();

        let mut grouped: BTreeMap<(usize, usize), [i64; 12]> = BTreeMap::new();
        for point in points {
            let color_idx: usize = municipalities
                .binary_search(&point.municipality())
                .unwrap_or_default();
            let section_idx: usize = sections.binary_search(point.section()).unwrap_or_default();

            grouped
                .entry((color_idx, section_idx))
                .or_insert([0; 12])[point.month().index()] += *point.employees();
        }

        let series: Vec<LineSeriesData> = grouped
            .into_iter()
            .map(|((color_idx, section_idx), values)| {
                let municipality: &str = municipalities[color_idx];
                let name: String = if dash_by_section {
                    format!("{} - {}", municipality, sections[section_idx].label())
                } else {
                    municipality.to_string()
                };

                LineSeriesData::new(
                    name,
                    color_idx,
                    dash_by_section.then_some(section_idx),
                    values.to_vec(),
                )
            })
            .collect();

        let x_labels: Vec<String> = if series.is_empty() {
            Vec::new()
        } else {
            Month::ALL.iter().map(|m| m.legend().to_string()).collect()
        };

        LineChartData::new(x_labels, series)
    }
}
