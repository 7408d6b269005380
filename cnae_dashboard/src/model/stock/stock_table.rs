use crate::common::*;

use crate::enums::cnae_section::*;
use crate::model::{filter::filter_config::*, filter::selection::*, stock::stock_record::*};

#[doc = r#"
    시작 시 한 번 적재되는 프로세스 전역 재고 테이블.

    로딩 이후에는 읽기 전용이며, 필터 옵션 목록(municipio, 섹션)도 여기서 파생된다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct StockTable {
    records: Vec<StockRecord>,
    skipped_rows: usize,
}

impl StockTable {
    #[doc = "중복 제거 후 오름차순 정렬된 municipio 목록"]
    pub fn municipalities(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.municipality().clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    #[doc = "데이터에 실제로 등장하는 섹션 목록 (라벨 오름차순)"]
    pub fn sections(&self) -> Vec<CnaeSection> {
        self.records
            .iter()
            .map(|r| *r.section())
            .collect::<BTreeSet<CnaeSection>>()
            .into_iter()
            .collect()
    }

    #[doc = "선택된 municipio AND 선택된 섹션에 해당하는 행만 남긴다."]
    pub fn filter(&self, selection: &Selection) -> Vec<&StockRecord> {
        self.records
            .iter()
            .filter(|r| selection.contains(r.municipality(), r.section()))
            .collect()
    }

    #[doc = "섹션 조건만 적용 (지도 페이지는 전체 municipio 를 칠한다)"]
    pub fn filter_sections(&self, selection: &Selection) -> Vec<&StockRecord> {
        self.records
            .iter()
            .filter(|r| selection.sections().contains(r.section()))
            .collect()
    }

    #[doc = r#"
        필터 파일을 최종 선택값으로 해석한다.

        1. 항목이 생략되었으면 옵션 목록의 첫 번째 값을 기본 선택
        2. 데이터에 없는 값, 라벨로 해석되지 않는 섹션은 경고 로그를 남기고 제외
        3. 섹션은 필터 파일에 적힌 순서를 유지
    "#]
    pub fn resolve_selection(&self, filter_config: &FilterConfig) -> Selection {
        let municipality_options: Vec<String> = self.municipalities();
        let section_options: Vec<CnaeSection> = self.sections();

        let municipalities: BTreeSet<String> = match filter_config.municipalities() {
            Some(selected) => selected
                .iter()
                .filter_map(|m| {
                    let trimmed: &str = m.trim();
                    if municipality_options.iter().any(|opt| opt == trimmed) {
                        Some(trimmed.to_string())
                    } else {
                        warn!(
                            "[StockTable->resolve_selection] Municipality not found in dataset: '{}'",
                            m
                        );
                        None
                    }
                })
                .collect(),
            None => municipality_options.into_iter().take(1).collect(),
        };

        let sections: Vec<CnaeSection> = match filter_config.sections() {
            Some(selected) => {
                let mut sections: Vec<CnaeSection> = Vec::new();

                for label in selected {
                    let section: CnaeSection = match label.parse::<CnaeSection>() {
                        Ok(section) => section,
                        Err(_) => {
                            warn!(
                                "[StockTable->resolve_selection] Unknown CNAE section label: '{}'",
                                label
                            );
                            continue;
                        }
                    };

                    if !section_options.contains(&section) {
                        warn!(
                            "[StockTable->resolve_selection] Section has no rows in dataset: '{}'",
                            section
                        );
                        continue;
                    }

                    if !sections.contains(&section) {
                        sections.push(section);
                    }
                }

                sections
            }
            None => section_options.into_iter().take(1).collect(),
        };

        Selection::new(municipalities, sections)
    }
}
