use crate::common::*;

use crate::enums::cnae_section::*;

#[doc = r#"
    필터 해석이 끝난 최종 선택값 (municipio 집합 x 섹션 목록).

    섹션은 필터 파일에 적힌 순서를 유지한다 (중복 없음). 차트 제목의 섹션 나열 순서가 이를 따른다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct Selection {
    pub municipalities: BTreeSet<String>,
    pub sections: Vec<CnaeSection>,
}

impl Selection {
    pub fn contains(&self, municipality: &str, section: &CnaeSection) -> bool {
        self.municipalities.contains(municipality) && self.sections.contains(section)
    }

    pub fn section_labels(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.label()).collect()
    }
}
