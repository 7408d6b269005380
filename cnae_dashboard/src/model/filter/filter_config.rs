use crate::common::*;

use crate::enums::page_type::*;

#[doc = r#"
    사이드바 필터 파일(TOML) 구조.

    `municipalities` / `sections` 를 생략하면 정렬된 옵션 목록의 첫 번째 값이 기본 선택되고,
    빈 배열을 명시하면 선택 없음으로 유지된다.
    섹션은 라벨 문자열 그대로 받아 두고, 데이터셋과 대조하는 시점에 해석한다.
    `pages` 를 생략하면 모든 페이지를 렌더링한다.
"#]
#[derive(Debug, Deserialize, Getters, Default)]
#[getset(get = "pub")]
pub struct FilterConfig {
    pub municipalities: Option<Vec<String>>,
    pub sections: Option<Vec<String>>,
    pub pages: Option<Vec<PageType>>,
}

impl FilterConfig {
    pub fn pages_or_all(&self) -> Vec<PageType> {
        match &self.pages {
            Some(pages) => pages.clone(),
            None => PageType::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_stay_none_and_explicit_empty_stays_empty() {
        let config: FilterConfig = toml::from_str(
            r#"
            sections = []
            pages = ["monthly_line", "choropleth_map"]
            "#,
        )
        .unwrap();

        assert!(config.municipalities().is_none());
        assert_eq!(config.sections().as_deref(), Some(&[][..]));
        assert_eq!(
            config.pages_or_all(),
            vec![PageType::MonthlyLine, PageType::ChoroplethMap]
        );
    }

    #[test]
    fn unknown_section_label_still_parses() {
        let config: FilterConfig =
            toml::from_str(r#"sections = ["Mineração", "Construção"]"#).unwrap();
        assert_eq!(
            config.sections().as_deref(),
            Some(&["Mineração".to_string(), "Construção".to_string()][..])
        );
    }

    #[test]
    fn missing_pages_means_all_pages() {
        let config: FilterConfig = FilterConfig::default();
        assert_eq!(config.pages_or_all(), PageType::ALL.to_vec());
    }
}
