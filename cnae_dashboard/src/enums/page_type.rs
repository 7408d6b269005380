use crate::common::*;

#[doc = "대시보드 내비게이션에서 선택 가능한 페이지"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    SectionBar,
    MonthlyLine,
    CnaeBreakdown,
    ChoroplethMap,
}

impl PageType {
    pub const ALL: [PageType; 4] = [
        PageType::SectionBar,
        PageType::MonthlyLine,
        PageType::CnaeBreakdown,
        PageType::ChoroplethMap,
    ];

    #[doc = "내비게이션 메뉴에 노출되는 이름"]
    pub fn nav_label(&self) -> &'static str {
        match self {
            PageType::SectionBar => "Gráfico Barras CNAE",
            PageType::MonthlyLine => "Gráfico Linha Temporal",
            PageType::CnaeBreakdown => "CNAEs da Seção",
            PageType::ChoroplethMap => "Mapa de Empregados",
        }
    }

    #[doc = "페이지 본문 제목"]
    pub fn page_title(&self) -> &'static str {
        match self {
            PageType::SectionBar => "Empregados por Seção CNAE e Município",
            PageType::MonthlyLine => "Evolução Mensal de Empregados",
            PageType::CnaeBreakdown => "CNAEs de 5 Dígitos por Seção e Município",
            PageType::ChoroplethMap => "Empregados por Município",
        }
    }

    #[doc = "출력 디렉토리 안에서 쓰이는 파일명 접두어"]
    pub fn slug(&self) -> &'static str {
        match self {
            PageType::SectionBar => "section_bar",
            PageType::MonthlyLine => "monthly_line",
            PageType::CnaeBreakdown => "cnae_breakdown",
            PageType::ChoroplethMap => "choropleth_map",
        }
    }
}
