use crate::common::*;

#[doc = "재고 CSV의 월별 컬럼 순서(달력 순)"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Month {
    Jan,
    Fev,
    Mar,
    Abr,
    Mai,
    Jun,
    Jul,
    Ago,
    Set,
    Out,
    Nov,
    Dez,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Fev,
        Month::Mar,
        Month::Abr,
        Month::Mai,
        Month::Jun,
        Month::Jul,
        Month::Ago,
        Month::Set,
        Month::Out,
        Month::Nov,
        Month::Dez,
    ];

    #[doc = "CSV 헤더명 (ex. `estoque_jan`)"]
    pub fn column_name(&self) -> &'static str {
        match self {
            Month::Jan => "estoque_jan",
            Month::Fev => "estoque_fev",
            Month::Mar => "estoque_mar",
            Month::Abr => "estoque_abr",
            Month::Mai => "estoque_mai",
            Month::Jun => "estoque_jun",
            Month::Jul => "estoque_jul",
            Month::Ago => "estoque_ago",
            Month::Set => "estoque_set",
            Month::Out => "estoque_out",
            Month::Nov => "estoque_nov",
            Month::Dez => "estoque_dez",
        }
    }

    #[doc = "차트 범례에 쓰이는 축약 라벨"]
    pub fn legend(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Fev => "Fev",
            Month::Mar => "Mar",
            Month::Abr => "Abr",
            Month::Mai => "Mai",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Ago => "Ago",
            Month::Set => "Set",
            Month::Out => "Out",
            Month::Nov => "Nov",
            Month::Dez => "Dez",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}
