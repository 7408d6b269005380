use crate::common::*;

#[doc = "천 단위 구분자(,)를 넣은 문자열"]
pub fn format_thousands(value: i64) -> String {
    value.to_formatted_string(&Locale::en)
}

#[doc = r#"
    축 눈금용 축약 표기. 1,000 이상은 `k`, 1,000,000 이상은 `M`.
"#]
pub fn format_compact(value: f64) -> String {
    let abs: f64 = value.abs();

    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}
