use crate::common::*;

#[doc = "대시보드 생성 시각 표기 (로컬 타임존)"]
pub fn get_current_local_time_str() -> String {
    convert_local_to_str(Local::now())
}

#[doc = "로컬 시각을 `YYYY-MM-DD HH:MM:SS` 문자열로 변환"]
pub fn convert_local_to_str(local_time: DateTime<Local>) -> String {
    local_time.format("%Y-%m-%d %H:%M:%S").to_string()
}
