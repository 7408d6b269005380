use crate::common::*;

#[doc = r#"
    환경변수를 읽어와서 반환하고, 환경변수가 설정되지 않은 경우 치명적 오류로 처리하는 함수.

    대시보드의 입력 파일 경로들이 환경변수로 관리되므로, 해당 환경변수가 없으면
    대시보드를 렌더링할 수 없기 때문에 panic으로 즉시 종료시킨다.

    # Arguments
    * `key` - 조회할 환경변수 키명

    # Returns
    * `String` - 환경변수 값

    # Panics
    환경변수가 설정되지 않은 경우 애플리케이션 종료
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg: String = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    서버 설정 파일의 경로를 환경변수 `SERVER_CONFIG_PATH` 에서 읽어와 전역 변수로 초기화.

    # 예상 파일 내용
    - `[dataset]` 재고 CSV / GeoJSON 경로
    - `[chart]` 차트 크기와 출력 디렉토리
    - `[system]` 로그 디렉토리, 보관 일수

    # Panics
    `SERVER_CONFIG_PATH` 환경변수가 설정되지 않은 경우
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));

#[doc = r#"
    사이드바 필터(선택 municipio / 섹션 / 페이지) 설정 파일의 경로.

    `FILTER_CONFIG_PATH` 환경변수를 통해 TOML 형식의 필터 파일 경로를 지정받는다.

    # Panics
    `FILTER_CONFIG_PATH` 환경변수가 설정되지 않은 경우
"#]
pub static FILTER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("FILTER_CONFIG_PATH"));

#[doc = r#"
    대시보드 HTML 템플릿 파일의 경로.

    # 예상 템플릿 플레이스홀더
    - `{{GENERATED_AT}}`: 생성 시각
    - `{{SIDEBAR}}`: 필터 선택 내역
    - `{{NAVIGATION}}`: 페이지 목록
    - `{{METRICS}}`: 요약 지표
    - `{{PAGES}}`: 페이지별 차트 / 경고 / 데이터 테이블

    # Panics
    `HTML_TEMPLATE_PATH` 환경변수가 설정되지 않은 경우
"#]
pub static HTML_TEMPLATE_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("HTML_TEMPLATE_PATH"));
