use crate::common::*;

use crate::model::configs::total_config::*;

#[doc = "로그 한 줄 포맷: [시각] [레벨] [모듈:라인] 메시지"]
pub fn dashboard_log_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        &record.args()
    )
}

#[doc = r#"
    전역 로거 설정.

    1. `[system] log_dir` 아래에 일 단위로 회전하는 로그 파일 생성
    2. `[system] log_retention_days` 개까지만 보관
    3. info 이상은 stdout 으로도 복제
"#]
pub fn set_global_logger() {
    let system_config = get_system_config_info();

    let logger = Logger::try_with_env_or_str("info").and_then(|logger| {
        logger
            .log_to_file(
                FileSpec::default()
                    .directory(system_config.log_dir())
                    .basename("cnae_dashboard"),
            )
            .rotate(
                Criterion::Age(Age::Day),
                Naming::Timestamps,
                Cleanup::KeepLogFiles(*system_config.log_retention_days()),
            )
            .format_for_files(dashboard_log_format)
            .format_for_stdout(dashboard_log_format)
            .duplicate_to_stdout(Duplicate::Info)
            .start()
    });

    match logger {
        Ok(handle) => {
            /* 프로세스 종료 시까지 로거 핸들을 유지 */
            std::mem::forget(handle);
        }
        Err(e) => {
            eprintln!("[set_global_logger] Logger initialization failed: {:?}", e);
            std::process::exit(1);
        }
    }
}
