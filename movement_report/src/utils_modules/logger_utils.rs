use crate::common::*;

use crate::env_configuration::env_config::*;

#[doc = "로그 한 줄 포맷: [timestamp] [LEVEL] [file:line] message"]
fn log_line_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

#[doc = r#"
    전역 로거 설정.

    `LOG_DIR` 디렉토리에 일 단위로 로테이션되는 로그 파일을 남기고(최근 10개 보관),
    같은 내용을 표준출력에도 복제한다. 레벨은 `LOG_LEVEL` (기본 info).

    # Returns
    * `LoggerHandle` - 프로세스가 살아있는 동안 유지되어야 한다
"#]
pub fn set_global_logger() -> anyhow::Result<LoggerHandle> {
    let log_dir: String = get_env_opt(LOG_DIR).unwrap_or_else(|| DEFAULT_LOG_DIR.to_string());
    let log_level: String =
        get_env_opt(LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let handle: LoggerHandle = Logger::try_with_str(&log_level)?
        .log_to_file(
            FileSpec::default()
                .directory(&log_dir)
                .basename("movement_report"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format_for_files(log_line_format)
        .format_for_stdout(log_line_format)
        .duplicate_to_stdout(Duplicate::All)
        .start()?;

    Ok(handle)
}
