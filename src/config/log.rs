use std::env;
use thiserror::Error;
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;

#[derive(Debug, Error)]
pub enum LogConfigError {
    #[error("로그 레벨(level)은 TRACE, DEBUG, INFO, WARN, ERROR만 가능 합니다: {0}")]
    InvalidLevel(String),

    #[error("로깅 파일 로테이션(rotation)은 DAILY, HOURLY, MINUTELY, NEVER만 가능 합니다: {0}")]
    InvalidRotation(String),

    #[error("LOGGER_KEEP 값이 올바르지 않습니다: {0}")]
    InvalidKeep(String),

    #[error("로그 파일을 생성할 수 없습니다: {0}")]
    Appender(#[from] rolling::InitError),
}

#[derive(Debug, Default)]
pub struct Config {
    /// 로그 파일을 기록할 디렉토리로 설정 되지 않으면 파일 로깅 없이 콘솔에만 출력한다.
    dir: Option<String>,
    name: Option<String>,

    /// 최대 로그 파일 개수로 로그 파일이 설정한 개수보다 커질 경우 기존의 로그파일들은 삭제 된다.
    /// 설정 되지 않을 시 로그 파일은 삭제 되지 않는다.
    keep: Option<usize>,

    /// 지정된 로그 레벨 이상만 로깅된다.
    /// 설정하지 않을시 파일 로깅은 DEBUG, 콘솔 로깅은 INFO가 기본값이다.
    ///
    /// 이 값은 [`tracing::Level`]로 변환 됨으로 자세한 사항은 해당 파일을 확인
    level: Option<String>,

    /// 로깅 파일이 분리 되는 기간으로 .log 파일 하나 당 설정된 기간 동안 로그가 기록 된다.
    /// 설정 되지 않을시 기본값은 DAILY로 설정된다.
    ///
    /// 이 값은 [`rolling::Rotation`]으로 변환 됨으로 자세한 사항은 해당 파일을 확인
    rotation: Option<String>,
}

impl Config {
    /// `LOGGER_` 로 시작하는 환경 변수에서 로깅 옵션을 읽는다.
    pub fn from_env() -> Result<Self, LogConfigError> {
        let keep = match env::var("LOGGER_KEEP") {
            Ok(v) => Some(v.parse::<usize>().map_err(|_| LogConfigError::InvalidKeep(v))?),
            Err(_) => None,
        };

        Ok(Self {
            dir: env::var("LOGGER_DIR").ok(),
            name: env::var("LOGGER_FILE_NAME").ok(),
            keep,
            level: env::var("LOGGER_LEVEL").ok(),
            rotation: env::var("LOGGER_ROTATION").ok(),
        })
    }
}

/// 프로그램에서 사용할 로깅 옵션을 설정한다.
///
/// 로그는 stderr에 출력되며 `dir` 이 설정된 경우 JSON 형식으로 파일에도 기록된다.
/// 반환된 [`WorkerGuard`]가 drop 되기 전까지 파일 로그가 flush 되므로 main 에서 유지해야 한다.
pub fn set_global_logging_config(c: &Config) -> Result<Option<WorkerGuard>, LogConfigError> {
    let Some(dir) = &c.dir else {
        let level = match &c.level {
            Some(level) => parse_level(level)?,
            None => tracing::Level::INFO,
        };
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(level)
            .init();
        return Ok(None);
    };

    let name = c.name.clone().unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned());
    let mut file_appender = rolling::RollingFileAppender::builder()
        .filename_prefix(name)
        .filename_suffix("log");

    file_appender = match &c.rotation {
        Some(rotation) => file_appender.rotation(parse_rotation(rotation)?),
        None => file_appender.rotation(rolling::Rotation::DAILY),
    };

    if let Some(keep) = c.keep {
        file_appender = file_appender.max_log_files(keep);
    }

    let file_appender = file_appender.build(dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let writer = std::io::stderr.and(non_blocking);

    let level = match &c.level {
        Some(level) => parse_level(level)?,
        None => tracing::Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_current_span(true)
        .with_span_list(true)
        .with_timer(LocalTime::new(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]")))
        .with_writer(writer)
        .with_max_level(level)
        .init();

    Ok(Some(guard))
}

fn parse_rotation(s: &str) -> Result<rolling::Rotation, LogConfigError> {
    match s {
        "DAILY" => Ok(rolling::Rotation::DAILY),
        "HOURLY" => Ok(rolling::Rotation::HOURLY),
        "MINUTELY" => Ok(rolling::Rotation::MINUTELY),
        "NEVER" => Ok(rolling::Rotation::NEVER),
        _ => Err(LogConfigError::InvalidRotation(s.to_owned())),
    }
}

fn parse_level(l: &str) -> Result<tracing::Level, LogConfigError> {
    match l {
        "TRACE" => Ok(tracing::Level::TRACE),
        "DEBUG" => Ok(tracing::Level::DEBUG),
        "INFO" => Ok(tracing::Level::INFO),
        "WARN" => Ok(tracing::Level::WARN),
        "ERROR" => Ok(tracing::Level::ERROR),
        _ => Err(LogConfigError::InvalidLevel(l.to_owned())),
    }
}
