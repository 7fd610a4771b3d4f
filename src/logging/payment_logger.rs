//! 결제 이벤트 구조화 로거
//!
//! 결제 관련 워크플로가 남기는 이벤트를 JSON 한 줄씩 파일에 추가합니다.
//! 프로세스 전체가 하나의 인스턴스를 공유하며 첫 기록 시점에 파일을 엽니다.
//!
//! # 기록 형식
//!
//! ```json
//! {"timestamp":"2026-10-19T08:30:00.123Z","level":"info","message":"payment captured","orderId":"A-1"}
//! ```
//!
//! # 실패 처리
//!
//! 디렉터리 생성, 파일 열기, 쓰기 실패는 `log::error!` 로 남기고 버립니다.
//! 호출자에게는 어떤 에러도 전달되지 않으며, 실패한 핸들은 닫아 두었다가
//! 다음 호출에서 다시 엽니다.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use log::error;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::LoggingConfig;

/// 레코드 고정 필드. 호출자 필드로 덮어쓸 수 없습니다.
const RESERVED_KEYS: [&str; 3] = ["timestamp", "level", "message"];

/// 전역 결제 로거
static PAYMENT_LOGGER: Lazy<PaymentLogger> =
    Lazy::new(|| PaymentLogger::new(LoggingConfig::payment_log_path()));

/// 로그 레벨
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Serialize)]
struct LogRecord<'a> {
    timestamp: String,
    level: LogLevel,
    message: &'a str,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// JSON Lines 파일 로거
///
/// 레코드 하나는 뮤텍스를 잡은 채 `write_all` 한 번으로 기록되고
/// 파일은 append 모드로만 열리므로, 동시에 호출해도 줄이 섞이지 않습니다.
pub struct PaymentLogger {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl PaymentLogger {
    /// 프로세스 전역 인스턴스를 반환합니다.
    ///
    /// 경로는 첫 호출 시 [`LoggingConfig::payment_log_path`] 에서 한 번 읽습니다.
    pub fn global() -> &'static PaymentLogger {
        &PAYMENT_LOGGER
    }

    /// 지정한 경로에 기록하는 로거를 만듭니다. 파일은 첫 기록 때 열립니다.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 로그 파일의 상위 디렉터리를 미리 만듭니다.
    ///
    /// 실패해도 에러를 넘기지 않고 `false` 를 반환합니다.
    pub fn ensure_directory(&self) -> bool {
        match prepare_directory(&self.path) {
            Ok(()) => true,
            Err(e) => {
                error!("결제 로그 디렉터리 생성 실패 ({}): {}", self.path.display(), e);
                false
            }
        }
    }

    /// 레코드 하나를 기록합니다.
    ///
    /// # Arguments
    ///
    /// * `level` - 로그 레벨
    /// * `message` - 사람이 읽는 요약
    /// * `fields` - 추가 필드. 객체면 최상위로 펼쳐지고, 그 외 값은 `data` 아래에 들어갑니다.
    pub fn log(&self, level: LogLevel, message: &str, fields: Value) {
        let line = match encode(level, message, fields) {
            Ok(line) => line,
            Err(e) => {
                error!("결제 로그 직렬화 실패: {}", e);
                return;
            }
        };

        if let Err(e) = self.append(&line) {
            error!("결제 로그 기록 실패 ({}): {}", self.path.display(), e);
        }
    }

    pub fn debug(&self, message: &str, fields: Value) {
        self.log(LogLevel::Debug, message, fields);
    }

    pub fn info(&self, message: &str, fields: Value) {
        self.log(LogLevel::Info, message, fields);
    }

    pub fn warn(&self, message: &str, fields: Value) {
        self.log(LogLevel::Warn, message, fields);
    }

    pub fn error(&self, message: &str, fields: Value) {
        self.log(LogLevel::Error, message, fields);
    }

    fn append(&self, line: &[u8]) -> io::Result<()> {
        let mut guard = self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if guard.is_none() {
            *guard = Some(open_append(&self.path)?);
        }

        let Some(file) = guard.as_mut() else {
            return Ok(());
        };

        let result = file.write_all(line).and_then(|()| file.flush());
        if result.is_err() {
            // 다음 호출에서 다시 연다
            *guard = None;
        }
        result
    }
}

fn encode(level: LogLevel, message: &str, fields: Value) -> serde_json::Result<Vec<u8>> {
    let record = LogRecord {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        level,
        message,
        fields: into_fields(fields),
    };

    let mut line = serde_json::to_vec(&record)?;
    line.push(b'\n');
    Ok(line)
}

fn into_fields(fields: Value) -> Map<String, Value> {
    match fields {
        Value::Object(mut map) => {
            for key in RESERVED_KEYS {
                map.remove(key);
            }
            map
        }
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert("data".to_string(), other);
            map
        }
    }
}

fn prepare_directory(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    prepare_directory(path)?;
    OpenOptions::new().create(true).append(true).open(path)
}
