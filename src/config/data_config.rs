//! 실행 환경 및 로깅 설정 관리 모듈
//!
//! 실행 환경, 결제 로그 경로, 진단 로그 필터, `.env` 파일 로딩을 관리합니다.

use std::env;
use std::path::PathBuf;

use log::{error, info};

/// 결제 로그 기본 경로 (작업 디렉터리 기준)
pub const DEFAULT_PAYMENT_LOG_PATH: &str = "logs/payment.log";

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 로깅 설정
pub struct LoggingConfig;

impl LoggingConfig {
    /// 결제 로그 파일 경로를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PAYMENT_LOG_PATH`: 커스텀 경로 (비어 있으면 무시)
    pub fn payment_log_path() -> PathBuf {
        env::var("PAYMENT_LOG_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PAYMENT_LOG_PATH))
    }

    /// `RUST_LOG` 가 없을 때 쓰는 진단 로그 필터
    pub fn default_filter() -> &'static str {
        Self::default_filter_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 기본 필터를 반환합니다.
    ///
    /// - Development/Test: `debug`
    /// - Staging/Production: `info`
    pub fn default_filter_for_env(env: &Environment) -> &'static str {
        match env {
            Environment::Development => "debug",
            Environment::Test => "debug",
            Environment::Staging => "info",
            Environment::Production => "info",
        }
    }
}

/// `.env` 파일 로드 결과
///
/// 로드는 로거 초기화보다 먼저 일어나므로 결과를 들고 있다가
/// 로거가 준비된 뒤 [`EnvFileLoad::log_outcome`] 으로 남깁니다.
#[derive(Debug)]
pub struct EnvFileLoad {
    /// `PROFILE` 값 (기본값: `dev`)
    pub profile: String,
    /// 읽으려 한 파일 이름
    pub file: &'static str,
    /// 실패 원인. 성공하면 `None`
    pub error: Option<String>,
}

impl EnvFileLoad {
    pub fn is_loaded(&self) -> bool {
        self.error.is_none()
    }

    /// 로드 결과를 진단 로그로 남깁니다.
    pub fn log_outcome(&self) {
        info!("Current profile: {}", self.profile);

        match &self.error {
            None => info!("{} 파일 로드 됨", self.file),
            Some(e) => error!("{} 파일 로드 실패: {}", self.file, e),
        }
    }
}

/// 프로필에 해당하는 설정 파일 이름
pub fn env_file_for_profile(profile: &str) -> &'static str {
    match profile {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드 (상위 디렉터리까지 탐색)
pub fn load_env_file() -> EnvFileLoad {
    let profile = env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let file = env_file_for_profile(&profile);

    let result = match profile.as_str() {
        "prod" | "dev" => dotenv::from_filename(file),
        _ => dotenv::dotenv(),
    };

    EnvFileLoad {
        profile,
        file,
        error: result.err().map(|e| e.to_string()),
    }
}
