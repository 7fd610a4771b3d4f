//! # Logging Module
//!
//! 애플리케이션 진단 로그와 결제 이벤트 로그를 다룹니다.
//!
//! - 진단 로그: `log` 파사드 + `env_logger` (표준 에러 출력)
//! - 결제 로그: [`payment_logger::PaymentLogger`] (`logs/payment.log`, JSON Lines)
//!
//! # Environment Variables
//!
//! * `RUST_LOG` - 진단 로그 필터 (없으면 [`LoggingConfig::default_filter`])
//! * `PAYMENT_LOG_PATH` - 결제 로그 파일 경로 (기본값: `logs/payment.log`)

pub mod payment_logger;

pub use payment_logger::{LogLevel, PaymentLogger};

use env_logger::Env;

use crate::config::LoggingConfig;

/// 진단 로그 시스템을 초기화합니다
///
/// 이미 초기화되어 있으면 아무 것도 하지 않고 `false` 를 반환합니다.
///
/// # Examples
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
/// ```
pub fn init_app_logging() -> bool {
    env_logger::Builder::from_env(Env::default().default_filter_or(LoggingConfig::default_filter()))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_app_logging_is_repeatable() {
        init_app_logging();
        assert!(!init_app_logging());
    }
}
