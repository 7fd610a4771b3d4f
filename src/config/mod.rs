//! # Configuration Module
//!
//! 환경 변수 기반 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 로깅 경로/필터, `.env` 로딩
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"          # development, test, staging, production
//! export PROFILE="prod"                    # .env.prod / .env.dev 선택
//! export PAYMENT_LOG_PATH="logs/payment.log"
//! export RUST_LOG="info"
//! ```

pub mod data_config;

pub use data_config::*;
