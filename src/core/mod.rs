//! # Core Module
//!
//! 요청 처리 전반에서 공유하는 기반 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현 (검증 실패 → 400 + 위반 목록)
//! - **자동 변환**: `ValidationReport` → `AppError` 변환
//!
//! ### [`validation`] - 요청 검증 파이프라인
//! - **parse_request**: JSON 본문 역직렬화 + `validator` 규칙 적용
//! - **ValidationReport**: `(필드 경로, 규칙, 메시지)` 위반 목록
//! - **ViolationKind**: 누락 / 타입 / 형식 / 범위 / 열거값 / 중첩 요소 분류
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppResult;
//! use crate::core::validation::parse_request;
//!
//! fn handle(body: &[u8]) -> AppResult<CreateSlideDto> {
//!     // 검증 실패는 `?` 로 AppError::ValidationError 가 됩니다
//!     let dto: CreateSlideDto = parse_request(body)?;
//!     Ok(dto)
//! }
//! ```

pub mod errors;
pub mod validation;

pub use errors::*;
pub use validation::*;
