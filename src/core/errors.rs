//! # Application Error Handling System
//!
//! 코스 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 설계 철학
//!
//! ### 1. 구조화된 검증 에러
//! - 검증 실패는 단일 문자열이 아닌 [`ValidationReport`] 를 그대로 운반합니다
//! - 클라이언트는 필드 경로별로 에러를 렌더링할 수 있습니다
//!
//! ### 2. 자동 HTTP 응답 변환
//! - **ResponseError 구현**: Actix-Web과 통합
//! - **일관된 응답 형식**: `{"error": ..., "details": [...]}`
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppResult;
//! use crate::core::validation::parse_request;
//!
//! fn create_lesson(body: &[u8]) -> AppResult<Lesson> {
//!     let dto: CreateLessonDto = parse_request(body)?;
//!     Lesson::create(CreateLessonInput::try_from(dto)?)
//! }
//! ```

use actix_web::ResponseError;
use actix_web::http::StatusCode;
use thiserror::Error;

use crate::core::validation::ValidationReport;

/// 애플리케이션 전역 에러 타입
///
/// 요청 검증과 도메인 연산에서 발생할 수 있는 에러를 포괄하는 열거형입니다.
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 클라이언트가 제공한 데이터가 형식 요구사항을 만족하지 않을 때 발생합니다.
    /// 400 Bad Request로 응답되며 위반 목록 전체가 `details` 로 전달됩니다.
    ///
    /// # 발생 시나리오
    /// - 필수 필드 누락 또는 빈 문자열
    /// - 이메일/식별자 형식 오류
    /// - 음수 정렬 순서
    /// - 알 수 없는 난이도 값
    #[error("Validation error: {0}")]
    ValidationError(ValidationReport),

    /// 내부 서버 에러
    ///
    /// 예상하지 못한 시스템 오류나 프로그래밍 오류 시 발생합니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<ValidationReport> for AppError {
    fn from(report: ValidationReport) -> Self {
        AppError::ValidationError(report)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// # 응답 형식
    ///
    /// ```json
    /// {
    ///   "error": "Validation error: courseId: 올바른 식별자 형식이 아닙니다",
    ///   "details": [
    ///     { "field": "courseId", "rule": "invalid_identifier", "message": "...", "kind": "invalid_format" }
    ///   ]
    /// }
    /// ```
    ///
    /// 5xx 에러는 서버 로그에만 원인을 남기고 `details` 를 포함하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationError(report) => serde_json::json!({
                "error": self.to_string(),
                "details": report,
            }),
            AppError::InternalError(message) => {
                log::error!("내부 오류 응답: {}", message);
                serde_json::json!({
                    "error": self.to_string()
                })
            }
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let id = ObjectId::parse_str(raw).context("Failed to parse lesson id")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
