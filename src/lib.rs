//! 코스 서비스 백엔드 요청 모델
//!
//! 이러닝 백엔드(코스, 강의, 슬라이드, 학생 일괄 등록)의 요청 DTO,
//! 강의 도메인 타입, 결제 이벤트 로거를 제공합니다.
//! HTTP 라우팅, 영속화, 인증은 이 크레이트 바깥의 협력자가 담당하며
//! 여기서 정의한 데이터 형태로만 주고받습니다.
//!
//! # Features
//!
//! - **요청 검증**: `serde` 역직렬화 + `validator` 규칙, 필드 단위 위반 목록 보고
//! - **식별자 타입**: 저장소에 묶이지 않는 불투명 `Identifier` 와 형식 검사
//! - **강의 도메인**: 난이도 열거형, 생성/수정/슬라이드 추가/재정렬 요청, `Lesson` 문서
//! - **결제 로그**: `logs/payment.log` 에 JSON 한 줄씩 추가하는 전역 로거
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  HTTP (외부)     │ ← JSON 본문
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  core::validation│ ← parse_request: 역직렬화 + 규칙 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  domain          │ ← DTO → 요청 형태 → Lesson 문서
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  저장소 (외부)    │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use course_service_backend::core::validation::parse_request;
//! use course_service_backend::domain::dto::lessons::{CreateLessonDto, CreateLessonInput};
//! use course_service_backend::domain::entities::lessons::Lesson;
//!
//! let dto: CreateLessonDto = parse_request(body)?;
//! let lesson = Lesson::create(CreateLessonInput::try_from(dto)?)?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod logging;

use crate::logging::PaymentLogger;

/// 프로세스 시작 시 한 번 호출하는 초기화 루틴
///
/// 프로필별 `.env` 파일을 읽고(`RUST_LOG` 등이 여기서 정해질 수 있음),
/// `env_logger` 를 설치한 뒤 `.env` 로드 결과를 기록하고,
/// 결제 로거의 대상 디렉터리를 미리 만들어 둡니다.
/// 어느 단계가 실패해도 호출자에게 에러를 넘기지 않습니다.
pub fn bootstrap() -> &'static PaymentLogger {
    let env_file = config::load_env_file();
    logging::init_app_logging();
    env_file.log_outcome();

    let logger = PaymentLogger::global();
    logger.ensure_directory();
    logger
}
