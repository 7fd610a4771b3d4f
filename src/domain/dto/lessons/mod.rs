//! # 강의 관련 DTO 모듈
//!
//! - [`request`] - HTTP 경계에서 검증되는 강의 생성 요청 본문
//! - [`commands`] - 검증 이후 서비스 계층으로 넘어가는 생성/수정/슬라이드 추가/재정렬 요청 형태
//!
//! ```text
//! JSON ──parse_request──▶ CreateLessonDto ──TryFrom──▶ CreateLessonInput ──▶ Lesson::create
//! ```

pub mod commands;
pub mod request;

pub use commands::{AddSlideInput, CreateLessonInput, ReorderLessonsInput, UpdateLessonInput};
pub use request::CreateLessonDto;
