//! # Domain Models Module
//!
//! DTO 와 엔티티가 함께 쓰는 값 객체들입니다.
//!
//! - [`identifier`] - 저장소에 묶이지 않는 문서 식별자와 형식 검증 규칙
//! - [`difficulty`] - 강의 난이도 닫힌 열거형

pub mod difficulty;
pub mod identifier;

pub use difficulty::LessonDifficulty;
pub use identifier::{Identifier, validate_identifier, validate_identifier_list};
