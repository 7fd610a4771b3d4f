//! # Domain Layer Module
//!
//! 요청 DTO, 값 객체, 영속 엔티티로 구성된 도메인 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── models      - 값 객체 (Identifier, LessonDifficulty)
//! ├── dto         - 요청 DTO 와 요청 형태
//! └── entities    - MongoDB 문서와 대응되는 엔티티 (Lesson)
//! ```
//!
//! DTO 는 [`models::Identifier`] 만 알고, `ObjectId` 는 엔티티 계층에서만 등장합니다.

pub mod dto;
pub mod entities;
pub mod models;
