//! # 학생 관련 요청 DTO 모듈
//!
//! 학생 일괄 등록 요청을 정의합니다. 검증 실패 시 `ValidationReport` 가
//! `students[i].email` 경로로 어느 원소가 잘못되었는지 알려줍니다.

pub mod request;

pub use request::{BulkImportStudentsDto, StudentImportData};
