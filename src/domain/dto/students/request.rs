//! # 학생 일괄 등록 요청 DTO
//!
//! 여러 학생을 이메일 목록으로 한 번에 등록하는 요청 본문을 정의합니다.
//!
//! ## 검증 규칙
//!
//! ### 학생 목록 (`students`)
//! - 반드시 존재하는 JSON 배열
//! - 각 원소를 개별 검증하며 하나라도 실패하면 요청 전체가 거부됩니다
//! - 빈 배열은 허용합니다 (아무 것도 등록하지 않는 요청)
//!
//! ### 이메일 (`students[].email`)
//! - 필수, 빈 문자열 불가
//! - 이메일 형식 (`@` 와 도메인 부분 필요)
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "students": [
//!     { "email": "kim@example.com" },
//!     { "email": "lee@example.com" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 일괄 등록 목록의 한 학생
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StudentImportData {
    /// 학생 이메일 주소
    #[validate(required(message = "이메일은 필수입니다"))]
    #[validate(length(min = 1, code = "not_empty", message = "이메일은 비어 있을 수 없습니다"))]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,
}

/// 학생 일괄 등록 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkImportStudentsDto {
    /// 등록할 학생 목록 (순서 유지)
    #[validate(nested)]
    pub students: Vec<StudentImportData>,
}

impl BulkImportStudentsDto {
    /// 요청 순서대로 이메일 주소를 반환합니다.
    pub fn emails(&self) -> Vec<&str> {
        self.students
            .iter()
            .filter_map(|student| student.email.as_deref())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
