//! # 슬라이드 생성 요청 DTO
//!
//! ## 검증 규칙
//!
//! | 필드 | 필수 | 규칙 |
//! |------|------|------|
//! | `title` | O | 빈 문자열 불가 |
//! | `content` | X | - |
//! | `courseId` | O | 24자리 16진수 식별자 |
//! | `lessonId` | X | 존재하면 식별자 형식 |
//! | `order` | X | 존재하면 0 이상의 정수 |

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::identifier::{Identifier, validate_identifier};

/// 슬라이드 생성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlideDto {
    /// 슬라이드 제목
    #[validate(required(message = "슬라이드 제목은 필수입니다"))]
    #[validate(length(min = 1, code = "not_empty", message = "슬라이드 제목은 비어 있을 수 없습니다"))]
    pub title: Option<String>,

    /// 본문 (마크다운 등 형식은 해석하지 않음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// 소속 코스 ID
    #[validate(required(message = "코스 ID는 필수입니다"))]
    #[validate(custom(function = "validate_identifier"))]
    pub course_id: Option<Identifier>,

    /// 연결할 강의 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_identifier"))]
    pub lesson_id: Option<Identifier>,

    /// 강의 안에서의 정렬 순서
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, message = "정렬 순서는 0 이상이어야 합니다"))]
    pub order: Option<i64>,
}
