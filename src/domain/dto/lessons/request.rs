//! # 강의 생성 요청 DTO
//!
//! HTTP 경계에서 받는 강의 생성 요청 본문입니다. 필드 이름은 JSON 그대로
//! camelCase 를 사용합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 필수 | 규칙 |
//! |------|------|------|
//! | `title` | O | 빈 문자열 불가 |
//! | `description` | X | - |
//! | `courseId` | O | 24자리 16진수 식별자 |
//! | `slideIds` | X | 모든 원소가 식별자 형식 |
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "title": "소유권과 빌림",
//!   "courseId": "507f1f77bcf86cd799439011",
//!   "slideIds": ["507f191e810c19729de860ea"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::identifier::{Identifier, validate_identifier, validate_identifier_list};

/// 강의 생성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLessonDto {
    /// 강의 제목
    #[validate(required(message = "강의 제목은 필수입니다"))]
    #[validate(length(min = 1, code = "not_empty", message = "강의 제목은 비어 있을 수 없습니다"))]
    pub title: Option<String>,

    /// 강의 설명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 소속 코스 ID
    #[validate(required(message = "코스 ID는 필수입니다"))]
    #[validate(custom(function = "validate_identifier"))]
    pub course_id: Option<Identifier>,

    /// 처음부터 연결할 슬라이드 ID 목록
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_identifier_list"))]
    pub slide_ids: Option<Vec<Identifier>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{ViolationKind, parse_value};
    use serde_json::json;

    const COURSE_ID: &str = "507f1f77bcf86cd799439011";

    #[test]
    fn test_minimal_lesson_is_accepted() {
        let dto = parse_value::<CreateLessonDto>(json!({
            "title": "소유권과 빌림",
            "courseId": COURSE_ID
        }))
        .unwrap();

        assert_eq!(dto.title.as_deref(), Some("소유권과 빌림"));
        assert!(dto.description.is_none());
        assert!(dto.slide_ids.is_none());
    }

    #[test]
    fn test_optional_fields_present_are_accepted() {
        let dto = parse_value::<CreateLessonDto>(json!({
            "title": "소유권과 빌림",
            "description": "빌림 검사기의 규칙",
            "courseId": COURSE_ID,
            "slideIds": ["507f191e810c19729de860ea", "507f191e810c19729de860eb"]
        }))
        .unwrap();

        assert_eq!(dto.description.as_deref(), Some("빌림 검사기의 규칙"));
        assert_eq!(dto.slide_ids.map(|ids| ids.len()), Some(2));
    }

    #[test]
    fn test_title_absent_or_empty_is_rejected() {
        let report = parse_value::<CreateLessonDto>(json!({ "courseId": COURSE_ID })).unwrap_err();
        assert!(report.has("title", ViolationKind::MissingField));

        let report =
            parse_value::<CreateLessonDto>(json!({ "title": "", "courseId": COURSE_ID })).unwrap_err();
        assert!(report.has("title", ViolationKind::MissingField));
        assert_eq!(report.violations()[0].rule, "not_empty");
    }

    #[test]
    fn test_course_id_format() {
        let report = parse_value::<CreateLessonDto>(json!({ "title": "t", "courseId": "abc" })).unwrap_err();
        assert!(report.has("courseId", ViolationKind::InvalidFormat));

        let report = parse_value::<CreateLessonDto>(json!({ "title": "t" })).unwrap_err();
        assert!(report.has("courseId", ViolationKind::MissingField));
        assert!(!report.has("courseId", ViolationKind::InvalidFormat));
    }

    #[test]
    fn test_every_bad_slide_id_is_reported() {
        let report = parse_value::<CreateLessonDto>(json!({
            "title": "t",
            "courseId": COURSE_ID,
            "slideIds": ["507f191e810c19729de860ea", "nope", "zzz"]
        }))
        .unwrap_err();

        assert_eq!(report.len(), 2);
        assert!(report.has("slideIds[1]", ViolationKind::NestedElementInvalid));
        assert!(report.has("slideIds[2]", ViolationKind::NestedElementInvalid));
    }

    #[test]
    fn test_duplicate_slide_ids_are_rejected() {
        let report = parse_value::<CreateLessonDto>(json!({
            "title": "t",
            "courseId": COURSE_ID,
            "slideIds": ["507f191e810c19729de860ea", "507F191E810C19729DE860EA"]
        }))
        .unwrap_err();

        assert_eq!(report.len(), 1);
        assert!(report.has("slideIds[1]", ViolationKind::NestedElementInvalid));
        assert_eq!(report.violations()[0].rule, "duplicate_identifier");
    }

    #[test]
    fn test_wrong_type_is_reported_at_field() {
        let report = parse_value::<CreateLessonDto>(json!({ "title": 5, "courseId": COURSE_ID })).unwrap_err();

        assert_eq!(report.len(), 1);
        assert!(report.has("title", ViolationKind::WrongType));
    }

    #[test]
    fn test_wrong_type_and_rule_failures_are_reported_together() {
        let report = parse_value::<CreateLessonDto>(json!({
            "title": "",
            "courseId": "abc",
            "description": 3
        }))
        .unwrap_err();

        assert_eq!(report.len(), 3);
        assert!(report.has("description", ViolationKind::WrongType));
        assert!(report.has("title", ViolationKind::MissingField));
        assert!(report.has("courseId", ViolationKind::InvalidFormat));
    }

    #[test]
    fn test_all_failures_are_collected() {
        let report = parse_value::<CreateLessonDto>(json!({ "title": "", "courseId": "abc" })).unwrap_err();

        assert_eq!(report.len(), 2);
        assert!(report.has("courseId", ViolationKind::InvalidFormat));
        assert!(report.has("title", ViolationKind::MissingField));
    }
}
