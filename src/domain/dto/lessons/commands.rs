//! 강의 요청 형태
//!
//! 검증을 마친 DTO 가 서비스 계층으로 넘어갈 때 쓰는 요청 형태들입니다.
//! 모두 `Lesson` 문서의 필드에서 파생되며, 식별자는 아직 [`Identifier`] 로
//! 남아 있다가 엔티티에 반영될 때 `ObjectId` 로 변환됩니다.

use std::collections::HashSet;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::core::validation::{FieldViolation, ValidationReport, ViolationKind, validate_dto};
use crate::domain::dto::lessons::request::CreateLessonDto;
use crate::domain::models::LessonDifficulty;
use crate::domain::models::identifier::{
    Identifier, to_object_ids, validate_identifier, validate_identifier_list,
};

/// 강의 생성 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLessonInput {
    #[validate(length(min = 1, code = "not_empty", message = "강의 제목은 비어 있을 수 없습니다"))]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(custom(function = "validate_identifier"))]
    pub course_id: Identifier,

    #[serde(default)]
    #[validate(custom(function = "validate_identifier_list"))]
    pub slides: Vec<Identifier>,

    /// 없으면 `Beginner`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<LessonDifficulty>,

    /// 분 단위, 없으면 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl TryFrom<CreateLessonDto> for CreateLessonInput {
    type Error = AppError;

    fn try_from(dto: CreateLessonDto) -> AppResult<Self> {
        validate_dto(&dto)?;

        let CreateLessonDto {
            title,
            description,
            course_id,
            slide_ids,
        } = dto;

        let (Some(title), Some(course_id)) = (title, course_id) else {
            return Err(AppError::InternalError(
                "검증된 강의 생성 요청에 필수 필드가 없습니다".to_string(),
            ));
        };

        Ok(Self {
            title,
            description,
            course_id,
            slides: slide_ids.unwrap_or_default(),
            difficulty: None,
            duration: None,
            tags: Vec::new(),
        })
    }
}

/// 강의 수정 요청
///
/// 모든 필드가 선택 사항이며, 존재하는 필드만 반영됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLessonInput {
    #[validate(length(min = 1, code = "not_empty", message = "강의 제목은 비어 있을 수 없습니다"))]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(custom(function = "validate_identifier"))]
    pub course_id: Option<Identifier>,

    #[validate(custom(function = "validate_identifier_list"))]
    pub slides: Option<Vec<Identifier>>,

    pub difficulty: Option<LessonDifficulty>,

    pub duration: Option<u32>,

    pub tags: Option<Vec<String>>,
}

impl UpdateLessonInput {
    /// 반영할 필드가 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.course_id.is_none()
            && self.slides.is_none()
            && self.difficulty.is_none()
            && self.duration.is_none()
            && self.tags.is_none()
    }
}

/// 강의에 슬라이드 하나를 연결하는 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddSlideInput {
    #[validate(custom(function = "validate_identifier"))]
    pub slide_id: Identifier,
}

/// 슬라이드 순서 재배치 요청
///
/// `slideIds` 는 강의에 연결된 슬라이드 전체를 새 순서대로 담아야 합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReorderLessonsInput {
    #[validate(custom(function = "validate_identifier_list"))]
    pub slide_ids: Vec<Identifier>,
}

impl ReorderLessonsInput {
    /// 요청 순서가 `current` 의 순열인지 확인하고 새 순서를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 형식 오류, 중복, 누락, 강의에 없는 슬라이드
    pub fn ensure_permutation_of(&self, current: &[ObjectId]) -> AppResult<Vec<ObjectId>> {
        let order = to_object_ids("slideIds", &self.slide_ids)?;

        let mut seen: HashSet<ObjectId> = HashSet::with_capacity(order.len());
        let duplicates: Vec<String> = order
            .iter()
            .filter(|id| !seen.insert(**id))
            .map(|id| id.to_hex())
            .collect();

        let expected: HashSet<&ObjectId> = current.iter().collect();
        let missing: Vec<String> = current
            .iter()
            .filter(|id| !seen.contains(*id))
            .map(|id| id.to_hex())
            .collect();
        let unknown: Vec<String> = order
            .iter()
            .filter(|id| !expected.contains(id))
            .map(|id| id.to_hex())
            .collect();

        let mut violations = Vec::new();
        if !duplicates.is_empty() {
            violations.push(permutation_violation(
                "duplicate_identifier",
                format!("중복된 슬라이드가 있습니다: {}", duplicates.join(", ")),
            ));
        }
        if !missing.is_empty() {
            violations.push(permutation_violation(
                "permutation",
                format!("누락된 슬라이드가 있습니다: {}", missing.join(", ")),
            ));
        }
        if !unknown.is_empty() {
            violations.push(permutation_violation(
                "permutation",
                format!("강의에 없는 슬라이드가 있습니다: {}", unknown.join(", ")),
            ));
        }

        if !violations.is_empty() {
            return Err(ValidationReport::new(violations).into());
        }

        Ok(order)
    }
}

fn permutation_violation(rule: &str, message: String) -> FieldViolation {
    FieldViolation::new("slideIds", rule, message, ViolationKind::InvalidFormat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::parse_value;
    use serde_json::json;

    const COURSE_ID: &str = "507f1f77bcf86cd799439011";

    fn report_of(result: AppResult<Vec<ObjectId>>) -> ValidationReport {
        match result {
            Err(AppError::ValidationError(report)) => report,
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_create_input_from_dto() {
        let dto = parse_value::<CreateLessonDto>(json!({
            "title": "트레잇",
            "courseId": COURSE_ID,
            "slideIds": ["507f191e810c19729de860ea"]
        }))
        .unwrap();

        let input = CreateLessonInput::try_from(dto).unwrap();

        assert_eq!(input.title, "트레잇");
        assert_eq!(input.course_id.as_str(), COURSE_ID);
        assert_eq!(input.slides.len(), 1);
        assert!(input.difficulty.is_none());
        assert!(input.tags.is_empty());
    }

    #[test]
    fn test_create_input_rejects_unvalidated_dto() {
        let dto = CreateLessonDto {
            title: None,
            description: None,
            course_id: Some(Identifier::new("abc")),
            slide_ids: None,
        };

        match CreateLessonInput::try_from(dto) {
            Err(AppError::ValidationError(report)) => assert_eq!(report.len(), 2),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_create_input_rejects_unknown_difficulty() {
        let report = parse_value::<CreateLessonInput>(json!({
            "title": "t",
            "courseId": COURSE_ID,
            "difficulty": "expert"
        }))
        .unwrap_err();

        assert_eq!(report.len(), 1);
        assert!(report.has("difficulty", ViolationKind::InvalidEnumValue));
        assert_eq!(report.violations()[0].rule, "invalid_enum");
    }

    #[test]
    fn test_unknown_difficulty_does_not_hide_other_failures() {
        let report = parse_value::<UpdateLessonInput>(json!({
            "title": "",
            "difficulty": "Expert"
        }))
        .unwrap_err();

        assert_eq!(report.len(), 2);
        assert!(report.has("difficulty", ViolationKind::InvalidEnumValue));
        assert!(report.has("title", ViolationKind::MissingField));
    }

    #[test]
    fn test_reorder_input_rejects_duplicates_during_validation() {
        let report = parse_value::<ReorderLessonsInput>(json!({
            "slideIds": [COURSE_ID, COURSE_ID]
        }))
        .unwrap_err();

        assert!(report.has("slideIds[1]", ViolationKind::NestedElementInvalid));
    }

    #[test]
    fn test_update_input_is_fully_optional() {
        let update = parse_value::<UpdateLessonInput>(json!({})).unwrap();
        assert!(update.is_empty());

        let update = parse_value::<UpdateLessonInput>(json!({ "difficulty": "advanced", "duration": 45 })).unwrap();
        assert!(!update.is_empty());
        assert_eq!(update.difficulty, Some(LessonDifficulty::Advanced));
    }

    #[test]
    fn test_update_input_rejects_empty_title_and_bad_ids() {
        let report = parse_value::<UpdateLessonInput>(json!({
            "title": "",
            "courseId": "abc",
            "slides": ["nope"]
        }))
        .unwrap_err();

        assert!(report.has("title", ViolationKind::MissingField));
        assert!(report.has("courseId", ViolationKind::InvalidFormat));
        assert!(report.has("slides[0]", ViolationKind::NestedElementInvalid));
    }

    #[test]
    fn test_add_slide_input() {
        assert!(parse_value::<AddSlideInput>(json!({ "slideId": COURSE_ID })).is_ok());

        let report = parse_value::<AddSlideInput>(json!({ "slideId": "abc" })).unwrap_err();
        assert!(report.has("slideId", ViolationKind::InvalidFormat));
    }

    #[test]
    fn test_permutation_is_accepted() {
        let current = vec![ObjectId::new(), ObjectId::new(), ObjectId::new()];
        let reorder = ReorderLessonsInput {
            slide_ids: vec![current[2].into(), current[0].into(), current[1].into()],
        };

        let order = reorder.ensure_permutation_of(&current).unwrap();
        assert_eq!(order, vec![current[2], current[0], current[1]]);
    }

    #[test]
    fn test_duplicate_and_missing_slides_are_rejected() {
        let current = vec![ObjectId::new(), ObjectId::new()];
        let reorder = ReorderLessonsInput {
            slide_ids: vec![current[0].into(), current[0].into()],
        };

        let report = report_of(reorder.ensure_permutation_of(&current));
        let rules: Vec<&str> = report.violations().iter().map(|v| v.rule.as_str()).collect();
        assert_eq!(rules, vec!["duplicate_identifier", "permutation"]);
    }

    #[test]
    fn test_foreign_slide_is_rejected() {
        let current = vec![ObjectId::new()];
        let reorder = ReorderLessonsInput {
            slide_ids: vec![current[0].into(), ObjectId::new().into()],
        };

        let report = report_of(reorder.ensure_permutation_of(&current));
        assert!(report.has("slideIds", ViolationKind::InvalidFormat));
        assert!(report.violations()[0].message.contains("강의에 없는"));
    }

    #[test]
    fn test_malformed_reorder_ids_are_rejected() {
        let current = vec![ObjectId::new()];
        let reorder = ReorderLessonsInput {
            slide_ids: vec![Identifier::new("abc")],
        };

        let report = report_of(reorder.ensure_permutation_of(&current));
        assert!(report.has("slideIds[0]", ViolationKind::NestedElementInvalid));
    }
}
