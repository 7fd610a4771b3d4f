//! 문서 식별자 값 타입
//!
//! 클라이언트가 보낸 식별자 문자열을 그대로 감싸는 불투명 타입입니다.
//! DTO 계층은 이 타입만 알고, MongoDB `ObjectId` 로의 변환은
//! 엔티티를 만들 때 한 번만 일어납니다.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::core::errors::{AppResult, ErrorContext};
use crate::core::validation::{FieldViolation, INDICES_PARAM, ValidationReport, ViolationKind};

/// 식별자 문자 수 (12바이트 = 16진수 24자)
pub const IDENTIFIER_LENGTH: usize = 24;

const INVALID_IDENTIFIER_CODE: &str = "invalid_identifier";
const INVALID_IDENTIFIER_MESSAGE: &str = "올바른 식별자 형식이 아닙니다 (24자리 16진수)";
const DUPLICATE_IDENTIFIER_CODE: &str = "duplicate_identifier";
const DUPLICATE_IDENTIFIER_MESSAGE: &str = "같은 식별자가 목록에 두 번 이상 들어 있습니다";

/// 문서 식별자
///
/// JSON 에서는 문자열 그대로 표현됩니다. 역직렬화 시점에는 형식을 검사하지 않으며,
/// 형식 검증은 [`validate_identifier`] 규칙이 담당합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 24자리 16진수(대소문자 무관)인지 확인합니다.
    pub fn is_well_formed(&self) -> bool {
        is_well_formed(&self.0)
    }

    /// 저장소의 `ObjectId` 로 변환합니다.
    ///
    /// # Arguments
    ///
    /// * `field` - 실패 시 위반 항목에 기록할 필드 경로
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 형식이 잘못된 경우 (`InvalidFormat`)
    pub fn to_object_id(&self, field: &str) -> AppResult<ObjectId> {
        if !self.is_well_formed() {
            return Err(ValidationReport::single(invalid_identifier_violation(field)).into());
        }

        ObjectId::parse_str(&self.0).with_context(|| format!("식별자 변환 실패 ({})", field))
    }
}

impl From<ObjectId> for Identifier {
    fn from(id: ObjectId) -> Self {
        Self(id.to_hex())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 식별자 형식 검사
pub fn is_well_formed(raw: &str) -> bool {
    raw.len() == IDENTIFIER_LENGTH && raw.bytes().all(|b| b.is_ascii_hexdigit())
}

/// 식별자 목록을 `ObjectId` 목록으로 변환합니다.
///
/// 잘못된 원소를 모두 모아 `field[i]` 경로로 보고합니다.
pub fn to_object_ids(field: &str, ids: &[Identifier]) -> AppResult<Vec<ObjectId>> {
    let violations: Vec<FieldViolation> = ids
        .iter()
        .enumerate()
        .filter(|(_, id)| !id.is_well_formed())
        .map(|(i, _)| {
            let mut violation = invalid_identifier_violation(&format!("{}[{}]", field, i));
            violation.kind = ViolationKind::NestedElementInvalid;
            violation
        })
        .collect();

    if !violations.is_empty() {
        return Err(ValidationReport::new(violations).into());
    }

    ids.iter()
        .enumerate()
        .map(|(i, id)| id.to_object_id(&format!("{}[{}]", field, i)))
        .collect()
}

fn invalid_identifier_violation(field: &str) -> FieldViolation {
    FieldViolation::new(
        field,
        INVALID_IDENTIFIER_CODE,
        INVALID_IDENTIFIER_MESSAGE,
        ViolationKind::InvalidFormat,
    )
}

/// 단일 식별자 필드 검증 규칙 (`#[validate(custom(...))]` 용)
pub fn validate_identifier(id: &Identifier) -> Result<(), ValidationError> {
    if id.is_well_formed() {
        return Ok(());
    }

    Err(ValidationError::new(INVALID_IDENTIFIER_CODE).with_message(INVALID_IDENTIFIER_MESSAGE.into()))
}

/// 식별자 배열 필드 검증 규칙
///
/// 형식이 잘못된 원소가 있으면 `invalid_identifier`, 모두 올바르지만 같은 식별자가
/// 다시 나오면 `duplicate_identifier` 로 실패합니다. 16진수 대소문자는 구분하지 않습니다.
/// 해당 원소의 위치를 `indices` 파라미터로 실어 보내며,
/// 보고서에서는 원소마다 별도 위반으로 펼쳐집니다.
pub fn validate_identifier_list(ids: &[Identifier]) -> Result<(), ValidationError> {
    let invalid: Vec<usize> = ids
        .iter()
        .enumerate()
        .filter(|(_, id)| !id.is_well_formed())
        .map(|(i, _)| i)
        .collect();

    if !invalid.is_empty() {
        return Err(indexed_error(INVALID_IDENTIFIER_CODE, INVALID_IDENTIFIER_MESSAGE, &invalid));
    }

    let mut seen: HashSet<String> = HashSet::with_capacity(ids.len());
    let duplicates: Vec<usize> = ids
        .iter()
        .enumerate()
        .filter(|(_, id)| !seen.insert(id.as_str().to_ascii_lowercase()))
        .map(|(i, _)| i)
        .collect();

    if !duplicates.is_empty() {
        return Err(indexed_error(DUPLICATE_IDENTIFIER_CODE, DUPLICATE_IDENTIFIER_MESSAGE, &duplicates));
    }

    Ok(())
}

fn indexed_error(code: &'static str, message: &'static str, indices: &[usize]) -> ValidationError {
    let mut error = ValidationError::new(code).with_message(Cow::from(message));
    error.add_param(Cow::from(INDICES_PARAM), &indices);
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    const VALID: &str = "507f1f77bcf86cd799439011";

    #[test]
    fn test_well_formed_identifiers() {
        assert!(Identifier::new(VALID).is_well_formed());
        assert!(Identifier::new("507F1F77BCF86CD799439011").is_well_formed());

        assert!(!Identifier::new("abc").is_well_formed());
        assert!(!Identifier::new("").is_well_formed());
        assert!(!Identifier::new("507f1f77bcf86cd79943901").is_well_formed());
        assert!(!Identifier::new("507f1f77bcf86cd7994390111").is_well_formed());
        assert!(!Identifier::new("507f1f77bcf86cd79943901z").is_well_formed());
    }

    #[test]
    fn test_to_object_id() {
        let id = Identifier::new(VALID).to_object_id("courseId").unwrap();
        assert_eq!(id.to_hex(), VALID);

        match Identifier::new("abc").to_object_id("courseId") {
            Err(AppError::ValidationError(report)) => {
                assert!(report.has("courseId", ViolationKind::InvalidFormat));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_object_id_roundtrip_through_identifier() {
        let oid = ObjectId::new();
        let id = Identifier::from(oid);

        assert!(id.is_well_formed());
        assert_eq!(id.to_object_id("id").unwrap(), oid);
    }

    #[test]
    fn test_to_object_ids_reports_every_bad_element() {
        let ids = vec![
            Identifier::new(VALID),
            Identifier::new("bad"),
            Identifier::new("also-bad"),
        ];

        match to_object_ids("slideIds", &ids) {
            Err(AppError::ValidationError(report)) => {
                assert_eq!(report.len(), 2);
                assert!(report.has("slideIds[1]", ViolationKind::NestedElementInvalid));
                assert!(report.has("slideIds[2]", ViolationKind::NestedElementInvalid));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }

        assert_eq!(to_object_ids("slideIds", &ids[..1]).unwrap().len(), 1);
    }

    #[test]
    fn test_validation_rules() {
        assert!(validate_identifier(&Identifier::new(VALID)).is_ok());

        let error = validate_identifier(&Identifier::new("abc")).unwrap_err();
        assert_eq!(error.code, INVALID_IDENTIFIER_CODE);

        assert!(validate_identifier_list(&[]).is_ok());
        let error = validate_identifier_list(&[Identifier::new(VALID), Identifier::new("x")]).unwrap_err();
        assert_eq!(error.params[INDICES_PARAM], serde_json::json!([1]));
    }

    #[test]
    fn test_duplicate_identifiers_are_rejected() {
        let upper = VALID.to_ascii_uppercase();
        let ids = vec![
            Identifier::new(VALID),
            Identifier::new("507f191e810c19729de860ea"),
            Identifier::new(upper),
        ];

        let error = validate_identifier_list(&ids).unwrap_err();
        assert_eq!(error.code, DUPLICATE_IDENTIFIER_CODE);
        assert_eq!(error.params[INDICES_PARAM], serde_json::json!([2]));

        // 형식 오류가 먼저 보고된다
        let error = validate_identifier_list(&[Identifier::new("x"), Identifier::new("x")]).unwrap_err();
        assert_eq!(error.code, INVALID_IDENTIFIER_CODE);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id: Identifier = serde_json::from_str(&format!("\"{}\"", VALID)).unwrap();
        assert_eq!(id.as_str(), VALID);
        assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{}\"", VALID));
    }
}
