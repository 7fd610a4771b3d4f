//! # Request Validation Pipeline
//!
//! JSON 요청 본문을 DTO로 역직렬화하고 `validator` 규칙을 적용한 뒤,
//! 실패를 필드 단위 위반 목록([`ValidationReport`])으로 정리합니다.
//!
//! ## 검증 정책
//!
//! - **규칙 검증은 전부 수집**: `validator` 가 모든 필드를 평가하므로
//!   한 요청의 위반 사항이 한 번에 보고됩니다.
//! - **역직렬화 실패도 필드 경로로 보고**: `serde_path_to_error` 로 실패 위치를
//!   추적합니다. 타입이 맞지 않거나 알 수 없는 열거값인 필드는 위반으로 기록한 뒤
//!   값에서 빼고 다시 역직렬화하므로, 나머지 필드의 규칙 위반도 함께 보고됩니다.
//! - **필수 필드 누락은 중단**: 선택적이지 않은 필드(예: `students` 배열)가
//!   없으면 값을 만들 수 없으므로 그때까지의 위반만 보고합니다.
//! - **중첩 요소**: 배열 원소 안의 위반은 `students[1].email` 같은 경로와
//!   [`ViolationKind::NestedElementInvalid`] 로 보고됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::validation::parse_request;
//!
//! match parse_request::<CreateSlideDto>(body) {
//!     Ok(dto) => { /* 검증 완료된 값만 여기 도달 */ }
//!     Err(report) => {
//!         for v in report.violations() {
//!             println!("{} [{}] {}", v.field, v.rule, v.message);
//!         }
//!     }
//! }
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::error::Category;
use serde_path_to_error::{Path, Segment};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

/// 본문 전체(특정 필드로 귀속되지 않는 위반)를 가리키는 경로
pub const ROOT_PATH: &str = "$";

/// 목록 규칙이 잘못된 원소 위치를 실어 보내는 파라미터 이름
pub const INDICES_PARAM: &str = "indices";

/// 구조체 수준 검증 에러가 담기는 `validator` 의 예약 키
const SCHEMA_KEY: &str = "__all__";

/// 위반 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// 필수 필드가 없거나 빈 문자열
    MissingField,
    /// JSON 타입이 기대와 다름
    WrongType,
    /// 이메일/식별자 등 형식 오류
    InvalidFormat,
    /// 허용 범위를 벗어난 값
    OutOfRange,
    /// 닫힌 열거형에 없는 값
    InvalidEnumValue,
    /// 배열 원소 내부의 위반
    NestedElementInvalid,
    /// JSON 문법 자체가 깨진 본문
    MalformedBody,
}

impl ViolationKind {
    /// 규칙 코드로부터 분류를 결정합니다.
    pub fn from_rule(rule: &str) -> Self {
        match rule {
            "required" | "not_empty" => ViolationKind::MissingField,
            "range" => ViolationKind::OutOfRange,
            "invalid_enum" => ViolationKind::InvalidEnumValue,
            "type" => ViolationKind::WrongType,
            "json" => ViolationKind::MalformedBody,
            _ => ViolationKind::InvalidFormat,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingField => "missing_field",
            ViolationKind::WrongType => "wrong_type",
            ViolationKind::InvalidFormat => "invalid_format",
            ViolationKind::OutOfRange => "out_of_range",
            ViolationKind::InvalidEnumValue => "invalid_enum_value",
            ViolationKind::NestedElementInvalid => "nested_element_invalid",
            ViolationKind::MalformedBody => "malformed_body",
        }
    }
}

/// 단일 위반 항목 `(필드 경로, 규칙, 메시지)` + 분류
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// camelCase 필드 경로 (`courseId`, `students[1].email`, `$`)
    pub field: String,
    /// 위반한 규칙 코드 (`required`, `email`, `invalid_identifier`, ...)
    pub rule: String,
    pub message: String,
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
        kind: ViolationKind,
    ) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            message: message.into(),
            kind,
        }
    }
}

/// 검증 실패 보고서
///
/// 위반 목록은 경로 순으로 정렬되어 있어 같은 입력에 항상 같은 순서로 보고됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    violations: Vec<FieldViolation>,
}

impl ValidationReport {
    pub fn new(mut violations: Vec<FieldViolation>) -> Self {
        violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.rule.cmp(&b.rule)));
        Self { violations }
    }

    pub fn single(violation: FieldViolation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// 해당 경로에 주어진 분류의 위반이 있는지 확인합니다.
    pub fn has(&self, field: &str, kind: ViolationKind) -> bool {
        self.violations
            .iter()
            .any(|v| v.field == field && v.kind == kind)
    }

    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldViolation> + 'a {
        self.violations.iter().filter(move |v| v.field == field)
    }

    /// 위치 정보가 없는 `serde_json` 에러를 본문 루트(`$`)의 위반 하나로 변환합니다.
    pub fn from_serde(err: &serde_json::Error) -> Self {
        Self::single(serde_violation("", false, err))
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

impl From<ValidationErrors> for ValidationReport {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations = Vec::new();
        collect_violations(&errors, "", false, &mut violations);

        // 값이 비어 있으면 누락 하나만 보고한다
        let missing: HashSet<String> = violations
            .iter()
            .filter(|v| is_missing_rule(&v.rule))
            .map(|v| v.field.clone())
            .collect();
        violations.retain(|v| is_missing_rule(&v.rule) || !missing.contains(&v.field));

        Self::new(violations)
    }
}

fn is_missing_rule(rule: &str) -> bool {
    matches!(rule, "required" | "not_empty")
}

/// `serde_json` 에러를 위반 항목으로 분류합니다.
///
/// * `location` - 실패한 값의 경로 (`""` 이면 본문 루트)
/// * `nested` - 경로가 배열 원소 안을 가리키는지
fn serde_violation(location: &str, nested: bool, err: &serde_json::Error) -> FieldViolation {
    let message = err.to_string();
    let kind_or_nested = |kind: ViolationKind| if nested { ViolationKind::NestedElementInvalid } else { kind };

    if !matches!(err.classify(), Category::Data) {
        return FieldViolation::new(
            ROOT_PATH,
            "json",
            format!("요청 본문이 올바른 JSON이 아닙니다: {}", message),
            ViolationKind::MalformedBody,
        );
    }

    // 누락 에러는 필드를 담은 구조체의 경로에서 발생한다
    if let Some(name) = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
    {
        let field = join_path(location, name);
        return FieldViolation::new(
            field.clone(),
            "required",
            format!("{} 필드는 필수입니다", field),
            kind_or_nested(ViolationKind::MissingField),
        );
    }

    let field = if location.is_empty() { ROOT_PATH } else { location };

    if message.starts_with("unknown variant") {
        return FieldViolation::new(
            field,
            "invalid_enum",
            message,
            kind_or_nested(ViolationKind::InvalidEnumValue),
        );
    }

    FieldViolation::new(field, "type", message, kind_or_nested(ViolationKind::WrongType))
}

/// 추적된 경로를 `students[1].email` 형태로 바꿉니다.
fn render_path(path: &Path) -> String {
    let mut rendered = String::new();

    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => rendered.push_str(&format!("[{}]", index)),
            Segment::Map { key } => rendered = join_path(&rendered, key),
            Segment::Enum { variant } => rendered = join_path(&rendered, variant),
            Segment::Unknown => rendered = join_path(&rendered, "?"),
        }
    }

    rendered
}

fn is_inside_array(path: &Path) -> bool {
    path.iter().any(|segment| matches!(segment, Segment::Seq { .. }))
}

/// 경로가 가리키는 객체 필드를 값에서 제거합니다.
///
/// 마지막 구간이 객체 키가 아니면(배열 원소, 열거형 등) 제거하지 않고 `false` 를 반환합니다.
fn remove_path(value: &mut Value, path: &Path) -> bool {
    let segments: Vec<&Segment> = path.iter().collect();
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };

    let mut current = value;
    for segment in parents {
        let next = match segment {
            Segment::Map { key } => current.get_mut(key.as_str()),
            Segment::Seq { index } => current.get_mut(*index),
            _ => None,
        };
        match next {
            Some(inner) => current = inner,
            None => return false,
        }
    }

    match last {
        Segment::Map { key } => current
            .as_object_mut()
            .and_then(|map| map.remove(key.as_str()))
            .is_some(),
        _ => false,
    }
}

/// 역직렬화 단계의 위반을 모두 모으며 값을 만듭니다.
///
/// 타입 오류가 난 객체 필드는 제거하고 다시 시도합니다. 매 시도마다 키가 하나씩
/// 줄어들므로 반복은 반드시 끝납니다. 값을 만들 수 없으면 `None` 을 돌려줍니다.
fn deserialize_tracking<T: DeserializeOwned>(mut value: Value) -> (Option<T>, Vec<FieldViolation>) {
    let mut violations: Vec<FieldViolation> = Vec::new();

    loop {
        let result = serde_path_to_error::deserialize::<_, T>(&value);
        let err = match result {
            Ok(parsed) => return (Some(parsed), violations),
            Err(err) => err,
        };

        let violation = serde_violation(&render_path(err.path()), is_inside_array(err.path()), err.inner());

        // 제거한 필드가 필수였다면 같은 경로의 누락으로 다시 실패한다
        if violations.iter().any(|v| v.field == violation.field) {
            return (None, violations);
        }

        let retry = violation.rule != "required" && remove_path(&mut value, err.path());
        violations.push(violation);

        if !retry {
            return (None, violations);
        }
    }
}

/// `field` 가 `parent` 경로 자체이거나 그 하위 경로인지 확인합니다.
fn is_within(field: &str, parent: &str) -> bool {
    field
        .strip_prefix(parent)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.') || rest.starts_with('['))
}

fn collect_violations(
    errors: &ValidationErrors,
    prefix: &str,
    nested: bool,
    out: &mut Vec<FieldViolation>,
) {
    for (name, kind) in errors.errors() {
        let name: &str = name.as_ref();
        let path = if name == SCHEMA_KEY {
            if prefix.is_empty() { ROOT_PATH.to_string() } else { prefix.to_string() }
        } else {
            join_path(prefix, &to_camel_case(name))
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    push_field_error(&path, error, nested, out);
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_violations(inner, &path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_violations(inner, &format!("{}[{}]", path, index), true, out);
                }
            }
        }
    }
}

fn push_field_error(path: &str, error: &ValidationError, nested: bool, out: &mut Vec<FieldViolation>) {
    let rule = error.code.to_string();
    let message = error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("{} 규칙을 만족하지 않습니다", rule));

    // 목록 규칙은 잘못된 원소마다 별도 위반으로 펼칩니다
    let indices: Vec<u64> = error
        .params
        .get(INDICES_PARAM)
        .and_then(|v| v.as_array())
        .map(|items| items.iter().filter_map(|v| v.as_u64()).collect())
        .unwrap_or_default();

    if !indices.is_empty() {
        for index in indices {
            out.push(FieldViolation::new(
                format!("{}[{}]", path, index),
                rule.clone(),
                message.clone(),
                ViolationKind::NestedElementInvalid,
            ));
        }
        return;
    }

    let kind = if nested {
        ViolationKind::NestedElementInvalid
    } else {
        ViolationKind::from_rule(&rule)
    };
    out.push(FieldViolation::new(path, rule, message, kind));
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

/// `snake_case` 필드 이름을 JSON 표현인 `camelCase` 로 바꿉니다.
pub fn to_camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut upper_next = false;

    for c in name.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// 이미 역직렬화된 DTO에 규칙 검증만 적용합니다.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), ValidationReport> {
    dto.validate().map_err(ValidationReport::from)
}

/// JSON 본문을 역직렬화하고 검증합니다.
///
/// 성공 시에만 값을 돌려주므로 검증되지 않은 부분 객체가 호출자에게 새어 나가지 않습니다.
pub fn parse_request<T>(body: &[u8]) -> Result<T, ValidationReport>
where
    T: DeserializeOwned + Validate,
{
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        let report = ValidationReport::from_serde(&e);
        log::debug!("요청 본문 파싱 실패: {}", report);
        report
    })?;
    parse_value(value)
}

/// 이미 파싱된 `serde_json::Value` 에서 DTO를 만들고 검증합니다.
///
/// 역직렬화 단계의 위반과 규칙 위반을 하나의 보고서로 합칩니다.
/// 이미 타입 오류로 보고된 경로의 규칙 위반은 중복해서 넣지 않습니다.
pub fn parse_value<T>(value: Value) -> Result<T, ValidationReport>
where
    T: DeserializeOwned + Validate,
{
    let (parsed, mut violations) = deserialize_tracking::<T>(value);

    if let Some(dto) = parsed {
        if let Err(report) = validate_dto(&dto) {
            let reported: Vec<String> = violations.iter().map(|v| v.field.clone()).collect();
            violations.extend(
                report
                    .into_violations()
                    .into_iter()
                    .filter(|v| !reported.iter().any(|parent| is_within(&v.field, parent))),
            );
        }

        if violations.is_empty() {
            return Ok(dto);
        }
    }

    let report = ValidationReport::new(violations);
    log::debug!("요청 검증 실패 ({}건): {}", report.len(), report);
    Err(report)
}
