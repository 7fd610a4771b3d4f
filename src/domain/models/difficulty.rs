//! 강의 난이도
//!
//! 세 값으로 닫힌 열거형입니다. 외부 입력은 정확히 `beginner`, `intermediate`,
//! `advanced` 만 허용하며, 그 외 값은 기본값으로 대체하지 않고 거부합니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::validation::{FieldViolation, ValidationReport, ViolationKind};

/// 강의 난이도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonDifficulty {
    /// 입문
    Beginner,
    /// 중급
    Intermediate,
    /// 고급
    Advanced,
}

impl LessonDifficulty {
    pub const ALL: [LessonDifficulty; 3] = [
        LessonDifficulty::Beginner,
        LessonDifficulty::Intermediate,
        LessonDifficulty::Advanced,
    ];

    /// 직렬화 표현과 동일한 소문자 문자열을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonDifficulty::Beginner => "beginner",
            LessonDifficulty::Intermediate => "intermediate",
            LessonDifficulty::Advanced => "advanced",
        }
    }
}

impl FromStr for LessonDifficulty {
    type Err = ValidationReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(LessonDifficulty::Beginner),
            "intermediate" => Ok(LessonDifficulty::Intermediate),
            "advanced" => Ok(LessonDifficulty::Advanced),
            _ => Err(ValidationReport::single(FieldViolation::new(
                "difficulty",
                "invalid_enum",
                format!(
                    "지원하지 않는 난이도입니다: {} (beginner, intermediate, advanced 중 하나)",
                    s
                ),
                ViolationKind::InvalidEnumValue,
            ))),
        }
    }
}

impl fmt::Display for LessonDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
