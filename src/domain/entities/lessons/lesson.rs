//! Lesson Entity Implementation
//!
//! 강의 문서 엔티티입니다. 코스에 속하며 순서가 있는 슬라이드 목록을 가집니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::core::errors::AppResult;
use crate::core::validation::validate_dto;
use crate::domain::dto::lessons::{AddSlideInput, CreateLessonInput, ReorderLessonsInput, UpdateLessonInput};
use crate::domain::models::LessonDifficulty;
use crate::domain::models::identifier::to_object_ids;

/// 강의 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 강의 제목
    pub title: String,
    /// 강의 설명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 소속 코스
    pub course_id: ObjectId,
    /// 슬라이드 (표시 순서)
    pub slides: Vec<ObjectId>,
    pub difficulty: LessonDifficulty,
    /// 예상 소요 시간 (분)
    pub duration: u32,
    pub tags: Vec<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Lesson {
    /// 새 강의 문서 생성
    ///
    /// 아직 저장되지 않은 상태(`id: None`)로 만들어지며,
    /// 식별자 변환에 실패하면 아무 것도 만들지 않고 검증 에러를 반환합니다.
    pub fn create(input: CreateLessonInput) -> AppResult<Self> {
        validate_dto(&input)?;

        let course_id = input.course_id.to_object_id("courseId")?;
        let slides = to_object_ids("slides", &input.slides)?;
        let now = DateTime::now();

        Ok(Self {
            id: None,
            title: input.title,
            description: input.description,
            course_id,
            slides,
            difficulty: input.difficulty.unwrap_or(LessonDifficulty::Beginner),
            duration: input.duration.unwrap_or(0),
            tags: input.tags,
            created_at: now,
            updated_at: now,
        })
    }

    /// 수정 요청의 존재하는 필드만 반영합니다.
    ///
    /// 검증과 식별자 변환을 모두 마친 뒤에 값을 바꾸므로
    /// 실패한 요청이 문서를 일부만 바꿔 놓는 일은 없습니다.
    pub fn apply_update(&mut self, update: UpdateLessonInput) -> AppResult<()> {
        validate_dto(&update)?;

        let course_id = update
            .course_id
            .as_ref()
            .map(|id| id.to_object_id("courseId"))
            .transpose()?;
        let slides = update
            .slides
            .as_deref()
            .map(|ids| to_object_ids("slides", ids))
            .transpose()?;

        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(course_id) = course_id {
            self.course_id = course_id;
        }
        if let Some(slides) = slides {
            self.slides = slides;
        }
        if let Some(difficulty) = update.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(duration) = update.duration {
            self.duration = duration;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }

        self.touch();
        Ok(())
    }

    /// 슬라이드를 맨 뒤에 연결합니다.
    ///
    /// 이미 연결된 슬라이드면 아무 것도 바꾸지 않고 `false` 를 반환합니다.
    pub fn add_slide(&mut self, input: AddSlideInput) -> AppResult<bool> {
        let slide_id = input.slide_id.to_object_id("slideId")?;

        if self.slides.contains(&slide_id) {
            return Ok(false);
        }

        self.slides.push(slide_id);
        self.touch();
        Ok(true)
    }

    /// 슬라이드 순서를 재배치합니다.
    pub fn reorder_slides(&mut self, input: ReorderLessonsInput) -> AppResult<()> {
        self.slides = input.ensure_permutation_of(&self.slides)?;
        self.touch();
        Ok(())
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}
