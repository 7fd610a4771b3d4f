//! Lessons Entity Module
//!
//! 강의 문서 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::lessons::Lesson;
//!
//! let mut lesson = Lesson::create(input)?;
//! lesson.add_slide(AddSlideInput { slide_id })?;
//! lesson.reorder_slides(ReorderLessonsInput { slide_ids })?;
//! ```

pub mod lesson;

pub use lesson::Lesson;
