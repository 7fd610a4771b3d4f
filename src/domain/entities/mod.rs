//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티들을 정의합니다.
//!
//! ### MongoDB 통합
//! - **BSON 직렬화**: `serde` 와 `bson` 을 통한 자동 변환
//! - **ObjectId 지원**: `_id` 및 참조 필드는 `ObjectId`
//! - **타임스탬프**: `bson::DateTime` (`createdAt`, `updatedAt`)
//!
//! 삭제는 저장소 연산으로 처리되며 엔티티에는 삭제 로직이 없습니다.

pub mod lessons;
