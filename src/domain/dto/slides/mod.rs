//! # 슬라이드 관련 요청 DTO 모듈

pub mod request;

pub use request::CreateSlideDto;
