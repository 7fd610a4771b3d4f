//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 받는 요청 본문을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 검증 내장
//! - **타입 검증**: `serde` 역직렬화 단계에서 JSON 타입 확인
//! - **규칙 검증**: `validator` derive 로 필드별 규칙 선언
//! - **전체 수집**: 한 요청의 모든 위반을 한 번에 보고
//!
//! ### 2. 필수/선택 구분
//! - 필수 스칼라 필드는 `Option<T>` + `required` 규칙으로 선언하여
//!   누락도 다른 위반과 함께 수집합니다
//! - 선택 필드는 없으면 통과, 있으면 규칙 적용
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── students/   # 학생 일괄 등록
//! ├── lessons/    # 강의 생성 요청 + 서비스 계층 요청 형태
//! └── slides/     # 슬라이드 생성
//! ```

pub mod lessons;
pub mod slides;
pub mod students;
