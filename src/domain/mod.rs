//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서 모델 (User, Variable)
//! ├── dto       - API 요청/응답 계약
//! └── models    - 인증 컨텍스트와 JWT 클레임
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```
//!
//! 엔티티는 저장소 표기(`_id`, `password`, `rol`)를 따르고,
//! DTO는 외부 계약(`id` 문자열, 비밀번호 없음)을 따릅니다.
//! 두 표현 사이의 변환은 DTO 쪽의 `From` 구현에 모여 있습니다.

pub mod entities;
pub mod dto;
pub mod models;
