//! IoT 플랫폼 백엔드
//!
//! 사용자 계정과 사용자별 측정 변수(장치 텔레메트리 채널 정의)를 관리하는
//! 인증 기반 REST 서비스입니다. 저장소는 MongoDB입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입(토큰 즉시 발급), 프로필 조회, 비밀번호 변경, 계정 삭제
//! - **JWT 인증**: HS256 Bearer 토큰, 사용자명/비밀번호 로그인
//! - **변수 레지스트리**: 소유자 단위로 격리된 변수 생성/조회/삭제
//! - **명시적 DI**: 저장소 trait 객체를 서비스에 주입, 서비스는 `web::Data`로 공유
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 추출/검증, 응답 직렬화
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 규칙 (중복, 소유권, 권한)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / VariableStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← usuarios, variables
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use iot_platform_backend::db::Database;
//! use iot_platform_backend::repositories::MongoUserRepository;
//! use iot_platform_backend::services::{auth::TokenService, users::UserService};
//!
//! let database = Arc::new(Database::new().await?);
//! let tokens = Arc::new(TokenService::from_config());
//! let users = UserService::new(Arc::new(MongoUserRepository::new(database)), tokens, 12);
//!
//! let response = users.create_user(request).await?;
//! println!("{}", response.access_token);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;
