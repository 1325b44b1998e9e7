//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//! 엔티티(`domain::entities`)는 MongoDB 문서 표현이고, DTO는 외부 계약입니다.
//!
//! ## 설계 원칙
//!
//! - **유효성 검증 내장**: 요청 DTO는 `validator::Validate`를 구현하며
//!   핸들러에서 서비스 호출 전에 검증됩니다.
//! - **민감 정보 차단**: 응답 DTO는 비밀번호 해시를 포함하지 않습니다.
//! - **ID 표현**: `ObjectId`는 항상 16진수 문자열 `id`로 노출됩니다.
//!
//! ```text
//! dto/
//! ├── users/
//! │   ├── request/    # CreateUserRequest, UpdateUserRequest, LoginRequest
//! │   └── response/   # UserProfile, TokenResponse
//! └── variables/      # CreateVariableRequest, VariableResponse
//! ```

pub mod users;
pub mod variables;

use serde::{Deserialize, Serialize};

/// 단순 메시지 응답 (`{"message": "..."}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
