//! User Entity Implementation
//!
//! `usuarios` 컬렉션에 저장되는 사용자 문서 모델입니다.
//! 필드 이름은 기존 문서 및 프론트엔드와 호환되도록 저장소 표기(`password`, `rol`)를 유지합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 역할이 지정되지 않은 사용자에게 부여되는 기본 역할
pub const DEFAULT_ROLE: &str = "usuario";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    /// bcrypt 해시. 응답 DTO로는 절대 노출되지 않습니다.
    #[serde(rename = "password")]
    pub password_hash: String,
    pub email: String,
    pub name: String,
    pub country: String,
    pub city: String,
    #[serde(default)]
    pub company: Option<String>,
    /// 역할 없이 저장된 과거 문서도 읽을 수 있도록 `Option`으로 둡니다.
    #[serde(rename = "rol", default)]
    pub role: Option<String>,
}

impl User {
    /// 새 로컬 사용자를 생성합니다. ID는 삽입 시 저장소가 할당합니다.
    ///
    /// 빈 역할은 [`DEFAULT_ROLE`]로 대체되어 저장됩니다.
    pub fn new(
        username: String,
        password_hash: String,
        email: String,
        name: String,
        country: String,
        city: String,
        company: Option<String>,
        role: Option<String>,
    ) -> Self {
        let role = role
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ROLE.to_string());

        Self {
            id: None,
            username,
            password_hash,
            email,
            name,
            country,
            city,
            company,
            role: Some(role),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 토큰 발급에 사용할 역할. 저장된 값이 없으면 기본 역할을 사용합니다.
    pub fn effective_role(&self) -> &str {
        self.role.as_deref().unwrap_or(DEFAULT_ROLE)
    }
}
