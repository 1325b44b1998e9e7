//! Variable Entity Implementation
//!
//! `variables` 컬렉션에 저장되는 장치 측정 변수 문서 모델입니다.
//! 소유자(`username`)는 요청 본문이 아닌 인증 컨텍스트에서 채워집니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub device_id: String,
    pub variable_name: String,
    pub unit: String,
    #[serde(default)]
    pub description: String,
    /// 샘플링 주기 (밀리초)
    pub sampling_ms: i64,
    /// 소유자 사용자명
    pub username: String,
}

impl Variable {
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
