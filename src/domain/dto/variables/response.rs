use serde::{Deserialize, Serialize};

use crate::domain::entities::variables::Variable;

/// 변수 응답 DTO
///
/// 저장소의 `_id`는 16진수 문자열 `id`로 노출됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableResponse {
    pub id: String,
    pub device_id: String,
    pub variable_name: String,
    pub unit: String,
    pub description: String,
    pub sampling_ms: i64,
    pub username: String,
}

impl From<Variable> for VariableResponse {
    fn from(variable: Variable) -> Self {
        Self {
            id: variable.id_string().unwrap_or_default(),
            device_id: variable.device_id,
            variable_name: variable.variable_name,
            unit: variable.unit,
            description: variable.description,
            sampling_ms: variable.sampling_ms,
            username: variable.username,
        }
    }
}
