use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::variables::Variable;

/// 변수 생성 요청 DTO
///
/// 소유자는 본문에 포함되지 않으며 인증된 사용자로부터 채워집니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVariableRequest {
    #[validate(length(min = 1, message = "El identificador del dispositivo es obligatorio"))]
    pub device_id: String,

    #[validate(length(min = 1, message = "El nombre de la variable es obligatorio"))]
    pub variable_name: String,

    pub unit: String,

    #[serde(default)]
    pub description: String,

    #[validate(range(min = 1, message = "El periodo de muestreo debe ser al menos 1 ms"))]
    pub sampling_ms: i64,
}

impl CreateVariableRequest {
    pub fn into_variable(self, owner: &str) -> Variable {
        Variable {
            id: None,
            device_id: self.device_id,
            variable_name: self.variable_name,
            unit: self.unit,
            description: self.description,
            sampling_ms: self.sampling_ms,
            username: owner.to_string(),
        }
    }
}
