//! # 사용자 수정 요청 DTO
//!
//! `PATCH /users/{username}` 요청 본문과, 이를 변경 가능한 필드만 명시적으로
//! 열거하는 [`UserChanges`]로 변환하는 로직을 정의합니다.
//!
//! 현재 변경 가능한 필드는 비밀번호 하나뿐입니다. 알 수 없는 필드는 무시되며,
//! 인식된 필드가 하나도 없으면 요청은 400으로 거절됩니다.

use serde::Deserialize;

/// 사용자 부분 수정 요청
///
/// 프론트엔드는 프로필 폼 전체를 보낼 수 있으므로 알 수 없는 필드는 조용히 무시합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub password: Option<String>,
}

/// 저장소에 반영할 사용자 변경 사항
///
/// 각 필드는 변경 가능한 속성 하나에 대응합니다.
/// 새 필드를 수정 가능하게 하려면 여기에 추가하고 저장소 구현에서 매핑합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    /// 새 비밀번호 (평문). 해싱은 서비스 계층에서 수행합니다.
    pub password: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.password.is_none()
    }
}

impl From<UpdateUserRequest> for UserChanges {
    /// 빈 문자열은 값이 없는 것으로 취급합니다.
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            password: request.password.filter(|p| !p.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes(json: serde_json::Value) -> UserChanges {
        serde_json::from_value::<UpdateUserRequest>(json).unwrap().into()
    }

    #[test]
    fn test_empty_body_has_no_changes() {
        assert!(changes(serde_json::json!({})).is_empty());
    }

    #[test]
    fn test_empty_password_has_no_changes() {
        assert!(changes(serde_json::json!({ "password": "" })).is_empty());
        assert!(changes(serde_json::json!({ "password": null })).is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let result = changes(serde_json::json!({ "name": "Otro", "city": "Quito" }));

        assert!(result.is_empty());
    }

    #[test]
    fn test_password_change_is_recognized() {
        let result = changes(serde_json::json!({ "password": "nueva", "name": "Otro" }));

        assert_eq!(result.password.as_deref(), Some("nueva"));
        assert!(!result.is_empty());
    }
}
