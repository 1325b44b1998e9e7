//! # 변수 레지스트리 서비스
//!
//! 인증된 사용자 소유의 측정 변수 정의를 생성/조회/삭제합니다.
//! 소유자는 항상 인증 컨텍스트에서 결정되며 요청 본문으로 지정할 수 없습니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::{
            variables::{CreateVariableRequest, VariableResponse},
            MessageResponse,
        },
        models::auth::AuthenticatedUser,
    },
    repositories::variables::VariableStore,
};

pub struct VariableService {
    variables: Arc<dyn VariableStore>,
}

impl VariableService {
    pub fn new(variables: Arc<dyn VariableStore>) -> Self {
        Self { variables }
    }

    /// 변수를 등록합니다.
    ///
    /// 같은 소유자에게 `(device_id, variable_name)`이 이미 있으면 409.
    pub async fn create_variable(
        &self,
        request: CreateVariableRequest,
        identity: &AuthenticatedUser,
    ) -> AppResult<VariableResponse> {
        if self.variables
            .find_by_key(&request.device_id, &request.variable_name, &identity.username)
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError(
                "Ya existe una variable con ese nombre para ese dispositivo".to_string(),
            ));
        }

        let created = self.variables
            .insert(request.into_variable(&identity.username))
            .await?;

        log::info!(
            "📈 변수 생성: {}/{} (owner: {})",
            created.device_id,
            created.variable_name,
            created.username
        );

        Ok(VariableResponse::from(created))
    }

    pub async fn list_variables(&self, identity: &AuthenticatedUser) -> AppResult<Vec<VariableResponse>> {
        let variables = self.variables.list_by_owner(&identity.username).await?;

        Ok(variables.into_iter().map(VariableResponse::from).collect())
    }

    /// 본인 소유 변수를 삭제합니다.
    ///
    /// 다른 사용자의 변수는 존재하지 않는 변수와 같은 404로 보고됩니다.
    pub async fn delete_variable(&self, id: &str, identity: &AuthenticatedUser) -> AppResult<MessageResponse> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("ID de variable inválido".to_string()))?;

        if !self.variables.delete_owned(object_id, &identity.username).await? {
            return Err(AppError::NotFound(
                "Variable no encontrada o no autorizada".to_string(),
            ));
        }

        log::info!("🗑️ 변수 삭제: {} (owner: {})", id, identity.username);

        Ok(MessageResponse::new("Variable eliminada correctamente"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::{ConflictOnInsertVariableStore, MemoryVariableStore};

    fn service() -> VariableService {
        VariableService::new(Arc::new(MemoryVariableStore::default()))
    }

    fn identity(username: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            username: username.to_string(),
            role: "usuario".to_string(),
        }
    }

    fn request(device_id: &str, variable_name: &str) -> CreateVariableRequest {
        CreateVariableRequest {
            device_id: device_id.to_string(),
            variable_name: variable_name.to_string(),
            unit: "°C".to_string(),
            description: String::new(),
            sampling_ms: 1000,
        }
    }

    #[actix_web::test]
    async fn test_create_stamps_owner_and_id() {
        let service = service();

        let created = service.create_variable(request("d1", "temp"), &identity("ana")).await.unwrap();

        assert_eq!(created.username, "ana");
        assert!(ObjectId::parse_str(&created.id).is_ok());
    }

    #[actix_web::test]
    async fn test_same_key_conflicts_per_owner_only() {
        let service = service();
        service.create_variable(request("d1", "temp"), &identity("ana")).await.unwrap();

        let duplicate = service
            .create_variable(request("d1", "temp"), &identity("ana"))
            .await
            .unwrap_err();
        assert!(matches!(duplicate, AppError::ConflictError(_)));

        assert!(service.create_variable(request("d1", "temp"), &identity("bob")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_list_only_returns_own_records() {
        let service = service();
        service.create_variable(request("d1", "temp"), &identity("ana")).await.unwrap();
        service.create_variable(request("d1", "hum"), &identity("ana")).await.unwrap();
        service.create_variable(request("d2", "temp"), &identity("bob")).await.unwrap();

        let listed = service.list_variables(&identity("ana")).await.unwrap();

        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|v| v.username == "ana"));
    }

    #[actix_web::test]
    async fn test_delete_foreign_variable_is_not_found() {
        let service = service();
        let created = service.create_variable(request("d1", "temp"), &identity("ana")).await.unwrap();

        let err = service.delete_variable(&created.id, &identity("bob")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let ok = service.delete_variable(&created.id, &identity("ana")).await.unwrap();
        assert_eq!(ok.message, "Variable eliminada correctamente");
        assert!(service.list_variables(&identity("ana")).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_delete_malformed_id_is_bad_request() {
        let err = service().delete_variable("no-es-un-id", &identity("ana")).await.unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[actix_web::test]
    async fn test_insert_conflict_after_passing_check_is_reported() {
        let service = VariableService::new(Arc::new(ConflictOnInsertVariableStore));

        let err = service.create_variable(request("d1", "temp"), &identity("ana")).await.unwrap_err();

        assert!(matches!(err, AppError::ConflictError(_)));
    }
}
