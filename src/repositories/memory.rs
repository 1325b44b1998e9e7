//! 테스트용 메모리 저장소
//!
//! MongoDB 구현과 같은 유니크 제약을 흉내 내며, 서비스/핸들러 테스트에서 사용됩니다.
//! `ConflictOnInsert*` 저장소는 존재 확인을 통과한 뒤 유니크 인덱스에 걸리는
//! 동시 삽입 상황을 재현합니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::{users::User, variables::Variable},
    repositories::{UserStore, VariableStore},
};

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username || u.email == user.email) {
            return Err(AppError::ConflictError("El usuario ya existe".to_string()));
        }
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn update_password(&self, username: &str, password_hash: &str) -> AppResult<bool> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.username == username) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_username(&self, username: &str) -> AppResult<bool> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.username != username);
        Ok(users.len() < before)
    }
}

/// 유니크 키 `(device_id, variable_name, username)` 비교
fn same_key(variable: &Variable, device_id: &str, variable_name: &str, username: &str) -> bool {
    variable.device_id == device_id
        && variable.variable_name == variable_name
        && variable.username == username
}

#[derive(Default)]
pub struct MemoryVariableStore {
    variables: Mutex<Vec<Variable>>,
}

#[async_trait]
impl VariableStore for MemoryVariableStore {
    async fn find_by_key(
        &self,
        device_id: &str,
        variable_name: &str,
        username: &str,
    ) -> AppResult<Option<Variable>> {
        let variables = self.variables.lock().unwrap();
        Ok(variables
            .iter()
            .find(|v| same_key(v, device_id, variable_name, username))
            .cloned())
    }

    async fn insert(&self, mut variable: Variable) -> AppResult<Variable> {
        let mut variables = self.variables.lock().unwrap();
        if variables
            .iter()
            .any(|v| same_key(v, &variable.device_id, &variable.variable_name, &variable.username))
        {
            return Err(AppError::ConflictError(
                "Ya existe una variable con ese nombre para ese dispositivo".to_string(),
            ));
        }
        variable.id = Some(ObjectId::new());
        variables.push(variable.clone());
        Ok(variable)
    }

    async fn list_by_owner(&self, username: &str) -> AppResult<Vec<Variable>> {
        let variables = self.variables.lock().unwrap();
        Ok(variables.iter().filter(|v| v.username == username).cloned().collect())
    }

    async fn delete_owned(&self, id: ObjectId, username: &str) -> AppResult<bool> {
        let mut variables = self.variables.lock().unwrap();
        let before = variables.len();
        variables.retain(|v| !(v.id == Some(id) && v.username == username));
        Ok(variables.len() < before)
    }
}

/// 조회는 항상 비어 있고, 삽입은 유니크 인덱스 위반으로 실패하는 사용자 저장소
pub struct ConflictOnInsertUserStore;

#[async_trait]
impl UserStore for ConflictOnInsertUserStore {
    async fn find_by_username(&self, _username: &str) -> AppResult<Option<User>> {
        Ok(None)
    }

    async fn find_by_email(&self, _email: &str) -> AppResult<Option<User>> {
        Ok(None)
    }

    async fn insert(&self, _user: User) -> AppResult<User> {
        Err(AppError::ConflictError("El correo electrónico ya está en uso".to_string()))
    }

    async fn update_password(&self, _username: &str, _password_hash: &str) -> AppResult<bool> {
        Ok(false)
    }

    async fn delete_by_username(&self, _username: &str) -> AppResult<bool> {
        Ok(false)
    }
}

/// 조회는 항상 비어 있고, 삽입은 유니크 인덱스 위반으로 실패하는 변수 저장소
pub struct ConflictOnInsertVariableStore;

#[async_trait]
impl VariableStore for ConflictOnInsertVariableStore {
    async fn find_by_key(
        &self,
        _device_id: &str,
        _variable_name: &str,
        _username: &str,
    ) -> AppResult<Option<Variable>> {
        Ok(None)
    }

    async fn insert(&self, _variable: Variable) -> AppResult<Variable> {
        Err(AppError::ConflictError(
            "Ya existe una variable con ese nombre para ese dispositivo".to_string(),
        ))
    }

    async fn list_by_owner(&self, _username: &str) -> AppResult<Vec<Variable>> {
        Ok(Vec::new())
    }

    async fn delete_owned(&self, _id: ObjectId, _username: &str) -> AppResult<bool> {
        Ok(false)
    }
}
