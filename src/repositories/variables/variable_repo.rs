//! # 변수 리포지토리 구현
//!
//! `variables` 컬렉션의 데이터 액세스를 담당합니다.
//! 모든 조회/삭제는 소유자(`username`) 조건을 포함하므로,
//! 다른 사용자의 레코드는 존재하지 않는 것과 구분되지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::variables::Variable,
    repositories::{map_mongo_error, map_read_error},
};

/// 변수 컬렉션 이름
pub const VARIABLES_COLLECTION: &str = "variables";

const DUPLICATE_VARIABLE: &str = "Ya existe una variable con ese nombre para ese dispositivo";

/// 변수 저장소 추상화
#[async_trait]
pub trait VariableStore: Send + Sync {
    /// 유니크 키 `(device_id, variable_name, username)`로 조회합니다.
    async fn find_by_key(
        &self,
        device_id: &str,
        variable_name: &str,
        username: &str,
    ) -> AppResult<Option<Variable>>;

    /// 변수를 저장하고, 할당된 `_id`가 채워진 변수를 반환합니다.
    async fn insert(&self, variable: Variable) -> AppResult<Variable>;

    /// 소유자의 모든 변수를 저장소 순서대로 반환합니다.
    async fn list_by_owner(&self, username: &str) -> AppResult<Vec<Variable>>;

    /// `_id`와 소유자가 모두 일치하는 변수를 삭제합니다. 삭제된 문서가 없으면 `false`.
    async fn delete_owned(&self, id: ObjectId, username: &str) -> AppResult<bool>;
}

/// MongoDB 기반 변수 리포지토리
pub struct MongoVariableRepository {
    db: Arc<Database>,
}

impl MongoVariableRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Variable> {
        self.db.get_database().collection::<Variable>(VARIABLES_COLLECTION)
    }

    /// `(device_id, variable_name, username)` 복합 유니크 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let key_index = IndexModel::builder()
            .keys(doc! { "device_id": 1, "variable_name": 1, "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("device_variable_owner_unique".to_string())
                .build())
            .build();

        // 소유자별 목록 조회용
        let owner_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .name("owner".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([key_index, owner_index])
            .await
            .map_err(map_read_error)?;

        Ok(())
    }
}

#[async_trait]
impl VariableStore for MongoVariableRepository {
    async fn find_by_key(
        &self,
        device_id: &str,
        variable_name: &str,
        username: &str,
    ) -> AppResult<Option<Variable>> {
        self.collection()
            .find_one(doc! {
                "device_id": device_id,
                "variable_name": variable_name,
                "username": username,
            })
            .await
            .map_err(map_read_error)
    }

    async fn insert(&self, mut variable: Variable) -> AppResult<Variable> {
        let result = self.collection()
            .insert_one(&variable)
            .await
            .map_err(|e| map_mongo_error(e, DUPLICATE_VARIABLE))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("insert_one이 ObjectId가 아닌 _id를 반환했습니다".to_string())
        })?;
        variable.id = Some(id);

        Ok(variable)
    }

    async fn list_by_owner(&self, username: &str) -> AppResult<Vec<Variable>> {
        let cursor = self.collection()
            .find(doc! { "username": username })
            .await
            .map_err(map_read_error)?;

        cursor.try_collect::<Vec<Variable>>().await.map_err(map_read_error)
    }

    async fn delete_owned(&self, id: ObjectId, username: &str) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": id, "username": username })
            .await
            .map_err(map_read_error)?;

        Ok(result.deleted_count > 0)
    }
}
