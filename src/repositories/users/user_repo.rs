//! # 사용자 리포지토리 구현
//!
//! `usuarios` 컬렉션의 데이터 액세스를 담당합니다.
//!
//! ## 특징
//!
//! - **명시적 의존성 주입**: 전역 핸들 대신 생성 시 `Arc<Database>`를 받음
//! - **데이터 무결성**: `username`, `email` 유니크 인덱스로 동시 가입 경쟁 차단
//! - **삽입 ID 반영**: [`UserStore::insert`]는 저장소가 할당한 `_id`를 채워 반환

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    bson::doc,
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::User,
    repositories::{duplicate_key_message, map_mongo_error, map_read_error},
};

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "usuarios";

const DUPLICATE_USERNAME: &str = "El usuario ya existe";
const DUPLICATE_EMAIL: &str = "El correo electrónico ya está en uso";

const EMAIL_INDEX: &str = "email_unique";

/// 위반된 유니크 인덱스 이름으로 충돌 메시지를 고릅니다.
fn user_conflict_message(duplicate_message: &str) -> &'static str {
    if duplicate_message.contains(&format!("index: {}", EMAIL_INDEX)) {
        DUPLICATE_EMAIL
    } else {
        DUPLICATE_USERNAME
    }
}

/// 사용자 저장소 추상화
///
/// 서비스 계층은 이 trait에만 의존합니다. 테스트에서는 메모리 구현으로 대체됩니다.
///
/// ## 에러 처리
///
/// - **DatabaseUnavailable**: MongoDB에 도달할 수 없음
/// - **DatabaseError**: 쿼리 실행 오류
/// - **ConflictError**: 유니크 인덱스 위반 (사용자명/이메일 중복)
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 사용자를 저장하고, 할당된 `_id`가 채워진 사용자를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 비밀번호 해시를 교체합니다. 일치하는 문서가 없으면 `false`.
    async fn update_password(&self, username: &str, password_hash: &str) -> AppResult<bool>;

    /// 사용자를 삭제합니다. 삭제된 문서가 없으면 `false`.
    async fn delete_by_username(&self, username: &str) -> AppResult<bool>;
}

/// MongoDB 기반 사용자 리포지토리
pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    /// `username`, `email` 유니크 인덱스를 생성합니다.
    ///
    /// 이미 존재하는 인덱스는 MongoDB가 그대로 둡니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(EMAIL_INDEX.to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([username_index, email_index])
            .await
            .map_err(map_read_error)?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(map_read_error)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(map_read_error)
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                let conflict = duplicate_key_message(&e)
                    .map(user_conflict_message)
                    .unwrap_or(DUPLICATE_USERNAME);
                map_mongo_error(e, conflict)
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("insert_one이 ObjectId가 아닌 _id를 반환했습니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn update_password(&self, username: &str, password_hash: &str) -> AppResult<bool> {
        let result = self.collection()
            .update_one(
                doc! { "username": username },
                doc! { "$set": { "password": password_hash } },
            )
            .await
            .map_err(map_read_error)?;

        Ok(result.matched_count > 0)
    }

    async fn delete_by_username(&self, username: &str) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "username": username })
            .await
            .map_err(map_read_error)?;

        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_follows_violated_index() {
        let email = "E11000 duplicate key error collection: iot_platform.usuarios index: email_unique dup key: { email: \"ana@example.com\" }";
        let username = "E11000 duplicate key error collection: iot_platform.usuarios index: username_unique dup key: { username: \"email_fan\" }";

        assert_eq!(user_conflict_message(email), DUPLICATE_EMAIL);
        assert_eq!(user_conflict_message(username), DUPLICATE_USERNAME);
    }
}
