//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 컬렉션은 `async_trait` 저장소 trait([`UserStore`], [`VariableStore`])과
//! MongoDB 구현체로 나뉩니다. 서비스는 trait 객체(`Arc<dyn UserStore>`)만 알고,
//! 구현체는 `main`에서 `Arc<Database>`를 주입받아 생성됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserStore};
//!
//! let users: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(database.clone()));
//! let user = users.find_by_username("jperez").await?;
//! ```

pub mod users;
pub mod variables;

#[cfg(test)]
pub mod memory;

pub use users::{MongoUserRepository, UserStore};
pub use variables::{MongoVariableRepository, VariableStore};

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};

use crate::core::errors::AppError;

/// MongoDB 중복 키 에러 코드 (E11000)
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 드라이버 에러를 [`AppError`]로 변환합니다.
///
/// - 서버 선택 실패, I/O 오류 → `DatabaseUnavailable`
/// - 중복 키(E11000) → `ConflictError(conflict_message)`
/// - 그 외 → `DatabaseError`
pub(crate) fn map_mongo_error(err: MongoError, conflict_message: &str) -> AppError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            log::error!("❌ MongoDB 연결 불가: {}", err);
            AppError::DatabaseUnavailable("Base de datos no inicializada".to_string())
        }
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            AppError::ConflictError(conflict_message.to_string())
        }
        _ => AppError::DatabaseError(err.to_string()),
    }
}

/// 중복 키(E11000) 쓰기 에러라면 서버가 보낸 메시지를 반환합니다.
///
/// 메시지에는 위반된 인덱스 이름과 키가 포함됩니다.
/// (`E11000 duplicate key error collection: db.usuarios index: email_unique dup key: ...`)
pub(crate) fn duplicate_key_message(err: &MongoError) -> Option<&str> {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            Some(write_error.message.as_str())
        }
        _ => None,
    }
}

/// 읽기 연산용 변환. 읽기에서는 중복 키가 발생하지 않습니다.
pub(crate) fn map_read_error(err: MongoError) -> AppError {
    map_mongo_error(err, "Conflicto de datos")
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_io_error_is_database_unavailable() {
        let err = MongoError::from(ErrorKind::Io(Arc::new(io::Error::other("connection reset"))));

        let mapped = map_mongo_error(err, "El usuario ya existe");

        assert!(matches!(mapped, AppError::DatabaseUnavailable(msg) if msg == "Base de datos no inicializada"));
    }

    #[test]
    fn test_other_driver_error_is_database_error() {
        let ser_error = mongodb::bson::to_document(&1i32).unwrap_err();
        let err = MongoError::from(ErrorKind::BsonSerialization(ser_error));

        assert!(duplicate_key_message(&err).is_none());
        assert!(matches!(map_read_error(err), AppError::DatabaseError(_)));
    }
}
