//! # Application Error Handling System
//!
//! 백엔드 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! 모든 서비스/리포지토리 함수는 [`AppResult`]를 반환하며, 핸들러 경계에서
//! `actix_web::ResponseError` 구현을 통해 HTTP 응답으로 자동 변환됩니다.
//!
//! ## 응답 형식
//!
//! 모든 에러 응답은 상태 코드와 운영자 언어(스페인어)로 작성된
//! `detail` 문자열 하나로 구성됩니다.
//!
//! ```json
//! { "detail": "El usuario ya existe" }
//! ```
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | 상태 코드 |
//! |------|-----------|
//! | `ValidationError` | 400 Bad Request |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `AuthorizationError` | 403 Forbidden |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` | 409 Conflict |
//! | `DatabaseUnavailable`, `DatabaseError`, `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find_profile(&self, username: &str) -> AppResult<UserProfile> {
//!     let user = self.users
//!         .find_by_username(username)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;
//!
//!     Ok(UserProfile::from(user))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 클라이언트에게 그대로 전달될 메시지를 담습니다.
/// `Display` 구현은 로그용 접두사를 포함하고, 응답 본문에는 [`AppError::detail`]만 사용됩니다.
///
/// ## 에러 카테고리
///
/// ### 1. 인프라 계층 에러
/// - `DatabaseUnavailable`: MongoDB 서버에 도달할 수 없음 (서버 선택 실패, I/O 오류)
/// - `DatabaseError`: 그 밖의 드라이버 오류
///
/// ### 2. 비즈니스 계층 에러
/// - `ValidationError`: 입력값 검증 실패, 빈 패치, 잘못된 ObjectId
/// - `ConflictError`: 유니크 필드 중복 (사용자명, 이메일, 변수 키)
/// - `NotFound`: 요청된 레코드가 존재하지 않음
///
/// ### 3. 보안 계층 에러
/// - `AuthenticationError`: 토큰 누락/만료/위조, 로그인 실패
/// - `AuthorizationError`: 다른 사용자의 계정에 대한 작업
///
/// ### 4. 시스템 계층 에러
/// - `InternalError`: 해싱, 토큰 서명 등 예상하지 못한 오류
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 연결 불가 (500)
    ///
    /// 저장소 핸들이 준비되지 않았거나 서버에 도달할 수 없는 경우입니다.
    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(String),

    /// 데이터베이스 관련 에러 (500)
    ///
    /// # 예제
    /// ```rust,ignore
    /// collection.insert_one(&variable).await
    ///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 (404)
    ///
    /// 소유자가 다른 레코드에 대한 접근도 이 변형으로 보고됩니다.
    /// 호출자는 "존재하지 않음"과 "권한 없음"을 구분할 수 없습니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409)
    ///
    /// # 발생 시나리오
    /// - 이미 사용 중인 사용자명 또는 이메일로 회원가입
    /// - 같은 소유자의 동일한 `(device_id, variable_name)` 변수 생성
    /// - 동시 삽입으로 인한 유니크 인덱스 위반 (E11000)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 전달할 메시지를 반환합니다.
    ///
    /// 5xx 에러는 내부 정보를 노출하지 않도록 고정된 메시지로 대체됩니다.
    /// `DatabaseUnavailable`은 원래 메시지를 그대로 사용합니다.
    pub fn detail(&self) -> &str {
        match self {
            AppError::DatabaseUnavailable(msg)
            | AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg) => msg,
            AppError::DatabaseError(_) | AppError::InternalError(_) => "Error interno del servidor",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 원본 메시지를 남기고, 클라이언트에는 [`AppError::detail`]만 보냅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "detail": self.detail()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let password_hash = bcrypt::hash(&password, cost)
///     .context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
