//! 사용자 계정 핸들러
//!
//! `/users` 스코프는 선택적 인증으로 감싸져 있습니다. 회원가입(`POST`)만 익명으로
//! 허용되고, 나머지는 [`AuthenticatedUser`] 추출 단계에서 401로 거절됩니다.

use actix_web::{delete, get, patch, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::UserService;

/// 내 프로필 조회
#[get("")]
pub async fn get_current_user(
    service: web::Data<UserService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = service.get_current_user_profile(&user).await?;

    Ok(HttpResponse::Ok().json(profile))
}

/// 회원가입
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[delete("/{username}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user: AuthenticatedUser,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = service.delete_user(&username, &user).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[patch("/{username}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user: AuthenticatedUser,
    username: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service
        .update_user(&username, payload.into_inner().into(), &user)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
