//! 로그인 핸들러

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::LoginRequest;
use crate::services::auth::AuthService;

/// 사용자명/비밀번호 로그인
///
/// 본문은 `application/x-www-form-urlencoded` 형식입니다.
#[post("/login")]
pub async fn login(
    service: web::Data<AuthService>,
    form: web::Form<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    form.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.login(form.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
