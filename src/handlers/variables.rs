//! 변수 레지스트리 핸들러
//!
//! `/variables` 스코프는 필수 인증으로 감싸져 있습니다.

use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::variables::CreateVariableRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::variables::VariableService;

#[post("")]
pub async fn create_variable(
    service: web::Data<VariableService>,
    user: AuthenticatedUser,
    payload: web::Json<CreateVariableRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let variable = service.create_variable(payload.into_inner(), &user).await?;

    Ok(HttpResponse::Created().json(variable))
}

#[get("")]
pub async fn list_variables(
    service: web::Data<VariableService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let variables = service.list_variables(&user).await?;

    Ok(HttpResponse::Ok().json(variables))
}

#[delete("/{id}")]
pub async fn delete_variable(
    service: web::Data<VariableService>,
    user: AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = service.delete_variable(&id, &user).await?;

    Ok(HttpResponse::Ok().json(response))
}
