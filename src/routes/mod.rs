//! # 라우트 구성
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | GET | `/health` | - |
//! | POST | `/login` | - |
//! | GET | `/users` | 필요 |
//! | POST | `/users` | - |
//! | DELETE, PATCH | `/users/{username}` | 필요 |
//! | GET, POST | `/variables` | 필요 |
//! | DELETE | `/variables/{id}` | 필요 |
//!
//! 추출기 실패(잘못된 JSON, 폼, 경로)는 `AppError::ValidationError`로 변환되어
//! 다른 에러와 같은 `{"detail": ...}` 형식으로 응답됩니다.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(health_check);

    cfg.service(handlers::auth::login);

    configure_user_routes(cfg);
    configure_variable_routes(cfg);
}

fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::FormConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }));
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    // 회원가입은 익명 허용, 나머지는 핸들러의 AuthenticatedUser 추출에서 401
    cfg.service(
        web::scope("/users")
            .wrap(AuthMiddleware::optional())
            .service(handlers::users::get_current_user)
            .service(handlers::users::create_user)
            .service(handlers::users::delete_user)
            .service(handlers::users::update_user)
    );
}

fn configure_variable_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/variables")
            .wrap(AuthMiddleware::required())
            .service(handlers::variables::create_variable)
            .service(handlers::variables::list_variables)
            .service(handlers::variables::delete_variable)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "authentication": "JWT (HS256)"
        }
    }))
}
