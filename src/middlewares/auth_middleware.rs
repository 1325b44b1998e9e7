//! # 인증 미들웨어
//!
//! `Authorization: Bearer <jwt>` 헤더를 검증하고, 성공하면 [`AuthenticatedUser`]를
//! 요청 확장에 저장합니다. 핸들러는 `AuthenticatedUser`를 인자로 선언해 꺼내 씁니다.
//!
//! ## 모드
//!
//! | 모드 | 토큰 없음/무효 | 토큰 유효 |
//! |------|---------------|-----------|
//! | [`AuthMiddleware::required`] | 401 `{"detail": ...}` | 사용자 저장 후 진행 |
//! | [`AuthMiddleware::optional`] | 사용자 없이 진행 | 사용자 저장 후 진행 |
//!
//! `optional` 스코프 안에서 신원이 필요한 핸들러는 추출기 단계에서 401을 반환합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! web::scope("/variables")
//!     .wrap(AuthMiddleware::required())
//!     .route("", web::get().to(list_variables))
//! ```
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어 팩토리
///
/// 토큰 검증에는 앱 데이터로 등록된 `web::Data<TokenService>`를 사용합니다.
pub struct AuthMiddleware {
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 인증 필수
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 인증 선택 (토큰이 있으면 검증)
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::TokenService;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.username)
    }

    async fn maybe_user(user: Option<AuthenticatedUser>) -> HttpResponse {
        HttpResponse::Ok().body(user.map(|u| u.username).unwrap_or_else(|| "anon".to_string()))
    }

    fn tokens() -> web::Data<TokenService> {
        web::Data::new(TokenService::new("test-secret", 1))
    }

    #[actix_web::test]
    async fn test_required_rejects_missing_token() {
        let app = test::init_service(
            App::new()
                .app_data(tokens())
                .service(web::scope("/p").wrap(AuthMiddleware::required()).route("", web::get().to(whoami))),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/p").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["detail"].is_string());
    }

    #[actix_web::test]
    async fn test_required_accepts_valid_token() {
        let data = tokens();
        let token = data.issue_token("ana", None).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(data)
                .service(web::scope("/p").wrap(AuthMiddleware::required()).route("", web::get().to(whoami))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/p")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "ana");
    }

    #[actix_web::test]
    async fn test_optional_lets_anonymous_through() {
        let app = test::init_service(
            App::new()
                .app_data(tokens())
                .service(web::scope("/o").wrap(AuthMiddleware::optional()).route("", web::get().to(maybe_user))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/o")
            .insert_header(("Authorization", "Bearer basura"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "anon");
    }
}
