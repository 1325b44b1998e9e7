//! HTTP 핸들러
//!
//! 핸들러는 요청 추출, 입력 검증, 서비스 호출, 응답 직렬화만 담당합니다.
//! 서비스는 `web::Data`로 주입되고, 신원은 [`AuthenticatedUser`] 추출기로 얻습니다.
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

pub mod users;
pub mod variables;
pub mod auth;
