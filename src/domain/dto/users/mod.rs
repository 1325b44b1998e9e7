//! # 사용자 DTO
//!
//! | 엔드포인트 | 요청 | 응답 |
//! |-----------|------|------|
//! | `POST /login` | [`LoginRequest`] (form) | [`TokenResponse`] |
//! | `GET /users` | - | [`UserProfile`] |
//! | `POST /users` | [`CreateUserRequest`] | [`TokenResponse`] |
//! | `PATCH /users/{username}` | [`UpdateUserRequest`] | [`MessageResponse`](super::MessageResponse) |
//! | `DELETE /users/{username}` | - | [`MessageResponse`](super::MessageResponse) |

pub mod request;
pub mod response;

pub use request::{CreateUserRequest, LoginRequest, UpdateUserRequest, UserChanges};
pub use response::{TokenResponse, UserProfile};
