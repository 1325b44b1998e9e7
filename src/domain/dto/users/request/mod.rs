//! 사용자 요청 DTO

pub mod create_user;
pub mod update_user;
pub mod auth_request;

pub use create_user::CreateUserRequest;
pub use update_user::{UpdateUserRequest, UserChanges};
pub use auth_request::LoginRequest;
