//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`]는 `usuarios` 컬렉션에 대한 연산을 정의하고,
//! [`MongoUserRepository`]가 이를 MongoDB로 구현합니다.

pub mod user_repo;

pub use user_repo::{MongoUserRepository, UserStore};
