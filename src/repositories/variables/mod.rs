//! 변수 레지스트리 데이터 액세스 계층

pub mod variable_repo;

pub use variable_repo::{MongoVariableRepository, VariableStore};
