//! 변수 레지스트리 DTO

pub mod request;
pub mod response;

pub use request::CreateVariableRequest;
pub use response::VariableResponse;
