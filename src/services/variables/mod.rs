pub mod variable_service;

pub use variable_service::VariableService;
