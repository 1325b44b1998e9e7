//! 장치 변수 엔티티

pub mod variable;

pub use variable::Variable;
