//! # Service Layer
//!
//! 비즈니스 규칙을 담당하는 서비스 계층입니다.
//! 서비스는 `main`에서 한 번 생성되어 `web::Data`로 핸들러에 공유되며,
//! 저장소는 trait 객체로 주입됩니다.
//!
//! ```text
//! handlers ──▶ UserService ─────▶ Arc<dyn UserStore>
//!          ├─▶ VariableService ─▶ Arc<dyn VariableStore>
//!          └─▶ AuthService ─────▶ UserService + TokenService
//! ```

pub mod users;
pub mod auth;
pub mod variables;
