//! # 사용자 계정 서비스
//!
//! 회원가입, 프로필 조회, 비밀번호 변경, 계정 삭제를 담당합니다.
//! 저장소([`UserStore`])와 토큰 서비스는 생성 시 주입됩니다.
//!
//! ## 권한 규칙
//!
//! 계정 수정/삭제는 인증된 사용자 본인의 계정에 대해서만 허용됩니다.
//! 권한 검사는 존재 여부 확인보다 먼저 수행되므로, 다른 사용자의 계정에 대한
//! 요청은 그 계정의 존재 여부와 관계없이 403으로 거절됩니다.
//!
//! bcrypt 해싱/검증은 `web::block`으로 블로킹 스레드 풀에서 실행됩니다.

use std::sync::Arc;
use std::time::Instant;

use actix_web::web;
use bcrypt::{hash, verify};

use crate::{
    core::errors::{AppError, AppResult, ErrorContext},
    domain::{
        dto::{
            users::{CreateUserRequest, TokenResponse, UserChanges, UserProfile},
            MessageResponse,
        },
        entities::users::User,
        models::auth::AuthenticatedUser,
    },
    repositories::users::UserStore,
    services::auth::TokenService,
};

const USER_NOT_FOUND: &str = "Usuario no encontrado";

pub struct UserService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    /// 인증된 사용자의 프로필을 조회합니다.
    pub async fn get_current_user_profile(&self, identity: &AuthenticatedUser) -> AppResult<UserProfile> {
        let user = self.users
            .find_by_username(&identity.username)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        Ok(UserProfile::from(user))
    }

    /// 새 사용자를 등록하고 액세스 토큰을 발급합니다.
    ///
    /// 사용자명, 이메일 순으로 중복을 확인합니다. 확인과 삽입 사이의 경쟁은
    /// 유니크 인덱스가 잡아내며 같은 409로 보고됩니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<TokenResponse> {
        let start_time = Instant::now();

        if self.users.find_by_username(&request.username).await?.is_some() {
            log::warn!("⚠️ 회원가입 거절, 사용자명 중복: {}", request.username);
            return Err(AppError::ConflictError("El usuario ya existe".to_string()));
        }

        if self.users.find_by_email(&request.email).await?.is_some() {
            log::warn!("⚠️ 회원가입 거절, 이메일 중복: {}", request.email);
            return Err(AppError::ConflictError(
                "El correo electrónico ya está en uso".to_string(),
            ));
        }

        let password_hash = self.hash_password(request.password).await?;

        let user = User::new(
            request.username,
            password_hash,
            request.email,
            request.name,
            request.country,
            request.city,
            request.company,
            request.role,
        );

        let created = self.users.insert(user).await?;
        let access_token = self.tokens.issue_token(&created.username, created.role.as_deref())?;

        log::info!(
            "✅ 사용자 생성 완료: {} ({:?})",
            created.username,
            start_time.elapsed()
        );

        Ok(TokenResponse::bearer(access_token, UserProfile::from(created)))
    }

    /// 본인 계정을 삭제합니다.
    pub async fn delete_user(&self, username: &str, identity: &AuthenticatedUser) -> AppResult<MessageResponse> {
        if !identity.is(username) {
            log::warn!("⚠️ 계정 삭제 거절: {} → {}", identity.username, username);
            return Err(AppError::AuthorizationError(
                "No tienes permiso para eliminar este usuario".to_string(),
            ));
        }

        if !self.users.delete_by_username(username).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        log::info!("🗑️ 사용자 삭제: {}", username);

        Ok(MessageResponse::new(format!("Usuario '{}' eliminado correctamente", username)))
    }

    /// 본인 계정의 변경 가능한 필드(현재는 비밀번호)를 수정합니다.
    pub async fn update_user(
        &self,
        username: &str,
        changes: UserChanges,
        identity: &AuthenticatedUser,
    ) -> AppResult<MessageResponse> {
        if !identity.is(username) {
            log::warn!("⚠️ 계정 수정 거절: {} → {}", identity.username, username);
            return Err(AppError::AuthorizationError(
                "No tienes permiso para modificar este usuario".to_string(),
            ));
        }

        if self.users.find_by_username(username).await?.is_none() {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        let Some(password) = changes.password else {
            return Err(AppError::ValidationError(
                "No se proporcionaron datos para actualizar".to_string(),
            ));
        };

        let password_hash = self.hash_password(password).await?;

        if !self.users.update_password(username, &password_hash).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        log::info!("🔑 비밀번호 변경: {}", username);

        Ok(MessageResponse::new(format!("Usuario '{}' actualizado correctamente", username)))
    }

    /// 사용자명과 비밀번호를 검증합니다.
    ///
    /// 사용자 부재와 비밀번호 불일치는 같은 메시지로 보고됩니다.
    pub async fn verify_password(&self, username: &str, password: &str) -> AppResult<User> {
        let invalid = || AppError::AuthenticationError("Usuario o contraseña incorrectos".to_string());

        let user = self.users
            .find_by_username(username)
            .await?
            .ok_or_else(invalid)?;

        let verify_start = Instant::now();
        let password = password.to_string();
        let stored_hash = user.password_hash.clone();
        let is_valid = web::block(move || verify(password, &stored_hash))
            .await
            .context("비밀번호 검증 작업 실패")?
            .context("비밀번호 검증 실패")?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(invalid());
        }

        Ok(user)
    }

    async fn hash_password(&self, password: String) -> AppResult<String> {
        let hash_start = Instant::now();
        let cost = self.bcrypt_cost;
        let password_hash = web::block(move || hash(password, cost))
            .await
            .context("비밀번호 해싱 작업 실패")?
            .context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        Ok(password_hash)
    }
}
