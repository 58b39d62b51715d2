use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, crypto::ports::HasherRepository};

#[derive(Debug, Clone, Default)]
pub struct Argon2HasherRepository;

impl Argon2HasherRepository {
    pub fn new() -> Self {
        Self
    }
}

impl HasherRepository for Argon2HasherRepository {
    async fn hash_password(&self, password: String) -> Result<String, CoreError> {
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| {
                    error!("Failed to hash password: {}", e);
                    CoreError::HashPasswordError
                })
        })
        .await
        .map_err(|e| {
            error!("Password hashing task failed: {}", e);
            CoreError::InternalServerError
        })?
    }

    async fn verify_password(
        &self,
        password: String,
        hashed_password: String,
    ) -> Result<bool, CoreError> {
        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&hashed_password).map_err(|e| {
                error!("Stored password hash is malformed: {}", e);
                CoreError::HashPasswordError
            })?;

            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|e| {
            error!("Password verification task failed: {}", e);
            CoreError::InternalServerError
        })?
    }
}
