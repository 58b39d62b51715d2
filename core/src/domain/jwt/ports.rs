use crate::domain::{
    common::entities::app_errors::CoreError,
    jwt::entities::{AccessToken, JwtClaim},
};

#[cfg_attr(test, mockall::automock)]
pub trait TokenRepository: Send + Sync {
    fn issue_token(&self, subject: String) -> Result<AccessToken, CoreError>;

    /// Fails with `TokenExpired` or `InvalidToken`.
    fn verify_token(&self, token: String) -> Result<JwtClaim, CoreError>;
}
