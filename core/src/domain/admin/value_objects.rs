use crate::domain::common::entities::app_errors::CoreError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// The authenticated caller of an admin endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct RegisterAdminInput {
    pub email: String,
    pub password: String,
}

pub fn normalize_email(raw: &str) -> Result<String, CoreError> {
    let email = raw.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(CoreError::Invalid("a valid email is required".to_string())),
    }
}
