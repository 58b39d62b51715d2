use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use tracing::{debug, error};

use crate::domain::{
    common::entities::app_errors::CoreError,
    jwt::{
        entities::{AccessToken, JwtClaim, TOKEN_TYPE_BEARER},
        ports::TokenRepository,
    },
};

/// HS256 tokens signed with a shared secret.
#[derive(Clone)]
pub struct JsonWebTokenRepository {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expire_minutes: i64,
}

impl JsonWebTokenRepository {
    pub fn new(secret: &str, expire_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expire_minutes,
        }
    }
}

impl TokenRepository for JsonWebTokenRepository {
    fn issue_token(&self, subject: String) -> Result<AccessToken, CoreError> {
        let now = Utc::now();
        let expires_at = now + Duration::minutes(self.expire_minutes);

        let claim = JwtClaim {
            sub: subject,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claim, &self.encoding_key)
            .map_err(|e| {
                error!("Failed to sign access token: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(AccessToken {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_at,
        })
    }

    fn verify_token(&self, token: String) -> Result<JwtClaim, CoreError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<JwtClaim>(&token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => CoreError::TokenExpired,
                _ => {
                    debug!("Rejected access token: {}", e);
                    CoreError::InvalidToken
                }
            })
    }
}
