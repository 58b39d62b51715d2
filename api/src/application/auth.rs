use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use menuart_core::domain::{
    admin::{ports::AuthService, value_objects::Identity},
    common::entities::app_errors::CoreError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::http::server::app_state::AppState;

#[derive(Debug, Error, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Token not found")]
    TokenNotFound,
}

impl From<CoreError> for AuthError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::TokenExpired => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: i64,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = StatusCode::UNAUTHORIZED;
        let error_response = ErrorResponse {
            code: "E_UNAUTHORIZED".to_string(),
            message: self.to_string(),
            status: status.as_u16() as i64,
        };

        let body = serde_json::to_string(&error_response).unwrap_or_else(|_| {
            r#"{"code":"INTERNAL_SERVER_ERROR","message":"Failed to serialize error response"}"#
                .to_string()
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(body.clone().into())
            .unwrap_or_else(|_| Response::new(body.into()))
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::TokenNotFound)?;

    Ok(bearer.token().to_string())
}

/// Rejects the request with 401 unless it carries a valid admin bearer token.
/// The resolved [`Identity`] is stored in the request extensions.
pub async fn auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let (mut parts, body) = req.into_parts();
    let identity = authorize_parts(&state, &mut parts).await?;

    parts.extensions.insert(identity);
    Ok(next.run(Request::from_parts(parts, body)).await)
}

async fn authorize_parts(state: &AppState, parts: &mut Parts) -> Result<Identity, AuthError> {
    let token = extract_token_from_bearer(parts).await?;

    state.service.authorize_request(token).map_err(|e| {
        debug!("rejected bearer token: {}", e);
        AuthError::from(e)
    })
}

/// Admin identity of the caller.
///
/// Uses the identity set by the [`auth`] middleware when present, otherwise
/// verifies the bearer token itself so that routes sharing a path with public
/// handlers can still require an admin.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        let app_state = AppState::from_ref(state);
        let identity = authorize_parts(&app_state, parts).await?;
        parts.extensions.insert(identity.clone());

        Ok(RequiredIdentity(identity))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[test]
    fn test_core_errors_map_to_auth_errors() {
        assert_eq!(
            AuthError::from(CoreError::TokenExpired),
            AuthError::TokenExpired
        );
        assert_eq!(
            AuthError::from(CoreError::InvalidToken),
            AuthError::InvalidToken
        );
    }

    #[tokio::test]
    async fn test_auth_error_body_matches_error_envelope() {
        let response = AuthError::TokenNotFound.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "E_UNAUTHORIZED");
        assert_eq!(json["message"], "Token not found");
        assert_eq!(json["status"], 401);
    }
}
