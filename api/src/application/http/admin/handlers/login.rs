use axum::extract::State;
use menuart_core::domain::admin::{ports::AuthService, value_objects::LoginInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::admin::validators::LoginValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "admin",
    summary = "Admin login",
    description = "Exchanges admin credentials for a bearer token.",
    responses(
        (status = 200, body = LoginResponse),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Invalid credentials")
    ),
    request_body = LoginValidator
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<LoginResponse>, ApiError> {
    let token = state
        .service
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse {
        access_token: token.access_token,
        token_type: token.token_type,
    }))
}
