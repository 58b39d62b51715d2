use axum::extract::State;
use menuart_core::domain::admin::{ports::AuthService, value_objects::RegisterAdminInput};
use tracing::info;

use crate::application::auth::RequiredIdentity;
use crate::application::http::admin::validators::RegisterAdminValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::{OkResponse, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/register",
    tag = "admin",
    summary = "Register admin",
    description = "Creates another admin account. Requires an admin token.",
    responses(
        (status = 200, body = OkResponse),
        (status = 400, description = "Invalid payload or admin already exists"),
        (status = 401, description = "Missing or invalid token")
    ),
    request_body = RegisterAdminValidator,
    security(("bearer" = []))
)]
pub async fn register(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RegisterAdminValidator>,
) -> Result<Response<OkResponse>, ApiError> {
    let admin = state
        .service
        .register_admin(
            identity,
            RegisterAdminInput {
                email: payload.email,
                password: payload.password,
            },
        )
        .await
        .map_err(ApiError::from)?;

    info!(admin_id = admin.id, "admin registered");
    Ok(Response::OK(OkResponse { ok: true }))
}
