use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{api_entities::response::Response, app_state::AppState};

/// Runtime information the admin frontend needs before logging in.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ConfigResponse {
    pub version: String,
    pub root_path: String,
    pub media_backend: String,
    pub recommendations_enabled: bool,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Runtime configuration",
    responses(
        (status = 200, body = ConfigResponse)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Response<ConfigResponse> {
    let args = &state.args;
    let media_backend = if args.object_storage.config().is_some() {
        "s3"
    } else {
        "local"
    };
    let recommendations_enabled = args
        .llm
        .openai_api_key
        .as_deref()
        .is_some_and(|key| !key.trim().is_empty());

    Response::OK(ConfigResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: args.server.root_path.clone(),
        media_backend: media_backend.to_string(),
        recommendations_enabled,
    })
}
