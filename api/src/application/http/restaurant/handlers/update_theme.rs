use axum::extract::{Path, State};
use menuart_core::domain::restaurant::{ports::RestaurantService, value_objects::UpdateThemeInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::restaurant::validators::UpdateThemeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub theme_name: String,
    pub theme_primary: String,
    pub theme_secondary: String,
}

#[utoipa::path(
    put,
    path = "/{slug}/theme",
    tag = "restaurant",
    summary = "Update theme",
    description = "Sets the menu theme. Blank values fall back to the default theme.",
    responses(
        (status = 200, body = ThemeResponse),
        (status = 404, description = "Restaurant not found")
    ),
    params(
        ("slug" = String, Path, description = "Restaurant slug"),
    ),
    request_body = UpdateThemeValidator,
    security(("bearer" = []))
)]
pub async fn update_theme(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateThemeValidator>,
) -> Result<Response<ThemeResponse>, ApiError> {
    let restaurant = state
        .service
        .update_theme(
            identity,
            UpdateThemeInput {
                restaurant_slug: slug,
                name: payload.name,
                primary: payload.primary,
                secondary: payload.secondary,
            },
        )
        .await
        .map_err(ApiError::from)?;
    let theme = restaurant.theme();

    Ok(Response::OK(ThemeResponse {
        theme_name: theme.name,
        theme_primary: theme.primary,
        theme_secondary: theme.secondary,
    }))
}
