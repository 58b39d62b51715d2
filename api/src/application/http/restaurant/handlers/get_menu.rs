use axum::extract::{Path, State};
use menuart_core::domain::restaurant::ports::RestaurantService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::menu_item::response::MenuItemResponse;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub restaurant_slug: String,
    pub items: Vec<MenuItemResponse>,
    pub theme_name: String,
    pub theme_primary: String,
    pub theme_secondary: String,
}

#[utoipa::path(
    get,
    path = "/{slug}/menu",
    tag = "restaurant",
    summary = "Public menu",
    description = "Returns every item of the restaurant with its resolved theme.",
    responses(
        (status = 200, body = MenuResponse),
        (status = 404, description = "Restaurant not found")
    ),
    params(
        ("slug" = String, Path, description = "Restaurant slug"),
    )
)]
pub async fn get_menu(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<MenuResponse>, ApiError> {
    let menu = state.service.get_menu(slug).await.map_err(ApiError::from)?;
    let theme = menu.restaurant.theme();

    Ok(Response::OK(MenuResponse {
        restaurant_slug: menu.restaurant.slug,
        items: menu.items.into_iter().map(MenuItemResponse::from).collect(),
        theme_name: theme.name,
        theme_primary: theme.primary,
        theme_secondary: theme.secondary,
    }))
}
