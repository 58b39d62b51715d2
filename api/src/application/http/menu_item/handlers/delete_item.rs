use axum::extract::{Path, State};
use menuart_core::domain::menu_item::{ports::MenuItemService, value_objects::ItemTarget};

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::{OkResponse, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/restaurants/{slug}/items/{item_id}",
    tag = "menu_item",
    summary = "Delete menu item",
    responses(
        (status = 200, body = OkResponse),
        (status = 404, description = "Restaurant not found or item not in restaurant")
    ),
    params(
        ("slug" = String, Path, description = "Restaurant slug"),
        ("item_id" = i64, Path, description = "Item id"),
    ),
    security(("bearer" = []))
)]
pub async fn delete_item(
    Path((slug, item_id)): Path<(String, i64)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<OkResponse>, ApiError> {
    state
        .service
        .delete_item(
            identity,
            ItemTarget::Scoped {
                restaurant_slug: slug,
                item_id,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(OkResponse { ok: true }))
}

#[utoipa::path(
    delete,
    path = "/items/{item_id}",
    tag = "menu_item",
    summary = "Delete menu item by id",
    description = "Also served at `/menu/{item_id}`.",
    responses(
        (status = 200, body = OkResponse),
        (status = 404, description = "Item not found")
    ),
    params(
        ("item_id" = i64, Path, description = "Item id"),
    ),
    security(("bearer" = []))
)]
pub async fn delete_item_by_id(
    Path(item_id): Path<i64>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<OkResponse>, ApiError> {
    state
        .service
        .delete_item(identity, ItemTarget::Global { item_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(OkResponse { ok: true }))
}
