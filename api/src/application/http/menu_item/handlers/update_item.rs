use axum::extract::{Multipart, Path, State};
use menuart_core::domain::{
    admin::value_objects::Identity,
    menu_item::{
        ports::MenuItemService,
        value_objects::{ItemTarget, UpdateMenuItemInput},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::menu_item::response::MenuItemResponse;
use crate::application::http::menu_item::validators::{MenuItemForm, MenuItemUpload};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateItemResponse {
    pub item: MenuItemResponse,
}

#[utoipa::path(
    put,
    path = "/restaurants/{slug}/items/{item_id}",
    tag = "menu_item",
    summary = "Update menu item",
    description = "Replaces the item fields. Image and model are only replaced when a new file is sent.",
    responses(
        (status = 200, body = UpdateItemResponse),
        (status = 400, description = "Invalid form"),
        (status = 404, description = "Restaurant not found or item not in restaurant"),
        (status = 413, description = "File too large")
    ),
    params(
        ("slug" = String, Path, description = "Restaurant slug"),
        ("item_id" = i64, Path, description = "Item id"),
    ),
    request_body(content = MenuItemUpload, content_type = "multipart/form-data"),
    security(("bearer" = []))
)]
pub async fn update_item(
    Path((slug, item_id)): Path<(String, i64)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    multipart: Multipart,
) -> Result<Response<UpdateItemResponse>, ApiError> {
    let target = ItemTarget::Scoped {
        restaurant_slug: slug,
        item_id,
    };
    update(&state, identity, target, multipart).await
}

#[utoipa::path(
    put,
    path = "/items/{item_id}",
    tag = "menu_item",
    summary = "Update menu item by id",
    description = "Same as the restaurant-scoped update, addressed by item id only. Also served at `/menu/{item_id}`.",
    responses(
        (status = 200, body = UpdateItemResponse),
        (status = 404, description = "Item not found"),
        (status = 413, description = "File too large")
    ),
    params(
        ("item_id" = i64, Path, description = "Item id"),
    ),
    request_body(content = MenuItemUpload, content_type = "multipart/form-data"),
    security(("bearer" = []))
)]
pub async fn update_item_by_id(
    Path(item_id): Path<i64>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    multipart: Multipart,
) -> Result<Response<UpdateItemResponse>, ApiError> {
    update(&state, identity, ItemTarget::Global { item_id }, multipart).await
}

async fn update(
    state: &AppState,
    identity: Identity,
    target: ItemTarget,
    multipart: Multipart,
) -> Result<Response<UpdateItemResponse>, ApiError> {
    let form = MenuItemForm::from_multipart(multipart).await?.into_parts()?;

    let item = state
        .service
        .update_item(
            identity,
            UpdateMenuItemInput {
                target,
                fields: form.fields,
                image: form.image,
                model: form.model,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateItemResponse {
        item: MenuItemResponse::from(item),
    }))
}
