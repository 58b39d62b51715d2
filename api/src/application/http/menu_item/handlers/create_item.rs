use axum::extract::{Multipart, Path, State};
use menuart_core::domain::menu_item::{ports::MenuItemService, value_objects::CreateMenuItemInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::menu_item::validators::{MenuItemForm, MenuItemUpload};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CreateItemResponse {
    pub id: i64,
}

#[utoipa::path(
    post,
    path = "/restaurants/{slug}/items",
    tag = "menu_item",
    summary = "Create menu item",
    description = "Creates an item from a multipart form. Category and subcategory labels are created on first use.",
    responses(
        (status = 200, body = CreateItemResponse),
        (status = 400, description = "Invalid form"),
        (status = 404, description = "Restaurant not found"),
        (status = 413, description = "File too large")
    ),
    params(
        ("slug" = String, Path, description = "Restaurant slug"),
    ),
    request_body(content = MenuItemUpload, content_type = "multipart/form-data"),
    security(("bearer" = []))
)]
pub async fn create_item(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    multipart: Multipart,
) -> Result<Response<CreateItemResponse>, ApiError> {
    let form = MenuItemForm::from_multipart(multipart).await?.into_parts()?;

    let item = state
        .service
        .create_item(
            identity,
            CreateMenuItemInput {
                restaurant_slug: slug,
                fields: form.fields,
                image: form.image,
                model: form.model,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CreateItemResponse { id: item.id }))
}
