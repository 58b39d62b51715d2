use axum::extract::{Path, State};
use menuart_core::domain::category::{ports::CategoryService, value_objects::DeleteCategoryInput};

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::{OkResponse, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/{category_id}",
    tag = "category",
    summary = "Delete category",
    description = "Deletes a category and its subcategories. Items keep their data but lose the label.",
    responses(
        (status = 200, body = OkResponse),
        (status = 404, description = "Restaurant or category not found")
    ),
    params(
        ("slug" = String, Path, description = "Restaurant slug"),
        ("category_id" = i64, Path, description = "Category id"),
    ),
    security(("bearer" = []))
)]
pub async fn delete_category(
    Path((slug, category_id)): Path<(String, i64)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<OkResponse>, ApiError> {
    state
        .service
        .delete_category(
            identity,
            DeleteCategoryInput {
                restaurant_slug: slug,
                category_id,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(OkResponse { ok: true }))
}
