use axum::extract::{Path, State};
use menuart_core::domain::category::{entities::Category, ports::CategoryService};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "",
    tag = "category",
    summary = "List categories",
    description = "Categories of a restaurant, each with its subcategories.",
    responses(
        (status = 200, body = Vec<Category>),
        (status = 404, description = "Restaurant not found")
    ),
    params(
        ("slug" = String, Path, description = "Restaurant slug"),
    )
)]
pub async fn list_categories(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Vec<Category>>, ApiError> {
    let categories = state
        .service
        .list_categories(slug)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(categories))
}
