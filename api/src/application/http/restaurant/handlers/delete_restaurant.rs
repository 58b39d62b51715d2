use axum::extract::{Path, State};
use menuart_core::domain::restaurant::{
    ports::RestaurantService, value_objects::DeleteRestaurantInput,
};

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::{OkResponse, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/{slug}",
    tag = "restaurant",
    summary = "Delete restaurant",
    description = "Deletes a restaurant together with its categories and items.",
    responses(
        (status = 200, body = OkResponse),
        (status = 404, description = "Restaurant not found")
    ),
    params(
        ("slug" = String, Path, description = "Restaurant slug"),
    ),
    security(("bearer" = []))
)]
pub async fn delete_restaurant(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<OkResponse>, ApiError> {
    state
        .service
        .delete_restaurant(
            identity,
            DeleteRestaurantInput {
                restaurant_slug: slug,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(OkResponse { ok: true }))
}
