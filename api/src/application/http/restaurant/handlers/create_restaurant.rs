use axum::extract::State;
use menuart_core::domain::restaurant::{
    ports::RestaurantService, value_objects::CreateRestaurantInput,
};

use crate::application::auth::RequiredIdentity;
use crate::application::http::restaurant::validators::{CreateRestaurantValidator, RestaurantResponse};
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "",
    tag = "restaurant",
    summary = "Create restaurant",
    description = "Creates a restaurant. The slug is lower-cased and must be unique.",
    responses(
        (status = 200, body = RestaurantResponse),
        (status = 400, description = "Invalid or duplicate slug"),
        (status = 401, description = "Missing or invalid token")
    ),
    request_body = CreateRestaurantValidator,
    security(("bearer" = []))
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateRestaurantValidator>,
) -> Result<Response<RestaurantResponse>, ApiError> {
    let restaurant = state
        .service
        .create_restaurant(
            identity,
            CreateRestaurantInput {
                name: payload.name,
                slug: payload.slug,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RestaurantResponse::from(restaurant)))
}
