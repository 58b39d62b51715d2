use axum::extract::State;
use menuart_core::domain::restaurant::ports::RestaurantService;

use crate::application::http::restaurant::validators::RestaurantResponse;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "",
    tag = "restaurant",
    summary = "List restaurants",
    responses(
        (status = 200, body = Vec<RestaurantResponse>)
    )
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Response<Vec<RestaurantResponse>>, ApiError> {
    let restaurants = state
        .service
        .list_restaurants()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(
        restaurants.into_iter().map(RestaurantResponse::from).collect(),
    ))
}
