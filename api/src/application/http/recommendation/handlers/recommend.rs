use axum::extract::{Path, State};
use menuart_core::domain::recommendation::{
    entities::Recommendation, ports::RecommendationService, value_objects::RecommendInput,
};

use crate::application::http::recommendation::validators::RecommendValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "",
    tag = "recommendation",
    summary = "Recommend dishes",
    description = "Filters the available items by allergies and protein preference, then asks the ranker for up to three picks.",
    responses(
        (status = 200, body = Recommendation),
        (status = 404, description = "Restaurant not found"),
        (status = 500, description = "Ranker not configured or returned an unusable reply")
    ),
    params(
        ("slug" = String, Path, description = "Restaurant slug"),
    ),
    request_body = RecommendValidator
)]
pub async fn recommend(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecommendValidator>,
) -> Result<Response<Recommendation>, ApiError> {
    let recommendation = state
        .service
        .recommend(RecommendInput {
            restaurant_slug: slug,
            constraints: payload.into(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recommendation))
}
