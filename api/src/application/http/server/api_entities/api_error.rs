use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use menuart_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Error envelope shared by every route.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::Unauthorized(_) => "E_UNAUTHORIZED",
            ApiError::Forbidden(_) => "E_FORBIDDEN",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::PayloadTooLarge(_) => "E_PAYLOAD_TOO_LARGE",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::RestaurantNotFound
            | CoreError::ItemNotFound
            | CoreError::ItemNotInRestaurant
            | CoreError::CategoryNotFound => ApiError::NotFound(error.to_string()),

            CoreError::SlugAlreadyExists | CoreError::AdminAlreadyExists => {
                ApiError::BadRequest(error.to_string())
            }
            CoreError::Invalid(message) => ApiError::BadRequest(message),

            CoreError::FileTooLarge => ApiError::PayloadTooLarge(error.to_string()),

            CoreError::InvalidCredentials | CoreError::InvalidToken | CoreError::TokenExpired => {
                ApiError::Unauthorized(error.to_string())
            }
            CoreError::Forbidden(message) => ApiError::Forbidden(message),

            CoreError::ConfigurationError(message) | CoreError::ExternalServiceError(message) => {
                ApiError::InternalServerError(message)
            }
            CoreError::InvalidRankerOutput(_) => ApiError::InternalServerError(error.to_string()),

            CoreError::ObjectStorageError(_) | CoreError::MediaStorageError(_) => {
                ApiError::InternalServerError("Failed to store media".to_string())
            }
            CoreError::HashPasswordError | CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), "request failed: {}", self);
        }

        let body = ApiErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(errors.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[test]
    fn test_not_found_errors_map_to_404() {
        for error in [
            CoreError::RestaurantNotFound,
            CoreError::ItemNotFound,
            CoreError::ItemNotInRestaurant,
            CoreError::CategoryNotFound,
        ] {
            assert_eq!(ApiError::from(error).status_code(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn test_validation_errors_keep_their_message() {
        assert_eq!(
            ApiError::from(CoreError::Invalid("price must be non-negative".to_string())),
            ApiError::BadRequest("price must be non-negative".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::SlugAlreadyExists),
            ApiError::BadRequest("Slug already exists".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::FileTooLarge).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn test_ranker_failures_surface_as_500_with_detail() {
        assert_eq!(
            ApiError::from(CoreError::ConfigurationError(
                "OPENAI_API_KEY not set".to_string()
            )),
            ApiError::InternalServerError("OPENAI_API_KEY not set".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::InvalidRankerOutput("nope".to_string())),
            ApiError::InternalServerError("AI returned invalid JSON: nope".to_string())
        );
    }

    #[test]
    fn test_credentials_errors_are_unauthorized() {
        assert_eq!(
            ApiError::from(CoreError::InvalidCredentials).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(CoreError::TokenExpired).status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn test_error_body_carries_code_message_and_status() {
        let response = ApiError::NotFound("Restaurant not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ApiErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            ApiErrorResponse {
                code: "E_NOT_FOUND".to_string(),
                message: "Restaurant not found".to_string(),
                status: 404,
            }
        );
    }
}
