use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Restaurant not found")]
    RestaurantNotFound,

    #[error("Item not found")]
    ItemNotFound,

    #[error("Item not found in restaurant")]
    ItemNotInRestaurant,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Admin already exists")]
    AdminAlreadyExists,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("File too large")]
    FileTooLarge,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("AI returned invalid JSON: {0}")]
    InvalidRankerOutput(String),

    #[error("Object storage error: {0}")]
    ObjectStorageError(String),

    #[error("Media storage error: {0}")]
    MediaStorageError(String),

    #[error("Hash password error")]
    HashPasswordError,

    #[error("Internal server error")]
    InternalServerError,
}
