use menuart_core::domain::restaurant::entities::Restaurant;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRestaurantValidator {
    #[validate(length(min = 1, max = 120, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 80, message = "slug is required"))]
    pub slug: String,
}

/// Blank or missing values reset that part of the theme to its default.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateThemeValidator {
    #[serde(default)]
    #[validate(length(max = 50, message = "theme name is too long"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 20, message = "primary colour is too long"))]
    pub primary: String,

    #[serde(default)]
    #[validate(length(max = 20, message = "secondary colour is too long"))]
    pub secondary: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct RestaurantResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            slug: restaurant.slug,
        }
    }
}
