use std::sync::LazyLock;

use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug pattern"));

pub const MAX_SLUG_LENGTH: usize = 80;
pub const MAX_RESTAURANT_NAME_LENGTH: usize = 120;
pub const MAX_THEME_NAME_LENGTH: usize = 50;
pub const MAX_THEME_COLOUR_LENGTH: usize = 20;

pub struct CreateRestaurantInput {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub slug: String,
}

pub struct UpdateThemeInput {
    pub restaurant_slug: String,
    pub name: String,
    pub primary: String,
    pub secondary: String,
}

pub struct DeleteRestaurantInput {
    pub restaurant_slug: String,
}

/// Slugs end up in media paths, so only lower-case ASCII words joined by `-`
/// are accepted.
pub fn normalize_slug(raw: &str) -> Result<String, CoreError> {
    let slug = raw.trim().to_lowercase();

    if slug.is_empty() {
        return Err(CoreError::Invalid("slug is required".to_string()));
    }

    if slug.len() > MAX_SLUG_LENGTH {
        return Err(CoreError::Invalid(format!(
            "slug must be at most {} characters",
            MAX_SLUG_LENGTH
        )));
    }

    if !SLUG_PATTERN.is_match(&slug) {
        return Err(CoreError::Invalid(
            "slug may only contain letters, digits and single dashes".to_string(),
        ));
    }

    Ok(slug)
}
