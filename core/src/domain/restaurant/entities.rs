use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu_item::entities::MenuItem;

pub const DEFAULT_THEME_NAME: &str = "Classic";
pub const DEFAULT_THEME_PRIMARY: &str = "#f59e0b";
pub const DEFAULT_THEME_SECONDARY: &str = "#d97706";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub theme_name: Option<String>,
    pub theme_primary: Option<String>,
    pub theme_secondary: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Theme {
    pub name: String,
    pub primary: String,
    pub secondary: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: DEFAULT_THEME_NAME.to_string(),
            primary: DEFAULT_THEME_PRIMARY.to_string(),
            secondary: DEFAULT_THEME_SECONDARY.to_string(),
        }
    }
}

impl Theme {
    /// Builds a theme from free-form input, substituting the default for any
    /// blank component.
    pub fn from_parts(name: &str, primary: &str, secondary: &str) -> Self {
        let default = Self::default();
        Self {
            name: non_blank(name).unwrap_or(default.name),
            primary: non_blank(primary).unwrap_or(default.primary),
            secondary: non_blank(secondary).unwrap_or(default.secondary),
        }
    }
}

impl Restaurant {
    pub fn theme(&self) -> Theme {
        Theme::from_parts(
            self.theme_name.as_deref().unwrap_or_default(),
            self.theme_primary.as_deref().unwrap_or_default(),
            self.theme_secondary.as_deref().unwrap_or_default(),
        )
    }
}

/// A restaurant together with every item it owns, available or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Menu {
    pub restaurant: Restaurant,
    pub items: Vec<MenuItem>,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant() -> Restaurant {
        Restaurant {
            id: 1,
            name: "Demo Restaurant".to_string(),
            slug: "demo".to_string(),
            theme_name: None,
            theme_primary: None,
            theme_secondary: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_theme_falls_back_to_defaults() {
        assert_eq!(restaurant().theme(), Theme::default());
    }

    #[test]
    fn test_theme_keeps_stored_values_and_fills_blanks() {
        let mut r = restaurant();
        r.theme_name = Some("Ocean".to_string());
        r.theme_primary = Some("  ".to_string());
        r.theme_secondary = Some("#0ea5e9".to_string());

        let theme = r.theme();
        assert_eq!(theme.name, "Ocean");
        assert_eq!(theme.primary, DEFAULT_THEME_PRIMARY);
        assert_eq!(theme.secondary, "#0ea5e9");
    }
}
