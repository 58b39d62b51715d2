use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub id: i64,
    pub restaurant_id: i64,
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    /// Resolved from `category_id`, filled in by the repository.
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub currency: String,
    pub image_url: Option<String>,
    pub model_url: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

impl MenuItem {
    /// Text the recommendation filters match keywords against.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {}",
            self.name,
            self.description.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }
}
