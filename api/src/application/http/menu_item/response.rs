use menuart_core::domain::menu_item::entities::MenuItem;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Menu item as rendered by the public menu and the admin editor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub currency: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub image_url: Option<String>,
    pub model_url: Option<String>,
    pub is_available: bool,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price.to_f64().unwrap_or_default(),
            currency: item.currency,
            category: item.category,
            subcategory: item.subcategory,
            image_url: item.image_url,
            model_url: item.model_url,
            is_available: item.is_available,
        }
    }
}
