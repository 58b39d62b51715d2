use rust_decimal::Decimal;

use crate::domain::{
    category::value_objects::CategoryLabels, common::entities::app_errors::CoreError,
    media::entities::MediaUpload,
};

pub const MAX_ITEM_NAME_LENGTH: usize = 120;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;
/// Largest value the `NUMERIC(10, 2)` price column holds.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Editable fields shared by create and update forms.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemFields {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub labels: CategoryLabels,
    pub is_available: Option<bool>,
}

impl MenuItemFields {
    pub fn validated(mut self) -> Result<Self, CoreError> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(CoreError::Invalid("name is required".to_string()));
        }
        if self.name.chars().count() > MAX_ITEM_NAME_LENGTH {
            return Err(CoreError::Invalid(format!(
                "name must be at most {} characters",
                MAX_ITEM_NAME_LENGTH
            )));
        }

        self.description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        if let Some(description) = &self.description
            && description.chars().count() > MAX_DESCRIPTION_LENGTH
        {
            return Err(CoreError::Invalid(format!(
                "description must be at most {} characters",
                MAX_DESCRIPTION_LENGTH
            )));
        }

        if self.price < Decimal::ZERO {
            return Err(CoreError::Invalid("price must be non-negative".to_string()));
        }
        self.price = self.price.round_dp(2);
        if self.price > MAX_PRICE {
            return Err(CoreError::Invalid(format!(
                "price must be at most {}",
                MAX_PRICE
            )));
        }

        Ok(self)
    }
}

pub struct CreateMenuItemInput {
    pub restaurant_slug: String,
    pub fields: MenuItemFields,
    pub image: Option<MediaUpload>,
    pub model: Option<MediaUpload>,
}

/// How an item is addressed on update: through its restaurant, or by id
/// alone on the legacy route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemTarget {
    Scoped { restaurant_slug: String, item_id: i64 },
    Global { item_id: i64 },
}

pub struct UpdateMenuItemInput {
    pub target: ItemTarget,
    pub fields: MenuItemFields,
    pub image: Option<MediaUpload>,
    pub model: Option<MediaUpload>,
}

/// Row to insert; ids already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuItem {
    pub restaurant_id: i64,
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub currency: String,
    pub image_url: Option<String>,
    pub model_url: Option<String>,
    pub is_available: bool,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn fields(name: &str, price: &str) -> MenuItemFields {
        MenuItemFields {
            name: name.to_string(),
            description: Some("   ".to_string()),
            price: Decimal::from_str(price).unwrap(),
            labels: CategoryLabels::default(),
            is_available: None,
        }
    }

    #[test]
    fn test_validated_trims_and_rounds() {
        let f = fields("  Margherita ", "8.499").validated().unwrap();
        assert_eq!(f.name, "Margherita");
        assert_eq!(f.description, None);
        assert_eq!(f.price, Decimal::from_str("8.50").unwrap());
    }

    #[test]
    fn test_validated_rejects_negative_price() {
        assert!(fields("Soup", "-1").validated().is_err());
        assert!(fields("Soup", "0").validated().is_ok());
    }

    #[test]
    fn test_validated_rejects_price_beyond_column_precision() {
        assert_eq!(
            fields("Caviar", "100000000").validated(),
            Err(CoreError::Invalid(
                "price must be at most 99999999.99".to_string()
            ))
        );
        assert_eq!(
            fields("Caviar", "99999999.99").validated().unwrap().price,
            MAX_PRICE
        );
    }

    #[test]
    fn test_validated_rejects_blank_name() {
        assert_eq!(
            fields("  ", "1").validated(),
            Err(CoreError::Invalid("name is required".to_string()))
        );
    }
}
