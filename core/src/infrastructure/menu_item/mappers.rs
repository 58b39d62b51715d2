use chrono::Utc;

use crate::domain::menu_item::entities::MenuItem;
use crate::entity::menu_items::Model as MenuItemModel;

/// Category and subcategory names are left empty; the repository fills
/// them in.
impl From<MenuItemModel> for MenuItem {
    fn from(model: MenuItemModel) -> Self {
        MenuItem {
            id: model.id,
            restaurant_id: model.restaurant_id,
            category_id: model.category_id,
            subcategory_id: model.subcategory_id,
            category: None,
            subcategory: None,
            name: model.name,
            description: model.description,
            price: model.price,
            currency: model.currency,
            image_url: model.image_url,
            model_url: model.model_url,
            is_available: model.is_available,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
