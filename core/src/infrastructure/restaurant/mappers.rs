use chrono::Utc;

use crate::domain::restaurant::entities::Restaurant;
use crate::entity::restaurants::Model as RestaurantModel;

impl From<RestaurantModel> for Restaurant {
    fn from(model: RestaurantModel) -> Self {
        Restaurant {
            id: model.id,
            name: model.name,
            slug: model.slug,
            theme_name: model.theme_name,
            theme_primary: model.theme_primary,
            theme_secondary: model.theme_secondary,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<&RestaurantModel> for Restaurant {
    fn from(model: &RestaurantModel) -> Self {
        Restaurant::from(model.clone())
    }
}
