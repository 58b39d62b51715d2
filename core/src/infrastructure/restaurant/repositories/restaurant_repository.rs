use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, SqlErr};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    restaurant::{
        entities::{Restaurant, Theme},
        ports::RestaurantRepository,
        value_objects::CreateRestaurantRequest,
    },
};
use crate::entity::restaurants::{
    ActiveModel as RestaurantActiveModel, Column as RestaurantColumn, Entity as RestaurantEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresRestaurantRepository {
    pub db: DatabaseConnection,
}

impl PostgresRestaurantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RestaurantRepository for PostgresRestaurantRepository {
    async fn create_restaurant(
        &self,
        request: CreateRestaurantRequest,
    ) -> Result<Restaurant, CoreError> {
        let restaurant = RestaurantEntity::insert(RestaurantActiveModel {
            id: NotSet,
            name: Set(request.name),
            slug: Set(request.slug),
            theme_name: Set(None),
            theme_primary: Set(None),
            theme_secondary: Set(None),
            created_at: Set(Utc::now().into()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Restaurant::from)
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => CoreError::SlugAlreadyExists,
            _ => {
                error!("Failed to create restaurant: {}", e);
                CoreError::InternalServerError
            }
        })?;

        Ok(restaurant)
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, CoreError> {
        let restaurants = RestaurantEntity::find()
            .order_by_asc(RestaurantColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list restaurants: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Restaurant::from)
            .collect::<Vec<Restaurant>>();

        Ok(restaurants)
    }

    async fn get_by_slug(&self, slug: String) -> Result<Option<Restaurant>, CoreError> {
        let restaurant = RestaurantEntity::find()
            .filter(RestaurantColumn::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get restaurant by slug: {}", e);
                CoreError::InternalServerError
            })?
            .map(Restaurant::from);

        Ok(restaurant)
    }

    async fn get_by_id(&self, restaurant_id: i64) -> Result<Option<Restaurant>, CoreError> {
        let restaurant = RestaurantEntity::find_by_id(restaurant_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get restaurant by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Restaurant::from);

        Ok(restaurant)
    }

    async fn update_theme(&self, restaurant_id: i64, theme: Theme) -> Result<Restaurant, CoreError> {
        let restaurant = RestaurantEntity::update(RestaurantActiveModel {
            id: Set(restaurant_id),
            theme_name: Set(Some(theme.name)),
            theme_primary: Set(Some(theme.primary)),
            theme_secondary: Set(Some(theme.secondary)),
            ..Default::default()
        })
        .exec(&self.db)
        .await
        .map(Restaurant::from)
        .map_err(|e| {
            error!("Failed to update restaurant theme: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(restaurant)
    }

    async fn delete_restaurant(&self, restaurant_id: i64) -> Result<(), CoreError> {
        RestaurantEntity::delete_by_id(restaurant_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete restaurant: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
