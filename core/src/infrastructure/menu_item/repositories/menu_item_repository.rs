use std::collections::HashMap;

use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu_item::{entities::MenuItem, ports::MenuItemRepository, value_objects::NewMenuItem},
};
use crate::entity::{
    categories::{Column as CategoryColumn, Entity as CategoryEntity},
    menu_items::{
        ActiveModel as MenuItemActiveModel, Column as MenuItemColumn, Entity as MenuItemEntity,
        Model as MenuItemModel,
    },
    subcategories::{Column as SubcategoryColumn, Entity as SubcategoryEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresMenuItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresMenuItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves category and subcategory names with one query per table.
    async fn with_labels(&self, models: Vec<MenuItemModel>) -> Result<Vec<MenuItem>, CoreError> {
        let category_ids: Vec<i64> = models.iter().filter_map(|m| m.category_id).collect();
        let subcategory_ids: Vec<i64> = models.iter().filter_map(|m| m.subcategory_id).collect();

        let mut category_names: HashMap<i64, String> = HashMap::new();
        if !category_ids.is_empty() {
            category_names = CategoryEntity::find()
                .filter(CategoryColumn::Id.is_in(category_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to load item categories: {}", e);
                    CoreError::InternalServerError
                })?
                .into_iter()
                .map(|c| (c.id, c.name))
                .collect();
        }

        let mut subcategory_names: HashMap<i64, String> = HashMap::new();
        if !subcategory_ids.is_empty() {
            subcategory_names = SubcategoryEntity::find()
                .filter(SubcategoryColumn::Id.is_in(subcategory_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to load item subcategories: {}", e);
                    CoreError::InternalServerError
                })?
                .into_iter()
                .map(|s| (s.id, s.name))
                .collect();
        }

        let items = models
            .into_iter()
            .map(|model| {
                let mut item = MenuItem::from(model);
                item.category = item
                    .category_id
                    .and_then(|id| category_names.get(&id).cloned());
                item.subcategory = item
                    .subcategory_id
                    .and_then(|id| subcategory_names.get(&id).cloned());
                item
            })
            .collect();

        Ok(items)
    }

    async fn with_label(&self, model: MenuItemModel) -> Result<MenuItem, CoreError> {
        self.with_labels(vec![model])
            .await?
            .pop()
            .ok_or(CoreError::InternalServerError)
    }
}

impl MenuItemRepository for PostgresMenuItemRepository {
    async fn list_by_restaurant(
        &self,
        restaurant_id: i64,
        available_only: bool,
    ) -> Result<Vec<MenuItem>, CoreError> {
        let mut query = MenuItemEntity::find().filter(MenuItemColumn::RestaurantId.eq(restaurant_id));

        if available_only {
            query = query.filter(MenuItemColumn::IsAvailable.eq(true));
        }

        let models = query
            .order_by_asc(MenuItemColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list menu items: {}", e);
                CoreError::InternalServerError
            })?;

        self.with_labels(models).await
    }

    async fn get_by_id(&self, item_id: i64) -> Result<Option<MenuItem>, CoreError> {
        let model = MenuItemEntity::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get menu item by id: {}", e);
                CoreError::InternalServerError
            })?;

        match model {
            Some(model) => Ok(Some(self.with_label(model).await?)),
            None => Ok(None),
        }
    }

    async fn create_item(&self, item: NewMenuItem) -> Result<MenuItem, CoreError> {
        let model = MenuItemEntity::insert(MenuItemActiveModel {
            id: NotSet,
            restaurant_id: Set(item.restaurant_id),
            category_id: Set(item.category_id),
            subcategory_id: Set(item.subcategory_id),
            name: Set(item.name),
            description: Set(item.description),
            price: Set(item.price),
            currency: Set(item.currency),
            image_url: Set(item.image_url),
            model_url: Set(item.model_url),
            is_available: Set(item.is_available),
            created_at: Set(Utc::now().into()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create menu item: {}", e);
            CoreError::InternalServerError
        })?;

        self.with_label(model).await
    }

    async fn update_item(&self, item: MenuItem) -> Result<MenuItem, CoreError> {
        let model = MenuItemEntity::update(MenuItemActiveModel {
            id: Set(item.id),
            category_id: Set(item.category_id),
            subcategory_id: Set(item.subcategory_id),
            name: Set(item.name),
            description: Set(item.description),
            price: Set(item.price),
            image_url: Set(item.image_url),
            model_url: Set(item.model_url),
            is_available: Set(item.is_available),
            ..Default::default()
        })
        .filter(MenuItemColumn::RestaurantId.eq(item.restaurant_id))
        .exec(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to update menu item: {}", e);
            CoreError::InternalServerError
        })?;

        self.with_label(model).await
    }

    async fn delete_item(&self, item_id: i64) -> Result<(), CoreError> {
        MenuItemEntity::delete_by_id(item_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete menu item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
