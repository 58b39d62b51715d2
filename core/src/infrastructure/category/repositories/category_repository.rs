use std::collections::HashMap;

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, SqlErr};
use tracing::error;

use crate::domain::{
    category::{
        entities::{Category, Subcategory},
        ports::CategoryRepository,
    },
    common::entities::app_errors::CoreError,
};
use crate::entity::{
    categories::{
        ActiveModel as CategoryActiveModel, Column as CategoryColumn, Entity as CategoryEntity,
    },
    subcategories::{
        ActiveModel as SubcategoryActiveModel, Column as SubcategoryColumn,
        Entity as SubcategoryEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_category(
        &self,
        restaurant_id: i64,
        name: &str,
    ) -> Result<Option<Category>, CoreError> {
        CategoryEntity::find()
            .filter(CategoryColumn::RestaurantId.eq(restaurant_id))
            .filter(CategoryColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map(|model| model.map(Category::from))
            .map_err(|e| {
                error!("Failed to find category: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn find_subcategory(
        &self,
        category_id: i64,
        name: &str,
    ) -> Result<Option<Subcategory>, CoreError> {
        SubcategoryEntity::find()
            .filter(SubcategoryColumn::CategoryId.eq(category_id))
            .filter(SubcategoryColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map(|model| model.map(Subcategory::from))
            .map_err(|e| {
                error!("Failed to find subcategory: {}", e);
                CoreError::InternalServerError
            })
    }
}

impl CategoryRepository for PostgresCategoryRepository {
    async fn list_by_restaurant(&self, restaurant_id: i64) -> Result<Vec<Category>, CoreError> {
        let categories = CategoryEntity::find()
            .filter(CategoryColumn::RestaurantId.eq(restaurant_id))
            .order_by_asc(CategoryColumn::SortOrder)
            .order_by_asc(CategoryColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list categories: {}", e);
                CoreError::InternalServerError
            })?;

        let category_ids: Vec<i64> = categories.iter().map(|c| c.id).collect();

        let mut subcategories: HashMap<i64, Vec<Subcategory>> = HashMap::new();
        if !category_ids.is_empty() {
            let rows = SubcategoryEntity::find()
                .filter(SubcategoryColumn::CategoryId.is_in(category_ids))
                .order_by_asc(SubcategoryColumn::SortOrder)
                .order_by_asc(SubcategoryColumn::Id)
                .all(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to list subcategories: {}", e);
                    CoreError::InternalServerError
                })?;

            for row in rows.iter() {
                subcategories
                    .entry(row.category_id)
                    .or_default()
                    .push(Subcategory::from(row));
            }
        }

        let categories = categories
            .into_iter()
            .map(|model| {
                let mut category = Category::from(model);
                category.subcategories = subcategories.remove(&category.id).unwrap_or_default();
                category
            })
            .collect::<Vec<Category>>();

        Ok(categories)
    }

    async fn get_by_id(
        &self,
        restaurant_id: i64,
        category_id: i64,
    ) -> Result<Option<Category>, CoreError> {
        let category = CategoryEntity::find()
            .filter(CategoryColumn::Id.eq(category_id))
            .filter(CategoryColumn::RestaurantId.eq(restaurant_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get category by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Category::from);

        Ok(category)
    }

    async fn get_or_create_category(
        &self,
        restaurant_id: i64,
        name: String,
    ) -> Result<Category, CoreError> {
        if let Some(category) = self.find_category(restaurant_id, &name).await? {
            return Ok(category);
        }

        let inserted = CategoryEntity::insert(CategoryActiveModel {
            id: NotSet,
            restaurant_id: Set(restaurant_id),
            name: Set(name.clone()),
            sort_order: Set(0),
        })
        .exec_with_returning(&self.db)
        .await;

        match inserted {
            Ok(model) => Ok(Category::from(model)),
            // Lost a race with a concurrent insert of the same label.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => self
                .find_category(restaurant_id, &name)
                .await?
                .ok_or(CoreError::InternalServerError),
            Err(e) => {
                error!("Failed to create category: {}", e);
                Err(CoreError::InternalServerError)
            }
        }
    }

    async fn get_or_create_subcategory(
        &self,
        category_id: i64,
        name: String,
    ) -> Result<Subcategory, CoreError> {
        if let Some(subcategory) = self.find_subcategory(category_id, &name).await? {
            return Ok(subcategory);
        }

        let inserted = SubcategoryEntity::insert(SubcategoryActiveModel {
            id: NotSet,
            category_id: Set(category_id),
            name: Set(name.clone()),
            sort_order: Set(0),
        })
        .exec_with_returning(&self.db)
        .await;

        match inserted {
            Ok(model) => Ok(Subcategory::from(model)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => self
                .find_subcategory(category_id, &name)
                .await?
                .ok_or(CoreError::InternalServerError),
            Err(e) => {
                error!("Failed to create subcategory: {}", e);
                Err(CoreError::InternalServerError)
            }
        }
    }

    async fn delete_category(&self, category_id: i64) -> Result<(), CoreError> {
        CategoryEntity::delete_by_id(category_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete category: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
