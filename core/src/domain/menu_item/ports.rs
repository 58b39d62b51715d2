use crate::domain::{
    admin::value_objects::Identity,
    common::entities::app_errors::CoreError,
    menu_item::{
        entities::MenuItem,
        value_objects::{CreateMenuItemInput, ItemTarget, NewMenuItem, UpdateMenuItemInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MenuItemService: Send + Sync {
    fn create_item(
        &self,
        identity: Identity,
        input: CreateMenuItemInput,
    ) -> impl Future<Output = Result<MenuItem, CoreError>> + Send;

    fn update_item(
        &self,
        identity: Identity,
        input: UpdateMenuItemInput,
    ) -> impl Future<Output = Result<MenuItem, CoreError>> + Send;

    fn delete_item(
        &self,
        identity: Identity,
        target: ItemTarget,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MenuItemRepository: Send + Sync {
    /// Items of a restaurant ordered by id, with category and subcategory
    /// names resolved.
    fn list_by_restaurant(
        &self,
        restaurant_id: i64,
        available_only: bool,
    ) -> impl Future<Output = Result<Vec<MenuItem>, CoreError>> + Send;

    fn get_by_id(
        &self,
        item_id: i64,
    ) -> impl Future<Output = Result<Option<MenuItem>, CoreError>> + Send;

    fn create_item(
        &self,
        item: NewMenuItem,
    ) -> impl Future<Output = Result<MenuItem, CoreError>> + Send;

    /// Persists every editable column of `item` and returns the stored row.
    fn update_item(
        &self,
        item: MenuItem,
    ) -> impl Future<Output = Result<MenuItem, CoreError>> + Send;

    fn delete_item(&self, item_id: i64) -> impl Future<Output = Result<(), CoreError>> + Send;
}
