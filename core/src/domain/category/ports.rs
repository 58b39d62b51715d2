use crate::domain::{
    admin::value_objects::Identity,
    category::{
        entities::{Category, Subcategory},
        value_objects::DeleteCategoryInput,
    },
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait CategoryService: Send + Sync {
    fn list_categories(
        &self,
        restaurant_slug: String,
    ) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;

    fn delete_category(
        &self,
        identity: Identity,
        input: DeleteCategoryInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CategoryRepository: Send + Sync {
    /// Categories ordered by `sort_order` then id, each carrying its
    /// subcategories in the same order.
    fn list_by_restaurant(
        &self,
        restaurant_id: i64,
    ) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;

    fn get_by_id(
        &self,
        restaurant_id: i64,
        category_id: i64,
    ) -> impl Future<Output = Result<Option<Category>, CoreError>> + Send;

    fn get_or_create_category(
        &self,
        restaurant_id: i64,
        name: String,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn get_or_create_subcategory(
        &self,
        category_id: i64,
        name: String,
    ) -> impl Future<Output = Result<Subcategory, CoreError>> + Send;

    fn delete_category(&self, category_id: i64)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}
