use crate::domain::{
    admin::value_objects::Identity,
    common::entities::app_errors::CoreError,
    restaurant::{
        entities::{Menu, Restaurant, Theme},
        value_objects::{
            CreateRestaurantInput, CreateRestaurantRequest, DeleteRestaurantInput,
            UpdateThemeInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RestaurantService: Send + Sync {
    fn create_restaurant(
        &self,
        identity: Identity,
        input: CreateRestaurantInput,
    ) -> impl Future<Output = Result<Restaurant, CoreError>> + Send;

    fn list_restaurants(&self) -> impl Future<Output = Result<Vec<Restaurant>, CoreError>> + Send;

    fn get_menu(
        &self,
        restaurant_slug: String,
    ) -> impl Future<Output = Result<Menu, CoreError>> + Send;

    fn update_theme(
        &self,
        identity: Identity,
        input: UpdateThemeInput,
    ) -> impl Future<Output = Result<Restaurant, CoreError>> + Send;

    fn delete_restaurant(
        &self,
        identity: Identity,
        input: DeleteRestaurantInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Creates the `demo` restaurant with one sample dish. Returns `false`
    /// when the dish already exists.
    fn seed_demo(&self) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RestaurantRepository: Send + Sync {
    fn create_restaurant(
        &self,
        request: CreateRestaurantRequest,
    ) -> impl Future<Output = Result<Restaurant, CoreError>> + Send;

    fn list_restaurants(&self) -> impl Future<Output = Result<Vec<Restaurant>, CoreError>> + Send;

    fn get_by_slug(
        &self,
        slug: String,
    ) -> impl Future<Output = Result<Option<Restaurant>, CoreError>> + Send;

    fn get_by_id(
        &self,
        restaurant_id: i64,
    ) -> impl Future<Output = Result<Option<Restaurant>, CoreError>> + Send;

    fn update_theme(
        &self,
        restaurant_id: i64,
        theme: Theme,
    ) -> impl Future<Output = Result<Restaurant, CoreError>> + Send;

    fn delete_restaurant(
        &self,
        restaurant_id: i64,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
