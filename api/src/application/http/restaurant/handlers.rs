pub mod create_restaurant;
pub mod delete_restaurant;
pub mod get_menu;
pub mod list_restaurants;
pub mod update_theme;
