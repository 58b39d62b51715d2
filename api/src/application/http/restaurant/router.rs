use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::create_restaurant::{__path_create_restaurant, create_restaurant};
use super::handlers::delete_restaurant::{__path_delete_restaurant, delete_restaurant};
use super::handlers::get_menu::{__path_get_menu, get_menu};
use super::handlers::list_restaurants::{__path_list_restaurants, list_restaurants};
use super::handlers::update_theme::{__path_update_theme, update_theme};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    list_restaurants,
    create_restaurant,
    delete_restaurant,
    get_menu,
    update_theme
))]
pub struct RestaurantApiDoc;

/// Public reads and admin writes share paths here, so admin handlers take
/// [`RequiredIdentity`](crate::application::auth::RequiredIdentity) instead
/// of sitting behind the auth layer.
pub fn restaurant_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/restaurants", state.args.server.root_path),
            get(list_restaurants),
        )
        .route(
            &format!("{}/restaurants", state.args.server.root_path),
            post(create_restaurant),
        )
        .route(
            &format!("{}/restaurants/{{slug}}", state.args.server.root_path),
            delete(delete_restaurant),
        )
        .route(
            &format!("{}/restaurants/{{slug}}/menu", state.args.server.root_path),
            get(get_menu),
        )
        .route(
            &format!("{}/restaurants/{{slug}}/theme", state.args.server.root_path),
            put(update_theme),
        )
}
