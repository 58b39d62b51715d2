use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, post, put},
};
use utoipa::OpenApi;

use super::handlers::create_item::{__path_create_item, create_item};
use super::handlers::delete_item::{
    __path_delete_item, __path_delete_item_by_id, delete_item, delete_item_by_id,
};
use super::handlers::update_item::{
    __path_update_item, __path_update_item_by_id, update_item, update_item_by_id,
};
use super::validators::MAX_UPLOAD_BODY_SIZE;
use crate::application::auth::auth;
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    create_item,
    update_item,
    update_item_by_id,
    delete_item,
    delete_item_by_id
))]
pub struct MenuItemApiDoc;

pub fn menu_item_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/restaurants/{{slug}}/items", root_path),
            post(create_item),
        )
        .route(
            &format!("{}/restaurants/{{slug}}/items/{{item_id}}", root_path),
            put(update_item),
        )
        .route(
            &format!("{}/restaurants/{{slug}}/items/{{item_id}}", root_path),
            delete(delete_item),
        )
        .route(
            &format!("{}/items/{{item_id}}", root_path),
            put(update_item_by_id),
        )
        .route(
            &format!("{}/items/{{item_id}}", root_path),
            delete(delete_item_by_id),
        )
        .route(
            &format!("{}/menu/{{item_id}}", root_path),
            put(update_item_by_id),
        )
        .route(
            &format!("{}/menu/{{item_id}}", root_path),
            delete(delete_item_by_id),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_SIZE))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
