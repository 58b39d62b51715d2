use axum::{
    Router, middleware,
    routing::{delete, get},
};
use utoipa::OpenApi;

use super::handlers::delete_category::{__path_delete_category, delete_category};
use super::handlers::list_categories::{__path_list_categories, list_categories};
use crate::application::auth::auth;
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_categories, delete_category))]
pub struct CategoryApiDoc;

pub fn category_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route(
            &format!(
                "{}/restaurants/{{slug}}/categories/{{category_id}}",
                state.args.server.root_path
            ),
            delete(delete_category),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth));

    Router::new()
        .route(
            &format!(
                "{}/restaurants/{{slug}}/categories",
                state.args.server.root_path
            ),
            get(list_categories),
        )
        .merge(protected)
}
