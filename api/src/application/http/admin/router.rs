use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::login::{__path_login, login};
use super::handlers::register::{__path_register, register};
use crate::application::auth::auth;
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(login, register))]
pub struct AdminApiDoc;

pub fn admin_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route(
            &format!("{}/admin/register", state.args.server.root_path),
            post(register),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth));

    Router::new()
        .route(
            &format!("{}/admin/login", state.args.server.root_path),
            post(login),
        )
        .merge(protected)
}
