use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use super::config::__path_get_config;
use crate::application::http::{
    admin::router::AdminApiDoc, category::router::CategoryApiDoc, health::router::HealthApiDoc,
    menu_item::router::MenuItemApiDoc, recommendation::router::RecommendationApiDoc,
    restaurant::router::RestaurantApiDoc,
};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MenuArt API"
    ),
    paths(get_config),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/admin", api = AdminApiDoc),
        (path = "/restaurants", api = RestaurantApiDoc),
        (path = "/restaurants/{slug}/categories", api = CategoryApiDoc),
        (path = "/restaurants/{slug}/recommend", api = RecommendationApiDoc),
    ),
    modifiers(&BearerSecurity)
)]
pub struct ApiDoc;

/// Full document: item routes span several prefixes and are merged as-is.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(MenuItemApiDoc::openapi());
    openapi
}
