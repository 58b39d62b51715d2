use std::sync::{Arc, OnceLock};

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::{PrometheusMetricLayer, metrics_exporter_prometheus::PrometheusHandle};
use menuart_core::{application::create_service, domain::common::MenuArtConfig};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{debug, info_span, warn};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use super::config::get_config;
use super::openapi::api_doc;
use crate::application::http::server::app_state::AppState;
use crate::application::http::{
    admin::router::admin_routes, category::router::category_routes,
    health::router::health_routes, menu_item::router::menu_item_routes,
    recommendation::router::recommendation_routes, restaurant::router::restaurant_routes,
};
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = MenuArtConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

/// The exporter installs a process-wide recorder, so it is built once.
fn metrics() -> (PrometheusMetricLayer<'static>, PrometheusHandle) {
    static METRICS: OnceLock<(PrometheusMetricLayer<'static>, PrometheusHandle)> =
        OnceLock::new();
    METRICS.get_or_init(PrometheusMetricLayer::pair).clone()
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid allowed origin");
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            LOCATION,
        ])
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = metrics();

    let mut openapi = api_doc();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .route(&format!("{}/config", root_path), get(get_config))
        .merge(health_routes(&root_path))
        .merge(admin_routes(state.clone()))
        .merge(restaurant_routes(state.clone()))
        .merge(category_routes(state.clone()))
        .merge(menu_item_routes(state.clone()))
        .merge(recommendation_routes(state.clone()))
        .nest_service("/media", ServeDir::new(&state.args.media.media_dir))
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use clap::Parser;
    use bytes::Bytes;
    use menuart_core::{
        domain::{
            common::services::Service,
            jwt::ports::TokenRepository,
            media::{
                entities::{MediaKind, MediaUpload},
                ports::MediaStoragePort,
            },
            recommendation::entities::KeywordTable,
        },
        infrastructure::{
            admin::repositories::admin_repository::PostgresAdminRepository,
            category::repositories::category_repository::PostgresCategoryRepository,
            crypto::argon2_hasher::Argon2HasherRepository,
            health::health_check_repository::PostgresHealthCheckRepository,
            jwt::jsonwebtoken_repository::JsonWebTokenRepository,
            llm::openai_client::OpenAIClient,
            media::{fallback::FallbackMediaStorage, local::LocalMediaStorage},
            menu_item::repositories::menu_item_repository::PostgresMenuItemRepository,
            restaurant::repositories::restaurant_repository::PostgresRestaurantRepository,
        },
    };
    use sea_orm::DatabaseConnection;
    use serde_json::{Value, json};
    use tempfile::TempDir;
    use test_context::{AsyncTestContext, test_context};

    use super::*;

    const JWT_SECRET: &str = "router-test-secret";

    /// Router wired to repositories without a database; only requests that
    /// are answered before any query can be exercised.
    struct ApiContext {
        server: TestServer,
        media_dir: TempDir,
        media: LocalMediaStorage,
        tokens: JsonWebTokenRepository,
    }

    impl AsyncTestContext for ApiContext {
        async fn setup() -> Self {
            let media_dir = TempDir::new().unwrap();
            let args = Args::try_parse_from([
                "menuart-api",
                "--database-url",
                "postgres://unused@localhost/unused",
                "--jwt-secret",
                JWT_SECRET,
                "--media-dir",
                media_dir.path().to_str().unwrap(),
                "--server-root-path",
                "/api",
            ])
            .unwrap();
            let config = MenuArtConfig::from(args.clone());
            let db = DatabaseConnection::Disconnected;
            let media = LocalMediaStorage::new(&config.media);

            let service = Service::new(
                PostgresRestaurantRepository::new(db.clone()),
                PostgresCategoryRepository::new(db.clone()),
                PostgresMenuItemRepository::new(db.clone()),
                PostgresAdminRepository::new(db.clone()),
                Argon2HasherRepository::new(),
                JsonWebTokenRepository::new(JWT_SECRET, 60),
                FallbackMediaStorage::new(None, media.clone()),
                OpenAIClient::new(&config.llm),
                PostgresHealthCheckRepository::new(db),
                KeywordTable::default(),
            );

            let app = router(AppState::new(Arc::new(args), service)).unwrap();

            ApiContext {
                server: TestServer::new(app),
                media_dir,
                media,
                tokens: JsonWebTokenRepository::new(JWT_SECRET, 60),
            }
        }
    }

    impl ApiContext {
        fn admin_token(&self) -> String {
            self.tokens
                .issue_token("chef@menuart.dev".to_string())
                .unwrap()
                .access_token
        }
    }

    #[test_context(ApiContext)]
    #[tokio::test]
    async fn test_health_reports_ok(ctx: &mut ApiContext) {
        let response = ctx.server.get("/api/health").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok" }));
    }

    #[test_context(ApiContext)]
    #[tokio::test]
    async fn test_admin_route_without_token_is_unauthorized(ctx: &mut ApiContext) {
        let response = ctx
            .server
            .post("/api/restaurants")
            .json(&json!({ "name": "Trattoria", "slug": "trattoria" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_UNAUTHORIZED");
        assert_eq!(body["status"], 401);
    }

    #[test_context(ApiContext)]
    #[tokio::test]
    async fn test_layered_routes_reject_forged_tokens(ctx: &mut ApiContext) {
        let forged = JsonWebTokenRepository::new("another-secret", 60)
            .issue_token("mallory@menuart.dev".to_string())
            .unwrap()
            .access_token;

        ctx.server
            .delete("/api/items/1")
            .authorization_bearer(forged)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
        ctx.server
            .delete("/api/menu/1")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
        ctx.server
            .delete("/api/restaurants/trattoria/categories/3")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
        ctx.server
            .post("/api/admin/register")
            .json(&json!({ "email": "new@menuart.dev", "password": "long enough" }))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[test_context(ApiContext)]
    #[tokio::test]
    async fn test_invalid_slug_is_rejected_for_admins(ctx: &mut ApiContext) {
        let token = ctx.admin_token();
        let response = ctx
            .server
            .post("/api/restaurants")
            .authorization_bearer(token)
            .json(&json!({ "name": "Trattoria", "slug": "trattoria/../admin" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_BAD_REQUEST");
    }

    #[test_context(ApiContext)]
    #[tokio::test]
    async fn test_login_validates_body(ctx: &mut ApiContext) {
        ctx.server
            .post("/api/admin/login")
            .json(&json!({ "email": "chef@menuart.dev", "password": "" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        ctx.server
            .post("/api/admin/login")
            .json(&json!({ "email": "chef@menuart.dev" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[test_context(ApiContext)]
    #[tokio::test]
    async fn test_recommend_rejects_malformed_constraints(ctx: &mut ApiContext) {
        let response = ctx
            .server
            .post("/api/restaurants/trattoria/recommend")
            .json(&json!({ "budget": "cheap" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "E_BAD_REQUEST");
    }

    #[test_context(ApiContext)]
    #[tokio::test]
    async fn test_local_media_is_served(ctx: &mut ApiContext) {
        let dir = ctx.media_dir.path().join("trattoria");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("dish.jpg"), b"jpeg bytes").unwrap();

        let response = ctx.server.get("/media/trattoria/dish.jpg").await;

        response.assert_status_ok();
        assert_eq!(response.as_bytes().as_ref(), b"jpeg bytes");

        ctx.server
            .get("/media/trattoria/missing.jpg")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[test_context(ApiContext)]
    #[tokio::test]
    async fn test_stored_media_is_served_at_its_url(ctx: &mut ApiContext) {
        let stored = ctx
            .media
            .store(
                "trattoria".to_string(),
                MediaKind::Image,
                MediaUpload {
                    filename: Some("margherita.png".to_string()),
                    content_type: Some("image/png".to_string()),
                    data: Bytes::from_static(b"png bytes"),
                },
            )
            .await
            .unwrap();

        let url = url::Url::parse(&stored.url).unwrap();
        assert!(url.path().starts_with("/media/trattoria/"));

        let response = ctx.server.get(url.path()).await;

        response.assert_status_ok();
        assert_eq!(response.as_bytes().as_ref(), b"png bytes");
    }

    #[test_context(ApiContext)]
    #[tokio::test]
    async fn test_config_reports_local_media(ctx: &mut ApiContext) {
        let response = ctx.server.get("/api/config").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["root_path"], "/api");
        assert_eq!(body["media_backend"], "local");
    }
}
