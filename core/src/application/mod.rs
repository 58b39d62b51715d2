use tracing::info;

use crate::{
    domain::{
        common::{MenuArtConfig, services::Service},
        recommendation::entities::KeywordTable,
    },
    infrastructure::{
        admin::repositories::admin_repository::PostgresAdminRepository,
        category::repositories::category_repository::PostgresCategoryRepository,
        crypto::argon2_hasher::Argon2HasherRepository,
        db::postgres::Postgres,
        health::health_check_repository::PostgresHealthCheckRepository,
        jwt::jsonwebtoken_repository::JsonWebTokenRepository,
        llm::openai_client::OpenAIClient,
        media::{fallback::FallbackMediaStorage, local::LocalMediaStorage},
        menu_item::repositories::menu_item_repository::PostgresMenuItemRepository,
        object_storage::minio::MinioObjectStorage,
        restaurant::repositories::restaurant_repository::PostgresRestaurantRepository,
    },
};

pub type MenuArtService = Service<
    PostgresRestaurantRepository,
    PostgresCategoryRepository,
    PostgresMenuItemRepository,
    PostgresAdminRepository,
    Argon2HasherRepository,
    JsonWebTokenRepository,
    FallbackMediaStorage<MinioObjectStorage>,
    OpenAIClient,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: MenuArtConfig) -> Result<MenuArtService, anyhow::Error> {
    let postgres = Postgres::new(&config.database).await?;
    let db = postgres.get_db();

    let keyword_table = load_keyword_table(&config).await?;

    let remote = config.object_storage.clone().map(MinioObjectStorage::new);
    let media_storage = FallbackMediaStorage::new(remote, LocalMediaStorage::new(&config.media));
    info!(backend = media_storage.backend(), "media storage ready");

    let llm_client = OpenAIClient::new(&config.llm);
    if !llm_client.is_configured() {
        info!("OPENAI_API_KEY not set, recommendations will fail until it is configured");
    }

    Ok(Service::new(
        PostgresRestaurantRepository::new(db.clone()),
        PostgresCategoryRepository::new(db.clone()),
        PostgresMenuItemRepository::new(db.clone()),
        PostgresAdminRepository::new(db.clone()),
        Argon2HasherRepository::new(),
        JsonWebTokenRepository::new(&config.auth.jwt_secret, config.auth.jwt_expire_minutes),
        media_storage,
        llm_client,
        PostgresHealthCheckRepository::new(db),
        keyword_table,
    ))
}

async fn load_keyword_table(config: &MenuArtConfig) -> Result<KeywordTable, anyhow::Error> {
    let Some(path) = &config.recommendation.keyword_table_path else {
        return Ok(KeywordTable::default());
    };

    let raw = tokio::fs::read_to_string(path).await?;
    let table = KeywordTable::from_json(&raw)?;
    info!(path = %path.display(), "loaded keyword table");

    Ok(table)
}
