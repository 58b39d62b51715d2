use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use menuart_core::domain::common::{
    AuthConfig, DatabaseConfig, LLMConfig, MediaConfig, MenuArtConfig, ObjectStorageConfig,
    RecommendationConfig,
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "menuart-api", version, about = "MenuArt restaurant menu API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub admin: AdminArgs,

    #[command(flatten)]
    pub media: MediaArgs,

    #[command(flatten)]
    pub object_storage: ObjectStorageArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub recommendation: RecommendationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix of every API route.
    #[arg(long = "server-root-path", env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long = "database-url", env = "DATABASE_URL")]
    pub url: String,

    #[arg(
        long = "run-migrations",
        env = "RUN_MIGRATIONS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub run_migrations: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AuthArgs {
    #[arg(long = "jwt-secret", env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Access token lifetime in minutes.
    #[arg(long = "jwt-expire-min", env = "JWT_EXPIRE_MIN", default_value_t = 10080)]
    pub jwt_expire_minutes: i64,
}

/// Data seeded at startup.
#[derive(Debug, Clone, ClapArgs)]
pub struct AdminArgs {
    #[arg(long = "admin-email", env = "ADMIN_EMAIL")]
    pub email: Option<String>,

    #[arg(long = "admin-password", env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Create the `demo` restaurant and its sample dish at startup.
    #[arg(long = "seed-demo", env = "SEED_DEMO", default_value_t = false)]
    pub seed_demo: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct MediaArgs {
    #[arg(long = "media-dir", env = "MEDIA_DIR", default_value = "media")]
    pub media_dir: PathBuf,

    /// Public base URL used to build local media links.
    #[arg(
        long = "base-url",
        env = "BASE_URL",
        default_value = "http://localhost:8000",
        value_parser = parse_base_url
    )]
    pub base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ObjectStorageArgs {
    #[arg(long = "s3-endpoint", env = "S3_ENDPOINT")]
    pub endpoint: Option<String>,

    #[arg(long = "s3-region", env = "S3_REGION", default_value = "us-east-1")]
    pub region: String,

    #[arg(long = "s3-access-key", env = "S3_ACCESS_KEY")]
    pub access_key: Option<String>,

    #[arg(long = "s3-secret-key", env = "S3_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    #[arg(long = "s3-bucket", env = "S3_BUCKET")]
    pub bucket: Option<String>,

    #[arg(long = "s3-public-url", env = "S3_PUBLIC_URL")]
    pub public_url: Option<String>,
}

impl ObjectStorageArgs {
    /// Object storage is enabled only when endpoint, keys and bucket are all set.
    pub fn config(&self) -> Option<ObjectStorageConfig> {
        let endpoint = non_blank(self.endpoint.as_deref())?;
        let access_key = non_blank(self.access_key.as_deref())?;
        let secret_key = non_blank(self.secret_key.as_deref())?;
        let bucket = non_blank(self.bucket.as_deref())?;

        Some(ObjectStorageConfig {
            endpoint,
            region: self.region.clone(),
            access_key,
            secret_key,
            bucket,
            public_url: non_blank(self.public_url.as_deref()),
        })
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LLMArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = "gpt-4.1-mini")]
    pub openai_model: String,

    #[arg(
        long = "openai-base-url",
        env = "OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub openai_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RecommendationArgs {
    /// JSON file overriding the allergen and protein keyword lists.
    #[arg(long = "keyword-table-path", env = "KEYWORD_TABLE_PATH")]
    pub keyword_table_path: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for MenuArtConfig {
    fn from(args: Args) -> Self {
        let object_storage = args.object_storage.config();

        MenuArtConfig {
            database: DatabaseConfig {
                url: args.database.url,
                run_migrations: args.database.run_migrations,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                jwt_expire_minutes: args.auth.jwt_expire_minutes,
            },
            llm: LLMConfig {
                openai_api_key: args.llm.openai_api_key,
                openai_model: args.llm.openai_model,
                openai_base_url: args.llm.openai_base_url,
            },
            media: MediaConfig {
                media_dir: args.media.media_dir,
                base_url: args.media.base_url,
            },
            object_storage,
            recommendation: RecommendationConfig {
                keyword_table_path: args.recommendation.keyword_table_path,
            },
        }
    }
}

fn parse_base_url(raw: &str) -> Result<String, String> {
    let url = Url::parse(raw).map_err(|e| format!("invalid base url: {}", e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err("base url must use http or https".to_string());
    }

    Ok(raw.trim_end_matches('/').to_string())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
