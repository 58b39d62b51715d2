use std::path::PathBuf;

pub mod entities;
pub mod services;
#[cfg(test)]
pub(crate) mod test_support;

#[derive(Clone, Debug)]
pub struct MenuArtConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub llm: LLMConfig,
    pub media: MediaConfig,
    pub object_storage: Option<ObjectStorageConfig>,
    pub recommendation: RecommendationConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub run_migrations: bool,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expire_minutes: i64,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
}

#[derive(Clone, Debug)]
pub struct MediaConfig {
    pub media_dir: PathBuf,
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct ObjectStorageConfig {
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub public_url: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct RecommendationConfig {
    pub keyword_table_path: Option<PathBuf>,
}

/// Truncates to at most `max` characters, never splitting a code point.
pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}
