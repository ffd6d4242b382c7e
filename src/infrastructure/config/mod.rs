use serde::Deserialize;
use std::env;
use std::time::Duration;

pub const DEFAULT_BREVO_BASE_URL: &str = "https://api.brevo.com/v3";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    pub db_max_connections: u32,
    // Back-office
    pub admin_api_key: String,
    pub revalidate_secret: String,
    pub catalog_cache_ttl_secs: u64,
    // Contact service (Brevo)
    pub brevo_api_key: String,
    pub brevo_base_url: String,
    pub brevo_list_id: Option<i64>,
    // Public site settings
    pub analytics_tag_id: Option<String>,
    pub cors_allowed_origin: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,
            admin_api_key: env::var("ADMIN_API_KEY")?,
            revalidate_secret: env::var("REVALIDATE_SECRET")?,
            catalog_cache_ttl_secs: env::var("CATALOG_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()?,
            brevo_api_key: env::var("BREVO_API_KEY")?,
            brevo_base_url: env::var("BREVO_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BREVO_BASE_URL.to_string()),
            brevo_list_id: optional_var("BREVO_LIST_ID")
                .map(|v| v.parse::<i64>())
                .transpose()?,
            analytics_tag_id: optional_var("ANALYTICS_TAG_ID"),
            cors_allowed_origin: optional_var("CORS_ALLOWED_ORIGIN"),
        };

        if let Some(origin) = &config.cors_allowed_origin {
            axum::http::HeaderValue::from_str(origin)?;
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn catalog_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.catalog_cache_ttl_secs)
    }
}

/// Unset and blank variables both read as `None`
fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
