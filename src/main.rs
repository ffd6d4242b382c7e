use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use pcore_backend::infrastructure::config::{Config, LogFormat};
use pcore_backend::infrastructure::db::{check_connection, create_pool, run_migrations};
use pcore_backend::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting PCore backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    tracing::info!(
        cache_ttl_secs = config.catalog_cache_ttl_secs,
        brevo_list_id = ?config.brevo_list_id,
        analytics_enabled = config.analytics_tag_id.is_some(),
        "Catalog settings loaded"
    );

    if config.is_development() && config.cors_allowed_origin.is_none() {
        tracing::warn!("CORS_ALLOWED_ORIGIN not set; any origin may call the API");
    }

    start_http_server(Arc::new(pool), Arc::new(config)).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pcore_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
