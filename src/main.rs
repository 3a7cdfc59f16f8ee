//! `estate-server`: runs the property API with the configured storage backend

use anyhow::Result;
use estate::config::{AppConfig, StorageBackend};
use estate::server::ServerBuilder;
use estate::storage::InMemoryPropertyRepository;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estate=debug,tower_http=debug".into()),
        )
        .with(fmt::layer())
        .init();

    let config = AppConfig::load()?;
    let address = config.server.address();

    let builder = ServerBuilder::new().with_pagination(config.pagination.clone());
    let builder = match config.storage.backend {
        StorageBackend::InMemory => {
            tracing::info!("Using in-memory storage");
            builder.with_repository(InMemoryPropertyRepository::new())
        }
        StorageBackend::Postgres => postgres_builder(builder, &config).await?,
    };

    builder.serve(&address).await
}

#[cfg(feature = "postgres")]
async fn postgres_builder(builder: ServerBuilder, config: &AppConfig) -> Result<ServerBuilder> {
    use estate::storage::PostgresPropertyRepository;
    use estate::storage::postgres::{connect, ensure_schema};

    let url = config
        .storage
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required for the postgres backend"))?;

    let pool = connect(url, config.storage.max_connections).await?;
    ensure_schema(&pool).await?;
    tracing::info!("Using PostgreSQL storage");

    Ok(builder.with_repository(PostgresPropertyRepository::new(pool)))
}

#[cfg(not(feature = "postgres"))]
async fn postgres_builder(_builder: ServerBuilder, _config: &AppConfig) -> Result<ServerBuilder> {
    anyhow::bail!("the postgres backend requires building with `--features postgres`")
}
