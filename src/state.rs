use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::Config;
use crate::repositories::ProjectStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Persistence store owning the database handle
    pub store: ProjectStore,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState by connecting to the configured database and
    /// preparing the schema.
    ///
    /// With no explicit DATABASE_URL, the PostgreSQL target composed from
    /// the DB_* variables is tried first and an unreachable server drops the
    /// service down to the local SQLite file.
    pub async fn new(config: Config) -> Result<Self, AppStateError> {
        let db = connect(&config).await?;
        Self::with_connection(config, db).await
    }

    /// Create AppState from an existing connection (for testing)
    pub async fn with_connection(
        config: Config,
        db: DatabaseConnection,
    ) -> Result<Self, AppStateError> {
        let store = ProjectStore::new(db);

        // Schema init is idempotent and must finish before the listener binds
        store
            .init_schema()
            .await
            .map_err(|e| AppStateError::Schema(e.to_string()))?;

        Ok(Self { store, config })
    }
}

async fn connect(config: &Config) -> Result<DatabaseConnection, AppStateError> {
    // An explicit DATABASE_URL is authoritative: no fallback applies
    if let Some(url) = &config.database_url {
        tracing::info!("Connecting to database from DATABASE_URL");
        return connect_url(url).await;
    }

    let postgres_url = config.postgres_url();
    tracing::info!(
        "Connecting to PostgreSQL at {}:{}/{}",
        config.db_host,
        config.db_port,
        config.db_name
    );

    match connect_url(&postgres_url).await {
        Ok(db) => Ok(db),
        Err(err) => {
            tracing::warn!(
                "PostgreSQL unreachable ({}), falling back to SQLite file {}",
                err,
                config.sqlite_path
            );
            connect_url(&config.sqlite_url()).await
        }
    }
}

async fn connect_url(url: &str) -> Result<DatabaseConnection, AppStateError> {
    let mut opt = ConnectOptions::new(url);
    opt.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(true);

    Database::connect(opt)
        .await
        .map_err(|e| AppStateError::Connection(e.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Schema initialization error: {0}")]
    Schema(String),
}
