use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    // Database
    /// Full connection string; overrides the discrete DB_* parts when set
    pub database_url: Option<String>,
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    /// Local database file used when PostgreSQL is unreachable
    pub sqlite_path: String,

    // Server
    pub host: String,
    pub port: u16,

    /// Directory holding the front-end entry document
    pub static_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if exists

        Ok(Self {
            // Database
            database_url: env::var("DATABASE_URL").ok(),
            db_user: env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            db_password: env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string()),
            db_host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            db_port: env::var("DB_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("DB_PORT"))?,
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "time_motion_study".to_string()),
            sqlite_path: env::var("SQLITE_PATH")
                .unwrap_or_else(|_| "time_motion_study.db".to_string()),

            // Server
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,

            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        })
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// PostgreSQL connection string composed from the discrete DB_* parts
    pub fn postgres_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }

    /// SQLite connection string for the fallback file, created if missing
    pub fn sqlite_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.sqlite_path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment variable: {0}")]
    Invalid(&'static str),
}
