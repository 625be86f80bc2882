use axum_test::TestServer;
use sea_orm::{ConnectOptions, Database};

use motionstudy::build_router;
use motionstudy::config::Config;
use motionstudy::state::AppState;

/// Test configuration
pub fn test_config() -> Config {
    Config {
        database_url: Some("sqlite::memory:".to_string()),
        db_user: "postgres".to_string(),
        db_password: "postgres".to_string(),
        db_host: "localhost".to_string(),
        db_port: 5432,
        db_name: "time_motion_study_test".to_string(),
        sqlite_path: "time_motion_study_test.db".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        static_dir: "static".to_string(),
    }
}

/// Test application wrapper
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application backed by an in-memory database
    pub async fn new() -> Self {
        let config = test_config();

        // One pooled connection keeps every query on the same in-memory
        // database for the lifetime of the test.
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt)
            .await
            .expect("Failed to open in-memory database");

        let state = AppState::with_connection(config, db)
            .await
            .expect("Failed to create test app state");

        let router = build_router(state.clone());
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, state }
    }
}
