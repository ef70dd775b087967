use std::sync::Arc;

use axum::Router;
use catalog_api::{
    config::AppConfig,
    db::{self, DbConfig},
    handlers::AppServices,
    AppState,
};

/// Helper harness for spinning up an application state backed by an
/// in-memory SQLite database with migrations applied.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let db_config = DbConfig {
            url: "sqlite::memory:".to_string(),
            // A single connection keeps every query on the same in-memory db.
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };

        let pool = db::establish_connection_with_config(&db_config)
            .await
            .expect("Failed to connect to test database");
        db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let db_arc = Arc::new(pool);
        let services = AppServices::new(db_arc.clone());
        let config = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            0,
            "test".to_string(),
        );

        let state = AppState {
            db: db_arc,
            config,
            services,
        };
        let router = catalog_api::app_router(state.clone());

        Self { router, state }
    }

    /// A clone of the application router, ready for `oneshot` calls.
    #[allow(dead_code)]
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
