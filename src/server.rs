//! HTTP server initialization and runtime setup.
//!
//! Wires the storage backend, service, and router together and runs the Axum
//! server lifecycle.

use crate::application::services::AliasService;
use crate::config::Config;
use crate::domain::repositories::AliasRepository;
use crate::infrastructure::persistence::{InMemoryAliasRepository, PgAliasRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - the alias store (Postgres pool + migrations, or the in-memory store)
/// - the alias service and shared state
/// - the Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migrations, or server bind
/// fail, or on a server runtime error.
pub async fn run(config: Config) -> Result<()> {
    let repository: Arc<dyn AliasRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(database_url)
                .await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations").run(&pool).await?;

            Arc::new(PgAliasRepository::new(Arc::new(pool)))
        }
        None => {
            tracing::warn!("No database configured, aliases are lost on restart");
            Arc::new(InMemoryAliasRepository::new())
        }
    };

    let alias_service = Arc::new(AliasService::new(repository));
    let state = AppState::new(alias_service, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
