//! # empsvc: Employee Records Service
//!
//! `empsvc` is a small HTTP service for registering employees and looking them up. It exposes
//! three JSON endpoints:
//!
//! - `GET /employee/fetchAll`: every employee in registration order, or `204 No Content` when
//!   none exist
//! - `GET /employee/{id}`: a single employee, or `404` with a message
//! - `POST /employee/register`: validate a submission, store it, and return the stored record
//!   with its generated identifier (`201 Created`)
//!
//! ## Architecture
//!
//! The HTTP layer is built on [Axum](https://github.com/tokio-rs/axum). Records are kept in
//! PostgreSQL by default, or in process memory for development and tests.
//!
//! ### Request Flow
//!
//! A registration is parsed and checked by the [`validation::ValidatedJson`] extractor before
//! the handler runs; every invalid field is reported at once. The handler converts the submission
//! into a database request and hands it to the configured [`gateway::EmployeeStore`]. Reads go
//! straight to the store. Any failure along the way is an [`errors::Error`], which renders itself
//! as the HTTP response.
//!
//! ### Core Components
//!
//! - [`api`]: handlers and wire models
//! - [`validation`]: declarative field constraints
//! - [`gateway`]: the store abstraction with PostgreSQL and in-memory implementations
//! - [`db`]: repositories, models, and database error classification
//! - [`errors`]: the error type and its HTTP rendering
//! - [`config`]: YAML + environment configuration
//! - [`telemetry`]: tracing and optional OpenTelemetry export
//!
//! ## Getting Started
//!
//! ```no_run
//! use empsvc::{Application, Config};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::default();
//! Application::new(config).await?.serve(std::future::pending()).await
//! # }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod gateway;
pub mod openapi;
pub mod telemetry;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod types;
pub mod validation;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    routing::{get, post},
};
use bon::Builder;
pub use config::Config;
use config::{DatabaseConfig, PoolSettings};
pub use errors::{ERROR_MESSAGE_KEY, Error, Result};
use gateway::{EmployeeStore, InMemoryEmployeeStore, PostgresEmployeeStore};
use sqlx::{PgPool, postgres::PgPoolOptions};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use types::EmployeeId;

use crate::openapi::ApiDoc;

/// Application state shared across all request handlers.
///
/// # Example
///
/// ```ignore
/// let state = AppState::builder()
///     .store(Arc::new(InMemoryEmployeeStore::new()))
///     .config(config)
///     .build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
    pub config: Config,
}

/// Get the employee database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

fn pool_options(settings: &PoolSettings) -> PgPoolOptions {
    // Zero disables the idle and lifetime limits
    let non_zero = |secs: u64| (secs > 0).then(|| Duration::from_secs(secs));

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .idle_timeout(non_zero(settings.idle_timeout_secs))
        .max_lifetime(non_zero(settings.max_lifetime_secs))
}

/// Connect to the configured store. For PostgreSQL, pending migrations are applied before
/// the pool is returned.
///
/// An already-open pool takes precedence over the configuration.
async fn setup_store(config: &Config, pool: Option<PgPool>) -> anyhow::Result<(Arc<dyn EmployeeStore>, Option<PgPool>)> {
    let pool = match (pool, &config.database) {
        (Some(pool), _) => pool,
        (None, DatabaseConfig::External { url, pool }) => {
            info!("Connecting to PostgreSQL");
            pool_options(pool).connect(url).await?
        }
        (None, DatabaseConfig::Memory) => {
            info!("Using in-memory employee store; records will not survive a restart");
            return Ok((Arc::new(InMemoryEmployeeStore::new()), None));
        }
    };

    migrator().run(&pool).await?;
    debug!("Database migrations applied");

    Ok((Arc::new(PostgresEmployeeStore::new(pool.clone())), Some(pool)))
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let enable_docs = state.config.enable_docs;

    let mut router = Router::new()
        .route("/employee/fetchAll", get(api::handlers::employees::list_employees))
        .route("/employee/register", post(api::handlers::employees::register_employee))
        .route("/employee/{id}", get(api::handlers::employees::get_employee))
        .route("/healthz", get(|| async { "OK" }))
        .with_state(state);

    if enable_docs {
        router = router
            .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
            .merge(Scalar::with_url("/docs", ApiDoc::openapi()));
    }

    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// The running service: router plus the resources it owns.
///
/// 1. **Create**: [`Application::new`] connects to the store and runs migrations
/// 2. **Serve**: [`Application::serve`] binds to the configured address and handles requests
/// 3. **Shutdown**: once the shutdown future resolves, in-flight requests finish and the pool
///    is closed
pub struct Application {
    router: Router,
    config: Config,
    pool: Option<PgPool>,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        Self::new_with_pool(config, None).await
    }

    /// Like [`Application::new`], reusing an existing pool instead of opening one.
    pub async fn new_with_pool(config: Config, pool: Option<PgPool>) -> anyhow::Result<Self> {
        debug!("Starting employee service with configuration: {:#?}", config);

        let (store, pool) = setup_store(&config, pool).await?;
        let state = AppState::builder().store(store).config(config.clone()).build();
        let router = build_router(state);

        Ok(Self { router, config, pool })
    }

    /// Convert application into a test server (for tests)
    #[cfg(any(test, feature = "test-utils"))]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router.into_make_service()).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Employee service listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        if let Some(pool) = self.pool {
            info!("Closing database connections...");
            pool.close().await;
        }

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        Ok(())
    }
}
