//! Composition root and HTTP server lifecycle.
//!
//! Builds the shared collaborators once (database pool, outbound HTTP client,
//! object store) and injects them into the services.

use crate::application::services::{
    CompanyService, CoverImageAssets, GenerationService, MediaPublisher, PollPolicy,
};
use crate::config::Config;
use crate::domain::repositories::CompanyRepository;
use crate::infrastructure::http::{
    InstagramClient, OpenAiGenerator, ScreenshotOneClient, build_client,
};
use crate::infrastructure::persistence::PgCompanyRepository;
use crate::infrastructure::storage::ObjectStoreUploader;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the Postgres pool with the configured limits.
///
/// # Errors
///
/// Returns an error if the database is unreachable.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Wires repositories, gateways and services into [`AppState`].
///
/// Optional capabilities whose credentials are missing are left disabled.
/// A storage client that fails to build also disables screenshots.
///
/// # Errors
///
/// Returns an error if the shared HTTP client cannot be built.
pub fn build_state(config: &Config, pool: Arc<PgPool>) -> Result<AppState> {
    let http = build_client(&config.http).context("Failed to build HTTP client")?;

    let repository: Arc<dyn CompanyRepository> = Arc::new(PgCompanyRepository::new(pool));
    let generator = Arc::new(OpenAiGenerator::new(http.clone(), &config.openai));

    let cover_assets = build_cover_assets(config, &http);

    let media_publisher = match &config.instagram {
        Some(instagram) => MediaPublisher::new(
            Arc::new(InstagramClient::new(http, instagram)),
            PollPolicy::default(),
        ),
        None => MediaPublisher::disabled(),
    };

    Ok(AppState {
        company_service: Arc::new(CompanyService::new(repository.clone())),
        generation_service: Arc::new(GenerationService::new(
            generator,
            repository,
            cover_assets,
        )),
        media_publisher: Arc::new(media_publisher),
        api_key: config.api_key.as_deref().map(Arc::from),
    })
}

fn build_cover_assets(config: &Config, http: &reqwest::Client) -> Option<CoverImageAssets> {
    if !config.is_screenshot_enabled() {
        return None;
    }
    let storage = config.storage.as_ref()?;

    match ObjectStoreUploader::s3(storage) {
        Ok(uploader) => Some(CoverImageAssets {
            capturer: Arc::new(ScreenshotOneClient::new(http.clone(), &config.screenshot)),
            uploader: Arc::new(uploader),
        }),
        Err(e) => {
            tracing::error!(error = %e, "Object store unavailable, screenshots disabled");
            None
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Services and their remote clients
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let state = build_state(&config, Arc::new(pool))?;
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
