//! JSON API behind a personal portfolio site: project listings, project
//! lookup, a contact form and a connectivity probe, backed by MongoDB.

use std::sync::Arc;

use axum::{extract::Request, Router, ServiceExt};
use tokio::{net::TcpListener, signal};
use tower::Layer;
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};
use tracing::info;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;
pub mod store;

#[cfg(test)]
mod testutils;

use config::Config;
use db::{ConnectionProvider, MongoStore};
use routes::AppState;

/// The full HTTP service. Trailing slashes are trimmed before routing.
pub fn service(state: AppState) -> NormalizePath<Router> {
    let app = routes::router(state).layer(TraceLayer::new_for_http());

    NormalizePathLayer::trim_trailing_slash().layer(app)
}

pub async fn run(config: Config) -> std::io::Result<()> {
    // Connection is opened by the first request that needs it.
    let store = MongoStore::new(ConnectionProvider::from_config(&config));
    let app = service(Arc::new(store));

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
