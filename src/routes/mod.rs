use std::sync::Arc;

use axum::Router;

use crate::{error::AppError, store::PortfolioStore};

pub mod diagnostic;
pub mod form;
pub mod projects;

pub type AppState = Arc<dyn PortfolioStore>;

/// Shared responder for any verb a defined path does not implement.
pub async fn methods_not_implemented() -> AppError {
    AppError::MethodNotImplemented
}

pub async fn no_route_found() -> AppError {
    AppError::RouteNotFound
}

/// Paths are matched first; a known path with the wrong verb gets 405, an
/// unknown path gets 404 whatever the verb.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/projects", projects::router())
        .nest("/sendForm", form::router())
        .nest("/test", diagnostic::router())
        .fallback(no_route_found)
        .with_state(state)
}
