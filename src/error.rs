use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures talking to the document store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Connection(Arc<mongodb::error::Error>),

    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error(transparent)]
    Decode(#[from] bson::de::Error),

    #[error(transparent)]
    Encode(#[from] bson::ser::Error),

    #[error(transparent)]
    InvalidId(#[from] bson::oid::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Content-Type must be application/json")]
    UnsupportedContentType,

    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Missing required fields: name, email, and message are required")]
    MissingFields,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("No Route Found")]
    RouteNotFound,

    #[error("Methods not implemented")]
    MethodNotImplemented,

    #[error("{context}")]
    Storage {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Attaches the generic message shown to callers for a failed store call.
    pub fn storage(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| AppError::Storage { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnsupportedContentType | AppError::InvalidJson | AppError::MissingFields => {
                StatusCode::BAD_REQUEST
            }
            AppError::ProjectNotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotImplemented => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn error_text(source: &StoreError) -> String {
    let text = source.to_string();
    if text.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        text
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::MethodNotImplemented => (status, Json(self.to_string())).into_response(),
            AppError::Storage { context, source } => {
                tracing::error!("{context}: {source}");
                let body = json!({
                    "message": context,
                    "error": error_text(source),
                });
                (status, Json(body)).into_response()
            }
            _ => (status, Json(json!({ "message": self.to_string() }))).into_response(),
        }
    }
}
