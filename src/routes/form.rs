use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::debug;

use super::{methods_not_implemented, AppState};
use crate::{error::AppError, models::ContactSubmission};

const JSON_CONTENT_TYPE: &str = "application/json";

fn required_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Checks the declared content type, parses the body and pulls out the three
/// required fields. Anything else the client sent is ignored.
fn parse_submission(headers: &HeaderMap, body: &[u8]) -> Result<ContactSubmission, AppError> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    if content_type != Some(JSON_CONTENT_TYPE) {
        return Err(AppError::UnsupportedContentType);
    }

    let body: Value = serde_json::from_slice(body).map_err(|_| AppError::InvalidJson)?;

    match (
        required_field(&body, "name"),
        required_field(&body, "email"),
        required_field(&body, "message"),
    ) {
        (Some(name), Some(email), Some(message)) => {
            Ok(ContactSubmission::new(name, email, message))
        }
        _ => Err(AppError::MissingFields),
    }
}

// POST /sendForm
async fn send_form(
    State(store): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let submission = parse_submission(&headers, &body)?;

    store
        .insert_submission(&submission)
        .await
        .map_err(AppError::storage("Failed to submit form"))?;

    debug!("Stored contact form submission");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Form submitted successfully" })),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(send_form).fallback(methods_not_implemented))
}
