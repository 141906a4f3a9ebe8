use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use super::{methods_not_implemented, AppState};
use crate::error::AppError;

// GET /test
async fn connection_test(State(store): State<AppState>) -> Result<Json<Value>, AppError> {
    let result = store
        .probe()
        .await
        .map_err(AppError::storage("Database connection test failed"))?;

    Ok(Json(json!({
        "message": "Database connection test succeeded",
        "result": result,
    })))
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(connection_test)
            .head(methods_not_implemented)
            .fallback(methods_not_implemented),
    )
}
