use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use super::{methods_not_implemented, AppState};
use crate::{error::AppError, models::Project};

// GET /projects
async fn list_projects(State(store): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    let projects = store
        .list_projects()
        .await
        .map_err(AppError::storage("Failed to fetch projects"))?;

    Ok(Json(projects))
}

// GET /projects/:project_id
async fn get_project(
    State(store): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let project = store
        .find_project(&project_id)
        .await
        .map_err(AppError::storage("Failed to fetch project"))?
        .ok_or(AppError::ProjectNotFound)?;

    Ok(Json(project))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_projects)
                .head(methods_not_implemented)
                .fallback(methods_not_implemented),
        )
        .route(
            "/:project_id",
            get(get_project)
                .head(methods_not_implemented)
                .fallback(methods_not_implemented),
        )
}
