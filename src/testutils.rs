use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde::de::Error as _;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use crate::{
    error::{StoreError, StoreResult},
    models::{ContactSubmission, Project},
    store::PortfolioStore,
};

/// In-memory stand-in for the document store. Project documents are kept as
/// raw JSON so lookups return every stored field, like the real store does.
#[derive(Clone, Default)]
pub struct MemoryStore {
    projects: Vec<Value>,
    probe: Option<Value>,
    submissions: Arc<Mutex<Vec<ContactSubmission>>>,
    failing: bool,
}

impl MemoryStore {
    pub fn seeded() -> Self {
        let portfolio = json!({
            "id": "portfolio",
            "title": "Portfolio Website",
            "shortDescription": "This site",
            "overview": "A personal site with a small JSON API.",
            "technologies": ["Rust", "axum", "MongoDB"],
            "github": "https://github.com/example/portfolio",
        });
        let tracker = json!({
            "id": "tracker",
            "title": "Habit Tracker",
            "shortDescription": "Daily habits",
            "overview": "Tracks streaks.",
            "technologies": ["TypeScript"],
            "github": "https://github.com/example/tracker",
            "featured": true,
        });

        Self {
            probe: Some(portfolio.clone()),
            projects: vec![portfolio, tracker],
            ..Self::default()
        }
    }

    pub fn with_projects(projects: Vec<Value>) -> Self {
        Self {
            projects,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn into_app(self) -> NormalizePath<Router> {
        crate::service(Arc::new(self))
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing {
            Err(StoreError::Decode(bson::de::Error::custom("store offline")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        self.check()?;
        Ok(self
            .projects
            .iter()
            .map(|p| Project::from_document(&bson::to_document(p).unwrap()))
            .collect())
    }

    async fn find_project(&self, project_id: &str) -> StoreResult<Option<Value>> {
        self.check()?;
        Ok(self
            .projects
            .iter()
            .find(|p| p["id"] == project_id)
            .cloned())
    }

    async fn insert_submission(&self, submission: &ContactSubmission) -> StoreResult<()> {
        self.check()?;
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(())
    }

    async fn probe(&self) -> StoreResult<Option<Value>> {
        self.check()?;
        Ok(self.probe.clone())
    }
}

pub async fn send_with(
    app: &NormalizePath<Router>,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        request = request.header(CONTENT_TYPE, content_type);
    }
    let request = request.body(Body::from(body.to_string())).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn send(app: &NormalizePath<Router>, method: &str, uri: &str) -> (StatusCode, Value) {
    send_with(app, method, uri, None, "").await
}

pub async fn send_json(
    app: &NormalizePath<Router>,
    method: &str,
    uri: &str,
    body: &str,
) -> (StatusCode, Value) {
    send_with(app, method, uri, Some("application/json"), body).await
}
