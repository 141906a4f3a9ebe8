use async_trait::async_trait;
use serde_json::Value;

use crate::{
    error::StoreResult,
    models::{ContactSubmission, Project},
};

/// Every database operation the HTTP handlers perform. Each handler makes at
/// most one call on this trait per request.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// All projects in natural store order, mapped onto [`Project`].
    async fn list_projects(&self) -> StoreResult<Vec<Project>>;

    /// The stored project whose `id` equals `project_id` exactly, with every
    /// stored field except the internal `_id`.
    async fn find_project(&self, project_id: &str) -> StoreResult<Option<Value>>;

    async fn insert_submission(&self, submission: &ContactSubmission) -> StoreResult<()>;

    /// Connectivity probe against one fixed document.
    async fn probe(&self) -> StoreResult<Option<Value>>;
}
