use std::sync::Arc;

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures_util::TryStreamExt;
use mongodb::{
    options::{FindOneOptions, FindOptions},
    Client, Collection, Database,
};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::{
    config::Config,
    error::{StoreError, StoreResult},
    models::{ContactSubmission, Project},
    store::PortfolioStore,
};

pub const PROJECT_COLLECTION: &str = "projects";
pub const FORM_COLLECTION: &str = "forms";

/// Fixed document looked up by the `/test` connectivity probe.
pub const PROBE_DOCUMENT_ID: &str = "6659a4f6c8e3b2a1d4f0e9b7";

type Connection = Result<Database, Arc<mongodb::error::Error>>;

/// Lazily opens one connection per process and hands the same outcome to
/// every caller, including the failure if the first attempt failed.
pub struct ConnectionProvider {
    uri: String,
    database_name: String,
    connection: OnceCell<Connection>,
}

impl ConnectionProvider {
    pub fn new(uri: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database_name: database_name.into(),
            connection: OnceCell::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.mongodb_uri, &config.database_name)
    }

    pub async fn database(&self) -> StoreResult<Database> {
        self.connection
            .get_or_init(|| connect(&self.uri, &self.database_name))
            .await
            .clone()
            .map_err(StoreError::Connection)
    }
}

async fn connect(uri: &str, database_name: &str) -> Connection {
    let attempt = async {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(database_name);
        database.run_command(doc! { "ping": 1 }, None).await?;
        Ok::<_, mongodb::error::Error>(database)
    };

    match attempt.await {
        Ok(database) => {
            info!("Connected to MongoDB database: {database_name}");
            Ok(database)
        }
        Err(e) => {
            error!("Failed to connect to MongoDB: {e}");
            Err(Arc::new(e))
        }
    }
}

pub fn project_collection(database: &Database) -> Collection<Document> {
    database.collection(PROJECT_COLLECTION)
}

pub fn form_collection(database: &Database) -> Collection<Document> {
    database.collection(FORM_COLLECTION)
}

fn without_internal_id() -> Document {
    doc! { "_id": 0 }
}

pub struct MongoStore {
    provider: ConnectionProvider,
}

impl MongoStore {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl PortfolioStore for MongoStore {
    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        let database = self.provider.database().await?;
        let options = FindOptions::builder()
            .projection(without_internal_id())
            .build();

        let mut cursor = project_collection(&database).find(doc! {}, options).await?;

        let mut projects = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            projects.push(Project::from_document(&document));
        }
        Ok(projects)
    }

    async fn find_project(&self, project_id: &str) -> StoreResult<Option<Value>> {
        let database = self.provider.database().await?;
        let options = FindOneOptions::builder()
            .projection(without_internal_id())
            .build();

        let document = project_collection(&database)
            .find_one(doc! { "id": project_id }, options)
            .await?;

        Ok(document.map(bson::from_document).transpose()?)
    }

    async fn insert_submission(&self, submission: &ContactSubmission) -> StoreResult<()> {
        let database = self.provider.database().await?;
        form_collection(&database)
            .insert_one(submission.to_document(), None)
            .await?;
        Ok(())
    }

    async fn probe(&self) -> StoreResult<Option<Value>> {
        let database = self.provider.database().await?;
        let probe_id = ObjectId::parse_str(PROBE_DOCUMENT_ID)?;
        let options = FindOneOptions::builder()
            .projection(without_internal_id())
            .build();

        let document = project_collection(&database)
            .find_one(doc! { "_id": probe_id }, options)
            .await?;

        Ok(document.map(bson::from_document).transpose()?)
    }
}
