//! Out-of-band seeding of the `projects` collection from the copy of the
//! project data bundled with the site.

use bson::doc;
use mongodb::{options::UpdateOptions, Database};
use tracing::debug;

use crate::{db::project_collection, error::StoreResult, models::Project};

const BUNDLED_PROJECTS: &str = include_str!("../data/projects.json");

pub fn bundled_projects() -> serde_json::Result<Vec<Project>> {
    serde_json::from_str(BUNDLED_PROJECTS)
}

/// Upserts every project keyed on its `id`. Returns how many documents were
/// inserted or changed, so a repeated run over unchanged data returns 0.
pub async fn seed_projects(database: &Database, projects: &[Project]) -> StoreResult<u64> {
    let coll = project_collection(database);
    let mut touched = 0;

    for project in projects {
        let fields = bson::to_document(project)?;
        let result = coll
            .update_one(
                doc! { "id": &project.id },
                doc! { "$set": fields },
                UpdateOptions::builder().upsert(true).build(),
            )
            .await?;

        debug!("Seeded project {}", project.id);
        touched += result.modified_count + u64::from(result.upserted_id.is_some());
    }

    Ok(touched)
}
