use bson::{doc, Bson, DateTime as BsonDateTime, Document};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public shape of a project. Any stored field not listed here is dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub overview: String,
    pub technologies: Vec<String>,
    pub github: String,
}

impl Project {
    /// Maps a stored document field by field. A missing, `null` or mistyped
    /// field maps to its empty value; non-string technologies are skipped.
    pub fn from_document(document: &Document) -> Self {
        let text = |key: &str| document.get_str(key).unwrap_or("").to_string();

        Self {
            id: text("id"),
            title: text("title"),
            short_description: text("shortDescription"),
            overview: text("overview"),
            technologies: document
                .get_array("technologies")
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Bson::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            github: text("github"),
        }
    }
}

/// A validated contact form submission, stamped when it was accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_date_time: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            name,
            email,
            message,
            submitted_date_time: Utc::now(),
        }
    }

    pub fn to_document(&self) -> Document {
        doc! {
            "name": &self.name,
            "email": &self.email,
            "message": &self.message,
            "submittedDateTime": BsonDateTime::from_millis(self.submitted_date_time.timestamp_millis()),
        }
    }
}
