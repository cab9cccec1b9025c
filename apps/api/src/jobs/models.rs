use serde::{Deserialize, Serialize};

/// A single job listing. Static sample data; the wire format is camelCase
/// because the frontend consumes these fields directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub experience: String,
    pub salary: String,
    pub description: String,
    pub skills: Vec<String>,
    pub posted_date: String,
    pub apply_url: String,
    pub source: String,
}
