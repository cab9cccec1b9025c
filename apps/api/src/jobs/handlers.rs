//! Axum route handler for the job listings endpoint.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::jobs::filter::filter_jobs;
use crate::jobs::models::Job;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub refresh: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListResponse {
    pub success: bool,
    pub count: usize,
    pub jobs: Vec<Job>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// GET /api/jobs?search=&category=&location=&refresh=
pub async fn handle_job_listings(
    State(state): State<AppState>,
    Query(query): Query<JobQuery>,
) -> Result<Json<JobListResponse>, AppError> {
    info!("Fetching job listings");
    let force_refresh = query.refresh.as_deref() == Some("true");

    let (jobs, last_updated) = {
        let mut cache = state.job_cache.write().await;
        let jobs = cache.get(force_refresh).to_vec();
        (jobs, cache.last_updated())
    };

    let filtered = filter_jobs(
        &jobs,
        query.search.as_deref(),
        query.category.as_deref(),
        query.location.as_deref(),
    );

    Ok(Json(JobListResponse {
        success: true,
        count: filtered.len(),
        jobs: filtered,
        last_updated,
    }))
}
