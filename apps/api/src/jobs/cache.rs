//! Process-lifetime job cache with a 24-hour freshness window.
//!
//! The listing set is replaced wholesale on refresh — never partially
//! mutated — so readers always observe a complete snapshot. The cache is an
//! owned value carried in `AppState` behind an `RwLock`, not a module-level
//! global, so tests construct their own instances.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::jobs::data;
use crate::jobs::models::Job;

const CACHE_TTL_HOURS: i64 = 24;

#[derive(Debug, Default)]
pub struct JobCache {
    jobs: Vec<Job>,
    last_updated: Option<DateTime<Utc>>,
}

impl JobCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached listings, regenerating when forced, empty, or
    /// older than the freshness window.
    pub fn get(&mut self, force_refresh: bool) -> &[Job] {
        if !force_refresh && !self.jobs.is_empty() && self.is_fresh() {
            debug!("Returning cached jobs");
            return &self.jobs;
        }

        info!("Generating fresh job data");
        self.jobs = data::sample_jobs();
        self.last_updated = Some(Utc::now());
        info!("Updated job cache with {} jobs", self.jobs.len());
        &self.jobs
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    fn is_fresh(&self) -> bool {
        self.last_updated
            .map(|updated| Utc::now() - updated < Duration::hours(CACHE_TTL_HOURS))
            .unwrap_or(false)
    }
}

/// Fire-and-forget daily refresh. Not coordinated with in-flight requests;
/// the swap under the write lock is the only synchronization needed.
pub fn spawn_daily_refresh(cache: Arc<RwLock<JobCache>>) {
    tokio::spawn(async move {
        let period = std::time::Duration::from_secs(24 * 60 * 60);
        let mut interval = tokio::time::interval(period);
        interval.tick().await; // first tick completes immediately
        loop {
            interval.tick().await;
            info!("Running scheduled job refresh");
            cache.write().await.get(true);
        }
    });
}
