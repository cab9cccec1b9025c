//! Listing filters. All three criteria AND together; absent or "All" values
//! pass everything. Category matching runs a fixed regex per category against
//! the lowercased title + skills text — an ordered table so the mapping stays
//! explicit and testable.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::jobs::models::Job;

/// Category name → pattern over `"{title} {skills...}"` (lowercased).
static CATEGORY_RULES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("Technology", r"software|developer|engineer|programmer|tech|it|data|devops"),
        ("Healthcare", r"medical|doctor|nurse|healthcare|hospital|clinical"),
        ("Business", r"business|management|consultant|strategy|operations"),
        ("Finance", r"finance|accounting|bank|investment|financial"),
        ("Education", r"teacher|education|professor|instructor|academic|coordinator"),
        ("Marketing", r"marketing|digital|seo|brand|advertising|social"),
        ("Design", r"design|ui|ux|graphic|creative|visual"),
        ("Sales", r"sales|business development|account|client"),
    ]
    .iter()
    .map(|(name, pattern)| (*name, Regex::new(pattern).expect("valid category pattern")))
    .collect()
});

pub fn filter_jobs(
    jobs: &[Job],
    search: Option<&str>,
    category: Option<&str>,
    location: Option<&str>,
) -> Vec<Job> {
    jobs.iter()
        .filter(|job| {
            matches_search(job, search)
                && matches_location(job, location)
                && matches_category(job, category)
        })
        .cloned()
        .collect()
}

fn matches_search(job: &Job, search: Option<&str>) -> bool {
    let Some(query) = search.filter(|q| !q.is_empty()) else {
        return true;
    };
    let query = query.to_lowercase();
    job.title.to_lowercase().contains(&query)
        || job.company.to_lowercase().contains(&query)
        || job.description.to_lowercase().contains(&query)
}

fn matches_location(job: &Job, location: Option<&str>) -> bool {
    let Some(location) = location.filter(|l| !l.is_empty() && *l != "All") else {
        return true;
    };
    job.location.to_lowercase().contains(&location.to_lowercase())
}

fn matches_category(job: &Job, category: Option<&str>) -> bool {
    let Some(category) = category.filter(|c| !c.is_empty() && *c != "All") else {
        return true;
    };
    let Some((_, pattern)) = CATEGORY_RULES.iter().find(|(name, _)| *name == category) else {
        // Unknown categories filter nothing, matching the frontend's dropdown.
        return true;
    };
    let job_text = format!("{} {}", job.title, job.skills.join(" ")).to_lowercase();
    pattern.is_match(&job_text)
}
