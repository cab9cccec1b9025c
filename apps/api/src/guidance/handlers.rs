//! Axum route handlers for the guidance endpoints.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::guidance::models::{CareerResponse, ResumeAnalysis, RoadmapResponse, UserProfile};
use crate::guidance::service;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Raw career-analysis body. Fields are optional so missing ones produce
/// field-specific 400s instead of a generic deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerAnalysisRequest {
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub education: Option<String>,
    #[serde(default)]
    pub work_type: Option<String>,
    #[serde(default)]
    pub salary_expectation: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl CareerAnalysisRequest {
    fn into_profile(self) -> Result<UserProfile, AppError> {
        let skills = match self.skills {
            Some(skills) if !skills.is_empty() => skills,
            _ => return Err(AppError::Validation("Skills array is required".to_string())),
        };
        let interests = self
            .interests
            .ok_or_else(|| AppError::Validation("Interests array is required".to_string()))?;
        let education = match self.education {
            Some(education) if !education.trim().is_empty() => education,
            _ => return Err(AppError::Validation("Education is required".to_string())),
        };

        Ok(UserProfile {
            skills,
            interests,
            education,
            work_type: self.work_type.unwrap_or_default(),
            salary_expectation: self.salary_expectation.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    pub career_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRequest {
    pub resume_text: Option<String>,
    pub target_career: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/career
///
/// Analyzes a user profile and returns exactly 3 career matches.
pub async fn handle_career_analysis(
    State(state): State<AppState>,
    Json(request): Json<CareerAnalysisRequest>,
) -> Result<Json<CareerResponse>, AppError> {
    let profile = request.into_profile()?;
    info!("Career analysis request: {} skills", profile.skills.len());

    let response = service::analyze_career(state.ai.as_ref(), &profile).await?;
    Ok(Json(response))
}

/// POST /api/roadmap
///
/// Generates a 12-month learning roadmap for the given career.
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let career_name = match request.career_name.as_deref() {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => return Err(AppError::Validation("Career name is required".to_string())),
    };
    info!("Roadmap request for: {career_name}");

    let response = service::generate_roadmap(state.ai.as_ref(), &career_name).await?;
    Ok(Json(response))
}

/// POST /api/resume
///
/// Scores resume text against a target career.
pub async fn handle_resume_analysis(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let resume_text = match request.resume_text.as_deref() {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => return Err(AppError::Validation("Resume text is required".to_string())),
    };
    let target_career = match request.target_career.as_deref() {
        Some(career) if !career.trim().is_empty() => career.to_string(),
        _ => return Err(AppError::Validation("Target career is required".to_string())),
    };

    let response = service::analyze_resume(state.ai.as_ref(), &resume_text, &target_career).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_skills_is_field_specific_error() {
        let request = CareerAnalysisRequest {
            skills: None,
            interests: Some(vec![]),
            education: Some("B.Tech".to_string()),
            work_type: None,
            salary_expectation: None,
            location: None,
        };
        match request.into_profile() {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Skills array is required"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_skills_rejected() {
        let request = CareerAnalysisRequest {
            skills: Some(vec![]),
            interests: Some(vec![]),
            education: Some("B.Tech".to_string()),
            work_type: None,
            salary_expectation: None,
            location: None,
        };
        assert!(matches!(request.into_profile(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_empty_interests_allowed() {
        let request = CareerAnalysisRequest {
            skills: Some(vec!["Rust".to_string()]),
            interests: Some(vec![]),
            education: Some("B.Tech".to_string()),
            work_type: None,
            salary_expectation: None,
            location: None,
        };
        let profile = request.into_profile().unwrap();
        assert!(profile.interests.is_empty());
        assert_eq!(profile.work_type, "");
    }

    #[test]
    fn test_missing_education_rejected() {
        let request = CareerAnalysisRequest {
            skills: Some(vec!["Rust".to_string()]),
            interests: Some(vec![]),
            education: None,
            work_type: None,
            salary_expectation: None,
            location: None,
        };
        match request.into_profile() {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Education is required"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
