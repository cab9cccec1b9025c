//! Guidance services — build the prompt, call the backend, recover JSON,
//! then enforce the response shape the frontend depends on. Shape violations
//! are upstream failures, not validation errors.

use tracing::info;

use crate::guidance::models::{CareerResponse, ResumeAnalysis, RoadmapResponse, UserProfile};
use crate::guidance::prompts;
use crate::llm_client::parse::parse_json_response;
use crate::llm_client::{AiBackend, AiError};

pub async fn analyze_career(
    backend: &dyn AiBackend,
    profile: &UserProfile,
) -> Result<CareerResponse, AiError> {
    let prompt = prompts::build_career_prompt(profile);
    let text = backend.generate(prompts::CAREER_SYSTEM, &prompt).await?;

    let value = parse_json_response(&text)?;
    let response: CareerResponse = serde_json::from_value(value)
        .map_err(|e| AiError::Shape(format!("Invalid career matches response: {e}")))?;

    // Exactly 3 matches; the generator is instructed but not trusted.
    if response.career_matches.len() != 3 {
        return Err(AiError::Shape(format!(
            "Expected 3 career matches, got {}",
            response.career_matches.len()
        )));
    }

    info!("Career analysis produced {} matches", response.career_matches.len());
    Ok(response)
}

pub async fn generate_roadmap(
    backend: &dyn AiBackend,
    career_name: &str,
) -> Result<RoadmapResponse, AiError> {
    let prompt = prompts::build_roadmap_prompt(career_name);
    let text = backend.generate(prompts::ROADMAP_SYSTEM, &prompt).await?;

    let value = parse_json_response(&text)?;
    // Typed parse enforces phase_1..phase_3 plus the certification and
    // project-idea lists in one step.
    serde_json::from_value(value).map_err(|e| AiError::Shape(format!("Invalid roadmap response: {e}")))
}

pub async fn analyze_resume(
    backend: &dyn AiBackend,
    resume_text: &str,
    target_career: &str,
) -> Result<ResumeAnalysis, AiError> {
    let prompt = prompts::build_resume_prompt(resume_text, target_career);
    let text = backend.generate(prompts::RESUME_SYSTEM, &prompt).await?;

    let value = parse_json_response(&text)?;
    serde_json::from_value(value)
        .map_err(|e| AiError::Shape(format!("Invalid resume analysis response: {e}")))
}
