//! Axum route handlers for the CV builder endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cv::models::{CvData, SuggestionContext};
use crate::cv::pdf::generate_cv_pdf;
use crate::cv::service;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub success: bool,
    pub enhanced_data: CvData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub cv_url: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub text: Option<String>,
    #[serde(default)]
    pub context: SuggestionContext,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub success: bool,
    pub suggestions: Vec<String>,
}

fn require_full_name(cv: &CvData) -> Result<(), AppError> {
    if cv.personal_info.full_name.trim().is_empty() {
        return Err(AppError::Validation(
            "Personal information is required".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/cv/enhance
///
/// AI rewrite of the submitted CV. Degrades to a local enhancement, so the
/// response is always a usable CV.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(cv): Json<CvData>,
) -> Result<Json<EnhanceResponse>, AppError> {
    require_full_name(&cv)?;
    info!("Enhancing CV for {}", cv.personal_info.full_name);

    let enhanced_data = service::enhance_cv(state.ai.as_ref(), cv).await;

    Ok(Json(EnhanceResponse {
        success: true,
        enhanced_data,
    }))
}

/// POST /api/cv/generate
///
/// Renders the CV to a PDF under the uploads directory and returns its URL.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(cv): Json<CvData>,
) -> Result<Json<GenerateResponse>, AppError> {
    require_full_name(&cv)?;
    info!("Generating CV PDF for {}", cv.personal_info.full_name);

    let uploads_dir = std::path::Path::new(&state.config.uploads_dir);
    let file_name = generate_cv_pdf(&cv, uploads_dir).map_err(|e| AppError::Pdf(e.to_string()))?;

    Ok(Json(GenerateResponse {
        success: true,
        cv_url: format!("{}/uploads/{file_name}", state.config.public_url),
        message: "CV generated successfully".to_string(),
    }))
}

/// POST /api/cv/suggestions
///
/// Inline writing suggestions. Too-short input short-circuits to an empty
/// list; upstream failures degrade to the local fallback table.
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    let text = request.text.unwrap_or_default();
    if text.len() < 3 {
        return Ok(Json(SuggestResponse {
            success: true,
            suggestions: Vec::new(),
        }));
    }

    let preview: String = text.chars().take(30).collect();
    info!("Generating suggestions for: {preview}...");

    let suggestions = service::get_suggestions(state.ai.as_ref(), &text, &request.context).await;

    Ok(Json(SuggestResponse {
        success: true,
        suggestions,
    }))
}
