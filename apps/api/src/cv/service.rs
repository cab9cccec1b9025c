//! CV enhancement and suggestion services. Both degrade locally instead of
//! surfacing upstream errors: the CV builder UI treats these as best-effort
//! assists, never as blockers.

use tracing::warn;

use crate::cv::models::{CvData, SuggestionContext};
use crate::cv::prompts;
use crate::llm_client::parse::{extract_json_array, extract_json_object};
use crate::llm_client::AiBackend;

const SOFT_SKILL_ADDITIONS: &[&str] = &["Problem Solving", "Team Collaboration", "Communication"];

const DEFAULT_SUMMARY: &str = "Results-driven professional with proven expertise in delivering \
    high-quality solutions. Strong analytical and problem-solving skills with a track record of success.";

/// Rewrites the CV through the backend. Parse failures keep the original data
/// with a default summary; backend failures get the local enhancement.
pub async fn enhance_cv(backend: &dyn AiBackend, cv: CvData) -> CvData {
    let Ok(cv_json) = serde_json::to_string_pretty(&cv) else {
        return fallback_enhancement(cv);
    };
    let prompt = prompts::build_enhance_prompt(&cv_json);

    match backend.generate(prompts::ENHANCE_SYSTEM, &prompt).await {
        Ok(response) => {
            let enhanced = extract_json_object(&response)
                .and_then(|span| serde_json::from_str::<CvData>(span).ok());
            match enhanced {
                Some(enhanced) => enhanced,
                None => {
                    warn!("CV enhancement returned unparseable data, keeping original");
                    with_default_summary(cv)
                }
            }
        }
        Err(e) => {
            warn!("CV enhancement backend failed, using local fallback: {e}");
            fallback_enhancement(cv)
        }
    }
}

fn with_default_summary(mut cv: CvData) -> CvData {
    if cv.summary.trim().is_empty() {
        cv.summary = DEFAULT_SUMMARY.to_string();
    }
    cv
}

/// Local enhancement: a skills-derived summary and a deduplicated merge of
/// the standard soft skills.
fn fallback_enhancement(mut cv: CvData) -> CvData {
    if cv.summary.trim().is_empty() {
        let top_skills = cv.skills.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
        cv.summary = format!(
            "Dynamic professional with expertise in {top_skills}. \
             Proven track record of delivering results and driving innovation."
        );
    }
    for addition in SOFT_SKILL_ADDITIONS {
        if !cv.skills.iter().any(|s| s == addition) {
            cv.skills.push(addition.to_string());
        }
    }
    cv
}

/// Generates up to 3 completion suggestions for in-progress CV text.
pub async fn get_suggestions(
    backend: &dyn AiBackend,
    text: &str,
    context: &SuggestionContext,
) -> Vec<String> {
    let prompt = prompts::build_suggest_prompt(text, context);

    match backend.generate(prompts::SUGGEST_SYSTEM, &prompt).await {
        Ok(response) => extract_json_array(&response)
            .and_then(|span| serde_json::from_str::<Vec<String>>(span).ok())
            .map(|suggestions| suggestions.into_iter().take(3).collect())
            .unwrap_or_else(|| fallback_suggestions(text, context)),
        Err(e) => {
            warn!("Suggestion backend failed, using local fallback: {e}");
            fallback_suggestions(text, context)
        }
    }
}

/// Ordered fallback table — first matching branch wins.
fn fallback_suggestions(text: &str, context: &SuggestionContext) -> Vec<String> {
    let lower = text.to_lowercase();

    if lower.contains("professional") || lower.contains("experienced") || text.len() < 50 {
        return vec![
            "Results-driven professional with proven expertise in delivering high-quality solutions".to_string(),
            "Dynamic leader with strong analytical and problem-solving skills".to_string(),
            "Innovative professional with a track record of driving business growth".to_string(),
        ];
    }

    if lower.contains("led") || lower.contains("managed") || lower.contains("developed") {
        return vec![
            "Led cross-functional teams to deliver projects 20% ahead of schedule".to_string(),
            "Managed stakeholder relationships resulting in 95% client satisfaction".to_string(),
            "Developed innovative solutions that increased efficiency by 30%".to_string(),
        ];
    }

    if let Some(skills) = context.skills.as_deref().filter(|s| !s.is_empty()) {
        let top_skills = skills.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
        return vec![
            format!("Expertise in {top_skills} with proven ability to deliver results"),
            format!("Strong technical skills in {top_skills} and agile methodologies"),
            format!("Proficient in {top_skills} with focus on scalable solutions"),
        ];
    }

    vec![
        "Proven track record of exceeding performance targets and driving innovation".to_string(),
        "Strong communication and leadership skills with ability to mentor teams".to_string(),
        "Detail-oriented professional committed to continuous learning and improvement".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::AiError;
    use async_trait::async_trait;

    struct CannedBackend(&'static str);

    #[async_trait]
    impl AiBackend for CannedBackend {
        async fn generate(&self, _system: &str, _user: &str) -> Result<String, AiError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl AiBackend for FailingBackend {
        async fn generate(&self, _system: &str, _user: &str) -> Result<String, AiError> {
            Err(AiError::Api {
                status: 500,
                message: "boom".to_string(),
            })
        }
    }

    fn sample_cv() -> CvData {
        CvData {
            personal_info: crate::cv::models::PersonalInfo {
                full_name: "Asha Rao".to_string(),
                email: "asha@example.com".to_string(),
                ..Default::default()
            },
            skills: vec!["Rust".to_string(), "SQL".to_string(), "Docker".to_string(), "AWS".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_enhance_parses_returned_object() {
        let backend = CannedBackend(
            r#"Here you go: {"personalInfo": {"fullName": "Asha Rao"}, "summary": "Sharper summary", "skills": ["Rust"]}"#,
        );
        let enhanced = enhance_cv(&backend, sample_cv()).await;
        assert_eq!(enhanced.summary, "Sharper summary");
        assert_eq!(enhanced.personal_info.full_name, "Asha Rao");
    }

    #[tokio::test]
    async fn test_enhance_unparseable_keeps_original_with_default_summary() {
        let backend = CannedBackend("I refuse to answer in JSON.");
        let enhanced = enhance_cv(&backend, sample_cv()).await;
        assert_eq!(enhanced.summary, DEFAULT_SUMMARY);
        assert_eq!(enhanced.personal_info.full_name, "Asha Rao");
        // Parse-failure path does not inject soft skills.
        assert_eq!(enhanced.skills.len(), 4);
    }

    #[tokio::test]
    async fn test_enhance_backend_failure_merges_soft_skills_once() {
        let mut cv = sample_cv();
        cv.skills.push("Communication".to_string());
        let enhanced = enhance_cv(&FailingBackend, cv).await;
        assert!(enhanced.summary.starts_with("Dynamic professional with expertise in Rust, SQL, Docker"));
        let communication_count = enhanced.skills.iter().filter(|s| *s == "Communication").count();
        assert_eq!(communication_count, 1, "merged soft skills must be deduplicated");
        assert!(enhanced.skills.iter().any(|s| s == "Problem Solving"));
        assert!(enhanced.skills.iter().any(|s| s == "Team Collaboration"));
    }

    #[tokio::test]
    async fn test_suggestions_parse_array_and_cap_at_three() {
        let backend = CannedBackend(r#"["one", "two", "three", "four"]"#);
        let suggestions = get_suggestions(&backend, "some long enough text about shipping software", &SuggestionContext::default()).await;
        assert_eq!(suggestions, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_suggestions_backend_failure_short_text_gets_summary_fallback() {
        let suggestions = get_suggestions(&FailingBackend, "Profess", &SuggestionContext::default()).await;
        assert!(suggestions[0].contains("Results-driven professional"));
        assert_eq!(suggestions.len(), 3);
    }

    #[test]
    fn test_fallback_order_summary_branch_beats_verb_branch_on_short_text() {
        // Under 50 chars, the summary branch wins even with an action verb.
        let suggestions = fallback_suggestions("Led the team", &SuggestionContext::default());
        assert!(suggestions[0].contains("Results-driven"));
    }

    #[test]
    fn test_fallback_verb_branch_on_long_text() {
        let text = "Led the platform migration effort across four product teams during 2025";
        let suggestions = fallback_suggestions(text, &SuggestionContext::default());
        assert!(suggestions[0].starts_with("Led cross-functional teams"));
    }

    #[test]
    fn test_fallback_skills_branch_uses_top_three() {
        let context = SuggestionContext {
            role: None,
            skills: Some(vec![
                "Rust".to_string(),
                "SQL".to_string(),
                "Docker".to_string(),
                "AWS".to_string(),
            ]),
        };
        let text = "A sufficiently long piece of text without any trigger phrases present here";
        let suggestions = fallback_suggestions(text, &context);
        assert!(suggestions[0].contains("Rust, SQL, Docker"));
        assert!(!suggestions[0].contains("AWS"));
    }

    #[test]
    fn test_fallback_generic_branch() {
        let text = "A sufficiently long piece of text without any trigger phrases present here";
        let suggestions = fallback_suggestions(text, &SuggestionContext::default());
        assert!(suggestions[0].contains("Proven track record"));
    }
}
