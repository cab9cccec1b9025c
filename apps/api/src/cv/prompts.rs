use crate::cv::models::SuggestionContext;

/// System prompt for CV enhancement. The model rewrites in place and must
/// keep the input structure so the typed re-parse succeeds.
pub const ENHANCE_SYSTEM: &str = r#"You are a professional CV/Resume writer. Enhance the provided CV data by:
1. Improving the professional summary to be more impactful
2. Rewriting job descriptions to be more achievement-focused with metrics
3. Suggesting additional relevant skills
4. Improving project descriptions

Return the enhanced data in the same JSON structure. Keep all original information but make it more professional and ATS-friendly."#;

pub fn build_enhance_prompt(cv_json: &str) -> String {
    format!("Enhance this CV data:\n\n{cv_json}\n\nReturn only the enhanced JSON data, no explanations.")
}

/// System prompt for inline writing suggestions — a bare JSON string array.
pub const SUGGEST_SYSTEM: &str = r#"You are a professional CV writing assistant. Generate 3 concise, professional suggestions to complete or improve the user's text.

Guidelines:
- Make suggestions specific and actionable
- Use professional language
- Keep each suggestion under 100 characters
- Focus on achievements and impact
- Use action verbs and quantifiable results when possible
- Return ONLY a JSON array of strings, no other text

Example format: ["suggestion 1", "suggestion 2", "suggestion 3"]"#;

pub fn build_suggest_prompt(text: &str, context: &SuggestionContext) -> String {
    let mut prompt = format!("User is writing: \"{text}\"\n\n");

    if let Some(role) = context.role.as_deref() {
        prompt.push_str(&format!("Their role: {role}\n"));
    }
    if let Some(skills) = context.skills.as_deref().filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("Their skills: {}\n", skills.join(", ")));
    }

    prompt.push_str("\nProvide 3 professional suggestions to complete or improve this text. Return ONLY a JSON array.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_prompt_includes_context_when_present() {
        let context = SuggestionContext {
            role: Some("Backend Engineer".to_string()),
            skills: Some(vec!["Rust".to_string(), "SQL".to_string()]),
        };
        let prompt = build_suggest_prompt("Built services", &context);
        assert!(prompt.contains("Their role: Backend Engineer"));
        assert!(prompt.contains("Their skills: Rust, SQL"));
    }

    #[test]
    fn test_suggest_prompt_omits_empty_context() {
        let prompt = build_suggest_prompt("Built services", &SuggestionContext::default());
        assert!(!prompt.contains("Their role"));
        assert!(!prompt.contains("Their skills"));
    }
}
