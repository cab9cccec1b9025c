use crate::assistant::{ChatMessage, Sender};

/// System prompt for the assistant. The mock backend keys its chat branch on
/// the "Career Assistant" phrase in here.
pub const ASSISTANT_SYSTEM: &str = r#"You are a helpful Career Assistant for "My Career Plot" - an AI-powered career guidance platform in India. Your role is to help users with:

1. Career Guidance: Suggest career paths based on interests, skills, and goals
2. Job Search Tips: Provide advice on finding jobs, networking, and applications
3. Resume Writing: Help with resume structure, content, and ATS optimization
4. Interview Preparation: Share interview tips, common questions, and best practices
5. Skill Development: Recommend skills to learn and resources
6. Industry Insights: Share information about different industries and roles
7. Salary Guidance: Provide realistic salary expectations for Indian market
8. Education Advice: Suggest courses, certifications, and degrees

Guidelines:
- Be friendly, supportive, and encouraging
- Provide specific, actionable advice
- Use Indian context (LPA for salary, Indian companies, etc.)
- Keep responses concise but informative
- If asked about platform features, guide users to:
  * Profile Analysis for career matching
  * Jobs section for opportunities
  * Resume Analyzer for resume improvement
  * Roadmap View for learning paths
- For complex queries, break down advice into steps
- Always be positive and motivating

Respond in a conversational, helpful tone."#;

/// Renders prior turns plus the new message into the single user prompt the
/// backend receives. The trailing "Assistant:" doubles as the mock dispatch
/// marker for chat requests.
pub fn build_chat_prompt(message: &str, history: &[ChatMessage]) -> String {
    let mut conversation = String::new();
    if !history.is_empty() {
        conversation.push_str("\n\nPrevious conversation:\n");
        for turn in history {
            let speaker = match turn.sender {
                Sender::User => "User",
                Sender::Assistant => "Assistant",
            };
            conversation.push_str(&format!("{speaker}: {}\n", turn.text));
        }
    }

    format!("{conversation}\n\nUser: {message}\n\nAssistant:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_without_history_has_no_conversation_block() {
        let prompt = build_chat_prompt("hello", &[]);
        assert!(!prompt.contains("Previous conversation:"));
        assert!(prompt.ends_with("Assistant:"));
        assert!(prompt.contains("User: hello"));
    }

    #[test]
    fn test_prompt_renders_history_in_order() {
        let history = vec![
            ChatMessage {
                text: "How do I switch careers?".to_string(),
                sender: Sender::User,
            },
            ChatMessage {
                text: "Start with a skills audit.".to_string(),
                sender: Sender::Assistant,
            },
        ];
        let prompt = build_chat_prompt("What next?", &history);
        let user_pos = prompt.find("User: How do I switch careers?").unwrap();
        let assistant_pos = prompt.find("Assistant: Start with a skills audit.").unwrap();
        assert!(user_pos < assistant_pos);
        assert!(prompt.contains("User: What next?"));
    }
}
