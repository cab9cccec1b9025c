//! Assistant chat service. Upstream failures never surface here: the chat
//! widget degrades to a local keyword-matched tip sheet instead of an error.

use tracing::warn;

use crate::assistant::{prompts, ChatMessage};
use crate::llm_client::AiBackend;

pub async fn get_assistant_response(
    backend: &dyn AiBackend,
    message: &str,
    history: &[ChatMessage],
) -> String {
    let prompt = prompts::build_chat_prompt(message, history);

    match backend.generate(prompts::ASSISTANT_SYSTEM, &prompt).await {
        Ok(response) => response.trim().to_string(),
        Err(e) => {
            warn!("Assistant backend failed, using local fallback: {e}");
            fallback_response(message).to_string()
        }
    }
}

struct FallbackRule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

/// Ordered keyword table for offline replies — first match wins.
const FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule {
        keywords: &["resume", "cv"],
        reply: RESUME_FALLBACK,
    },
    FallbackRule {
        keywords: &["job", "career"],
        reply: CAREER_FALLBACK,
    },
    FallbackRule {
        keywords: &["interview"],
        reply: INTERVIEW_FALLBACK,
    },
    FallbackRule {
        keywords: &["salary", "lpa"],
        reply: SALARY_FALLBACK,
    },
];

/// Picks a canned reply for the raw user message (not the built prompt, which
/// would always match "career" from the platform name).
fn fallback_response(message: &str) -> &'static str {
    let message = message.to_lowercase();
    FALLBACK_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| message.contains(kw)))
        .map(|rule| rule.reply)
        .unwrap_or(GENERIC_FALLBACK)
}

const RESUME_FALLBACK: &str = "Great question about resumes! Here are some key tips:

• Use a clean, ATS-friendly format
• Start with a strong summary highlighting your key skills
• Quantify achievements with numbers and metrics
• Tailor your resume for each job application
• Include relevant keywords from the job description
• Keep it to 1-2 pages maximum

Try our Resume Analyzer tool to get detailed feedback on your resume!";

const CAREER_FALLBACK: &str = "I can help you with your career journey! Here's what I suggest:

• Use our Profile Analysis to discover careers that match your skills
• Check the Jobs section for latest opportunities across all industries
• Build a strong LinkedIn profile and network actively
• Tailor your applications to each role
• Prepare thoroughly for interviews

What specific aspect would you like to focus on?";

const INTERVIEW_FALLBACK: &str = "Interview preparation is crucial! Here are my top tips:

• Research the company thoroughly
• Practice common interview questions
• Prepare STAR method examples (Situation, Task, Action, Result)
• Dress professionally and arrive early
• Ask thoughtful questions about the role
• Follow up with a thank-you email

Would you like specific tips for any type of interview?";

const SALARY_FALLBACK: &str = "Salary expectations in India vary by role, experience, and location. Here's a general guide:

• Entry-level (0-2 years): 3-6 LPA
• Mid-level (3-5 years): 6-12 LPA
• Senior (5-10 years): 12-25 LPA
• Leadership (10+ years): 25+ LPA

These vary significantly by:
- Industry (Tech, Finance pay higher)
- Location (Metro cities pay more)
- Company size (MNCs vs startups)
- Your specific skills and expertise

Use our Career Analysis tool to get salary insights for specific roles!";

const GENERIC_FALLBACK: &str = "I'm here to help with your career! I can assist with:

• Career planning and guidance
• Job search strategies
• Resume and interview tips
• Skill development advice
• Industry insights

What would you like to know more about?";
