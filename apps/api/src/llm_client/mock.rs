//! Mock AI — deterministic canned responses for offline testing.
//!
//! Dispatch is an ordered table of (predicate, responder) pairs; the first
//! matching rule wins, in source order. Content selection is keyed purely on
//! substring presence in the prompts, mirroring how the domain services phrase
//! their requests.

use async_trait::async_trait;
use serde_json::json;
use tokio::time::{sleep, Duration};
use tracing::debug;

use crate::llm_client::{AiBackend, AiError};

/// Simulated upstream latency.
const MOCK_LATENCY: Duration = Duration::from_millis(1000);

/// Deterministic stand-in for `GeminiClient`.
pub struct MockAi;

#[async_trait]
impl AiBackend for MockAi {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AiError> {
        debug!("Using mock AI backend");
        sleep(MOCK_LATENCY).await;
        Ok(dispatch(system_prompt, user_prompt))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Top-level dispatch table
// ────────────────────────────────────────────────────────────────────────────

struct MockRule {
    applies: fn(system_prompt: &str, user_prompt: &str) -> bool,
    respond: fn(system_prompt: &str, user_prompt: &str) -> String,
}

const MOCK_RULES: &[MockRule] = &[
    MockRule {
        applies: is_career_request,
        respond: career_response,
    },
    MockRule {
        applies: is_roadmap_request,
        respond: roadmap_response,
    },
    MockRule {
        applies: is_resume_request,
        respond: resume_response,
    },
    MockRule {
        applies: is_chat_request,
        respond: chat_response,
    },
];

/// Runs the ordered rule table; unmatched prompts get the error payload.
pub fn dispatch(system_prompt: &str, user_prompt: &str) -> String {
    MOCK_RULES
        .iter()
        .find(|rule| (rule.applies)(system_prompt, user_prompt))
        .map(|rule| (rule.respond)(system_prompt, user_prompt))
        .unwrap_or_else(|| json!({"error": "Unknown request type"}).to_string())
}

fn is_career_request(_system: &str, user: &str) -> bool {
    user.contains("Analyze the following profile")
}

fn is_roadmap_request(_system: &str, user: &str) -> bool {
    user.contains("Create a detailed 12-month roadmap")
}

fn is_resume_request(_system: &str, user: &str) -> bool {
    user.contains("Analyze this resume")
}

fn is_chat_request(system: &str, user: &str) -> bool {
    user.contains("Assistant:") || system.contains("Career Assistant")
}

// ────────────────────────────────────────────────────────────────────────────
// Structured payloads
// ────────────────────────────────────────────────────────────────────────────

fn career_response(_system: &str, _user: &str) -> String {
    json!({
        "career_matches": [
            {
                "career_name": "Full Stack Developer",
                "match_percentage": 88,
                "why_match": "Your skills in JavaScript and React align perfectly with full-stack development. The combination of frontend and backend technologies makes you an ideal candidate for this role.",
                "required_skills": ["JavaScript", "React", "Node.js", "MongoDB", "REST APIs", "Git"],
                "skill_gap": ["MongoDB", "REST APIs"],
                "entry_salary_india": "6-8 LPA",
                "five_year_projection": "15-25 LPA",
                "market_demand": "High",
                "automation_risk": "Low"
            },
            {
                "career_name": "Frontend Developer",
                "match_percentage": 85,
                "why_match": "Your strong foundation in React and JavaScript makes you well-suited for frontend development. Your interest in web development aligns with this career path.",
                "required_skills": ["JavaScript", "React", "HTML", "CSS", "TypeScript", "Redux"],
                "skill_gap": ["TypeScript", "Redux"],
                "entry_salary_india": "5-7 LPA",
                "five_year_projection": "12-20 LPA",
                "market_demand": "High",
                "automation_risk": "Low"
            },
            {
                "career_name": "React Developer",
                "match_percentage": 82,
                "why_match": "Your expertise in React positions you well for specialized React development roles. Companies are actively seeking React specialists for modern web applications.",
                "required_skills": ["React", "JavaScript", "Redux", "Next.js", "Testing"],
                "skill_gap": ["Next.js", "Testing"],
                "entry_salary_india": "6-9 LPA",
                "five_year_projection": "14-22 LPA",
                "market_demand": "High",
                "automation_risk": "Low"
            }
        ]
    })
    .to_string()
}

fn roadmap_response(_system: &str, _user: &str) -> String {
    json!({
        "roadmap": {
            "phase_1": {
                "duration": "0-3 months",
                "focus": "Foundation Building",
                "skills": ["Core JavaScript", "HTML5 & CSS3", "Git & GitHub", "Basic React", "Responsive Design"],
                "resources": [
                    { "name": "freeCodeCamp", "url": "https://www.freecodecamp.org/" },
                    { "name": "MDN Web Docs", "url": "https://developer.mozilla.org/" },
                    { "name": "YouTube - Traversy Media", "url": "https://www.youtube.com/@TraversyMedia" },
                    { "name": "Codecademy", "url": "https://www.codecademy.com/" }
                ]
            },
            "phase_2": {
                "duration": "3-6 months",
                "focus": "Advanced Development",
                "skills": ["Advanced React", "State Management", "REST APIs", "Node.js Basics", "Database Fundamentals"],
                "resources": [
                    { "name": "React Documentation", "url": "https://react.dev/" },
                    { "name": "Udemy", "url": "https://www.udemy.com/" },
                    { "name": "Coursera", "url": "https://www.coursera.org/" },
                    { "name": "Scrimba", "url": "https://scrimba.com/" }
                ]
            },
            "phase_3": {
                "duration": "6-12 months",
                "focus": "Professional Skills",
                "skills": ["Full Stack Integration", "Testing", "Deployment", "CI/CD", "System Design"],
                "resources": [
                    { "name": "Vercel Docs", "url": "https://vercel.com/docs" },
                    { "name": "Netlify", "url": "https://www.netlify.com/" },
                    { "name": "GitHub Actions", "url": "https://github.com/features/actions" },
                    { "name": "LeetCode", "url": "https://leetcode.com/" }
                ]
            },
            "certifications": [
                "Meta Front-End Developer Certificate",
                "AWS Certified Cloud Practitioner",
                "MongoDB Developer Certification",
                "Google Cloud Associate",
                "Microsoft Azure Fundamentals"
            ],
            "project_ideas": [
                "Build a full-stack e-commerce platform with payment integration",
                "Create a real-time chat application with WebSocket",
                "Develop a project management tool with team collaboration features"
            ]
        }
    })
    .to_string()
}

fn resume_response(_system: &str, user: &str) -> String {
    json!({
        "detected_skills": ["JavaScript", "React", "Node.js", "HTML", "CSS", "Git", "MongoDB", "Express", "Problem Solving", "Communication"],
        "missing_skills": ["TypeScript", "Testing (Jest/Mocha)", "Docker", "AWS/Cloud", "CI/CD", "System Design", "Microservices", "GraphQL"],
        "ats_score": ats_score_for(user),
        "keyword_suggestions": ["TypeScript", "Jest", "React Testing Library", "AWS Lambda", "Docker", "Kubernetes", "Agile/Scrum"],
        "improvement_points": [
            "Add quantifiable achievements with metrics (e.g., 'Improved performance by 40%', 'Reduced load time by 2 seconds')",
            "Include TypeScript experience - it's highly sought after in modern development roles",
            "Add testing frameworks and methodologies (Jest, React Testing Library, TDD)",
            "Mention cloud platform experience (AWS, Azure, or GCP) with specific services used",
            "Include soft skills like team collaboration, leadership, and communication",
            "Add links to GitHub portfolio with live project demos",
            "Use strong action verbs at the start of bullet points (Developed, Implemented, Optimized, Led)"
        ]
    })
    .to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// ATS scoring heuristic
// ────────────────────────────────────────────────────────────────────────────

const ATS_BASE_SCORE: u32 = 50;
const ATS_SCORE_CAP: u32 = 95;

/// Keyword groups and their point values. Each group scores at most once,
/// regardless of how many of its keywords appear.
const ATS_KEYWORD_GROUPS: &[(&[&str], u32)] = &[
    (&["experience", "worked"], 10),
    (&["project", "developed"], 8),
    (&["education", "degree"], 7),
    (&["skill", "technology"], 10),
    (&["achievement", "improved"], 8),
    (&["team", "collaboration"], 5),
    (&["github", "portfolio"], 7),
];

/// Additive keyword-presence score, capped at 95.
/// The constants match the behavior the frontend was tuned against; do not
/// adjust them without re-checking the score ranges it displays.
pub fn ats_score_for(text: &str) -> u32 {
    let text = text.to_lowercase();
    let earned: u32 = ATS_KEYWORD_GROUPS
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|kw| text.contains(kw)))
        .map(|(_, points)| points)
        .sum();
    (ATS_BASE_SCORE + earned).min(ATS_SCORE_CAP)
}

// ────────────────────────────────────────────────────────────────────────────
// Assistant chat dispatch table
// ────────────────────────────────────────────────────────────────────────────

struct ChatRule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

/// Ordered keyword table for chat replies — first match wins.
const CHAT_RULES: &[ChatRule] = &[
    ChatRule {
        keywords: &["resume", "cv"],
        reply: RESUME_TIPS,
    },
    ChatRule {
        keywords: &["job", "career", "work"],
        reply: CAREER_TIPS,
    },
    ChatRule {
        keywords: &["interview"],
        reply: INTERVIEW_TIPS,
    },
    ChatRule {
        keywords: &["salary", "lpa", "pay"],
        reply: SALARY_TIPS,
    },
    ChatRule {
        keywords: &["skill", "learn", "course"],
        reply: LEARNING_TIPS,
    },
    ChatRule {
        keywords: &["hello", "hi", "hey"],
        reply: GREETING,
    },
];

fn chat_response(_system: &str, user: &str) -> String {
    let message = user.to_lowercase();
    CHAT_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| message.contains(kw)))
        .map(|rule| rule.reply)
        .unwrap_or(CHAT_FALLBACK)
        .to_string()
}

pub(crate) const RESUME_TIPS: &str = "Great question about resumes! Here are some key tips for creating an ATS-friendly resume:

✓ Use a clean, simple format without tables or graphics
✓ Start with a strong professional summary
✓ Quantify your achievements with numbers (e.g., \"Increased sales by 30%\")
✓ Include relevant keywords from the job description
✓ Use standard section headings (Experience, Education, Skills)
✓ Keep it to 1-2 pages maximum
✓ Save as .docx or .pdf format

Try our Resume Analyzer tool to get a detailed ATS score and personalized feedback on your resume!";

pub(crate) const CAREER_TIPS: &str = "I can definitely help you with your career journey! Here's my advice:

🎯 Career Planning:
• Use our Profile Analysis to discover careers matching your skills
• Check the Jobs section for latest opportunities across all industries
• Build a strong online presence (LinkedIn, GitHub for tech roles)

📝 Job Search Strategy:
• Tailor your resume for each application
• Network actively - 70% of jobs are filled through networking
• Apply to 10-15 jobs per week consistently
• Follow up on applications after 1 week

💼 Interview Prep:
• Research the company thoroughly
• Practice STAR method for behavioral questions
• Prepare 3-5 questions to ask the interviewer

What specific aspect would you like to focus on?";

pub(crate) const INTERVIEW_TIPS: &str = "Interview preparation is crucial for success! Here's a comprehensive guide:

🎯 Before the Interview:
• Research the company, its products, and recent news
• Review the job description and match your experience
• Prepare 5-7 STAR method examples
• Practice common questions with a friend
• Plan your outfit and route (arrive 10-15 mins early)

💬 During the Interview:
• Make eye contact and smile
• Listen carefully before answering
• Use specific examples from your experience
• Ask thoughtful questions about the role and team
• Show enthusiasm for the opportunity

📧 After the Interview:
• Send a thank-you email within 24 hours
• Reiterate your interest in the role
• Follow up after 1 week if no response

Would you like tips for any specific type of interview (technical, behavioral, HR)?";

pub(crate) const SALARY_TIPS: &str = "Salary expectations in India vary by role, experience, and location. Here's a realistic guide:

💰 By Experience Level:
• Entry-level (0-2 years): 3-6 LPA
• Mid-level (3-5 years): 6-15 LPA
• Senior (5-10 years): 15-30 LPA
• Leadership (10+ years): 30+ LPA

📊 Factors Affecting Salary:
• Industry (Tech, Finance, Consulting pay higher)
• Location (Bangalore, Mumbai, Delhi pay 20-30% more)
• Company size (MNCs typically pay more than startups)
• Your specific skills and expertise
• Negotiation skills

💡 Negotiation Tips:
• Research market rates on Glassdoor, AmbitionBox
• Know your worth - list your achievements
• Consider total compensation (bonus, stocks, benefits)
• Be prepared to justify your ask with data
• Don't accept the first offer immediately

Use our Career Analysis tool to get salary insights for specific roles!";

pub(crate) const LEARNING_TIPS: &str = "Skill development is key to career growth! Here's how to approach it:

🎯 Identify Skills to Learn:
• Check job descriptions for your target role
• Use our Career Matching tool to find skill gaps
• Focus on high-demand skills in your industry

📚 Learning Resources:
• Free: YouTube, freeCodeCamp, Coursera (audit mode)
• Paid: Udemy, Pluralsight, LinkedIn Learning
• Practice: LeetCode, HackerRank, GitHub projects

⏰ Learning Strategy:
• Dedicate 1-2 hours daily consistently
• Build projects to apply what you learn
• Join communities (Discord, Reddit, LinkedIn groups)
• Share your learning journey on social media

🏆 Certifications Worth Pursuing:
• Tech: AWS, Google Cloud, Microsoft Azure
• Data: Google Data Analytics, IBM Data Science
• Business: Google Project Management, HubSpot
• Design: Google UX Design, Adobe Certified

Check our Roadmap View for structured learning paths!";

pub(crate) const GREETING: &str = "Hello! 👋 I'm your Career Assistant, here to help you succeed!

I can assist you with:
• 🎯 Career planning and guidance
• 💼 Job search strategies
• 📝 Resume and cover letter tips
• 🎤 Interview preparation
• 📚 Skill development advice
• 💰 Salary negotiation tips
• 🏢 Industry insights

What would you like to know more about today?";

pub(crate) const CHAT_FALLBACK: &str = "I'm here to help with your career! I can provide guidance on:

• Career planning and path selection
• Job search and application strategies
• Resume writing and optimization
• Interview preparation and tips
• Skill development and learning resources
• Salary expectations and negotiation
• Industry trends and insights

You can also explore our platform features:
• Profile Analysis - Find careers matching your skills
• Jobs Section - Browse latest opportunities
• Resume Analyzer - Get ATS score and feedback
• Roadmap View - Structured learning paths

What specific area would you like help with?";
