//! Wire types for the guidance endpoints. Field names follow the JSON the
//! frontend collaborator already consumes — snake_case inside the AI response
//! shapes, camelCase on the profile input.

use serde::{Deserialize, Serialize};

/// Three-step scale used for market demand and automation risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

/// Immutable input to career analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub education: String,
    pub work_type: String,
    pub salary_expectation: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerMatch {
    pub career_name: String,
    pub match_percentage: u8,
    pub why_match: String,
    pub required_skills: Vec<String>,
    pub skill_gap: Vec<String>,
    pub entry_salary_india: String,
    pub five_year_projection: String,
    pub market_demand: Level,
    pub automation_risk: Level,
}

/// Holds exactly 3 matches — enforced by the service, not the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerResponse {
    pub career_matches: Vec<CareerMatch>,
}

/// A learning resource. Newer model output sends name+URL pairs; older
/// roadmaps carried bare platform names, and both must keep deserializing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Resource {
    Detailed { name: String, url: String },
    Name(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub duration: String,
    pub focus: String,
    pub skills: Vec<String>,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub phase_1: RoadmapPhase,
    pub phase_2: RoadmapPhase,
    pub phase_3: RoadmapPhase,
    pub certifications: Vec<String>,
    pub project_ideas: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapResponse {
    pub roadmap: Roadmap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub detected_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub ats_score: u8,
    pub keyword_suggestions: Vec<String>,
    pub improvement_points: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serde_matches_wire_strings() {
        for (json, level) in [
            (r#""Low""#, Level::Low),
            (r#""Medium""#, Level::Medium),
            (r#""High""#, Level::High),
        ] {
            let parsed: Level = serde_json::from_str(json).unwrap();
            assert_eq!(parsed, level);
            assert_eq!(serde_json::to_string(&level).unwrap(), json);
        }
    }

    #[test]
    fn test_resource_accepts_name_url_pair() {
        let json = r#"{"name": "freeCodeCamp", "url": "https://www.freecodecamp.org/"}"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        match resource {
            Resource::Detailed { name, url } => {
                assert_eq!(name, "freeCodeCamp");
                assert_eq!(url, "https://www.freecodecamp.org/");
            }
            Resource::Name(_) => panic!("expected detailed resource"),
        }
    }

    #[test]
    fn test_resource_accepts_legacy_bare_name() {
        let resource: Resource = serde_json::from_str(r#""Coursera""#).unwrap();
        assert!(matches!(resource, Resource::Name(name) if name == "Coursera"));
    }

    #[test]
    fn test_roadmap_phase_accepts_mixed_resource_formats() {
        let json = r#"{
            "duration": "0-3 months",
            "focus": "Foundation",
            "skills": ["SQL", "Python"],
            "resources": ["YouTube", {"name": "Coursera", "url": "https://www.coursera.org/"}]
        }"#;
        let phase: RoadmapPhase = serde_json::from_str(json).unwrap();
        assert_eq!(phase.resources.len(), 2);
    }

    #[test]
    fn test_user_profile_wire_format_is_camel_case() {
        let json = r#"{
            "skills": ["Python"],
            "interests": ["AI"],
            "education": "B.Tech",
            "workType": "Remote",
            "salaryExpectation": "10 LPA",
            "location": "Pune"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.work_type, "Remote");
        assert_eq!(profile.salary_expectation, "10 LPA");
    }
}
