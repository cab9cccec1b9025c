//! Fixed sample job listings modeled on Naukri.com postings. Regenerated
//! wholesale on every cache refresh; posted dates are relative to now so the
//! listings never look stale.

use chrono::{Duration, Utc};

use crate::jobs::models::Job;

fn days_ago(days: i64) -> String {
    (Utc::now() - Duration::days(days)).format("%Y-%m-%d").to_string()
}

/// Builds the full static listing set.
pub fn sample_jobs() -> Vec<Job> {
    vec![
        // Technology
        Job {
            id: "naukri-tech-1".to_string(),
            title: "Full Stack Developer".to_string(),
            company: "Infosys Limited".to_string(),
            location: "Bangalore".to_string(),
            experience: "2-5 years".to_string(),
            salary: "8-12 LPA".to_string(),
            description: "Looking for experienced full stack developer with React, Node.js, and MongoDB expertise. Must have strong problem-solving skills.".to_string(),
            skills: vec!["React".to_string(), "Node.js".to_string(), "MongoDB".to_string(), "TypeScript".to_string(), "REST API".to_string()],
            posted_date: days_ago(2),
            apply_url: "https://www.naukri.com/full-stack-developer-jobs-in-bangalore".to_string(),
            source: "Naukri.com".to_string(),
        },
        Job {
            id: "naukri-tech-2".to_string(),
            title: "Data Scientist".to_string(),
            company: "Wipro Technologies".to_string(),
            location: "Mumbai".to_string(),
            experience: "3-6 years".to_string(),
            salary: "10-18 LPA".to_string(),
            description: "Seeking data scientist with expertise in machine learning, Python, and statistical analysis. Experience with AI/ML projects required.".to_string(),
            skills: vec!["Python".to_string(), "Machine Learning".to_string(), "TensorFlow".to_string(), "SQL".to_string(), "Statistics".to_string()],
            posted_date: days_ago(1),
            apply_url: "https://www.naukri.com/data-scientist-jobs-in-mumbai".to_string(),
            source: "Naukri.com".to_string(),
        },
        Job {
            id: "naukri-tech-3".to_string(),
            title: "DevOps Engineer".to_string(),
            company: "TCS".to_string(),
            location: "Pune".to_string(),
            experience: "3-7 years".to_string(),
            salary: "9-15 LPA".to_string(),
            description: "DevOps engineer needed for cloud infrastructure management. AWS/Azure certification preferred.".to_string(),
            skills: vec!["AWS".to_string(), "Docker".to_string(), "Kubernetes".to_string(), "CI/CD".to_string(), "Linux".to_string()],
            posted_date: days_ago(3),
            apply_url: "https://www.naukri.com/devops-engineer-jobs-in-pune".to_string(),
            source: "Naukri.com".to_string(),
        },
        // Healthcare
        Job {
            id: "naukri-health-1".to_string(),
            title: "Medical Officer".to_string(),
            company: "Apollo Hospitals".to_string(),
            location: "Mumbai".to_string(),
            experience: "2-5 years".to_string(),
            salary: "10-15 LPA".to_string(),
            description: "MBBS required with 2+ years experience in general medicine. Must have valid medical license.".to_string(),
            skills: vec!["MBBS".to_string(), "Patient Care".to_string(), "Emergency Medicine".to_string(), "Clinical Skills".to_string()],
            posted_date: days_ago(1),
            apply_url: "https://www.naukri.com/medical-officer-jobs-in-mumbai".to_string(),
            source: "Naukri.com".to_string(),
        },
        Job {
            id: "naukri-health-2".to_string(),
            title: "Senior Nurse".to_string(),
            company: "Fortis Healthcare".to_string(),
            location: "Delhi".to_string(),
            experience: "3-8 years".to_string(),
            salary: "5-8 LPA".to_string(),
            description: "B.Sc Nursing with ICU/CCU experience. Night shift flexibility required.".to_string(),
            skills: vec!["Nursing".to_string(), "Patient Care".to_string(), "ICU".to_string(), "Emergency Care".to_string()],
            posted_date: days_ago(4),
            apply_url: "https://www.naukri.com/nurse-jobs-in-delhi".to_string(),
            source: "Naukri.com".to_string(),
        },
        // Business
        Job {
            id: "naukri-business-1".to_string(),
            title: "Business Analyst".to_string(),
            company: "Deloitte India".to_string(),
            location: "Delhi".to_string(),
            experience: "2-5 years".to_string(),
            salary: "6-10 LPA".to_string(),
            description: "MBA preferred with strong analytical and communication skills. Experience in consulting preferred.".to_string(),
            skills: vec!["Business Analysis".to_string(), "SQL".to_string(), "Excel".to_string(), "PowerPoint".to_string(), "Stakeholder Management".to_string()],
            posted_date: days_ago(3),
            apply_url: "https://www.naukri.com/business-analyst-jobs-in-delhi".to_string(),
            source: "Naukri.com".to_string(),
        },
        Job {
            id: "naukri-business-2".to_string(),
            title: "Management Consultant".to_string(),
            company: "McKinsey & Company".to_string(),
            location: "Mumbai".to_string(),
            experience: "4-8 years".to_string(),
            salary: "15-25 LPA".to_string(),
            description: "Top-tier MBA required. Experience in strategy consulting and client management.".to_string(),
            skills: vec!["Strategy".to_string(), "Consulting".to_string(), "Business Planning".to_string(), "Client Management".to_string()],
            posted_date: days_ago(2),
            apply_url: "https://www.naukri.com/management-consultant-jobs-in-mumbai".to_string(),
            source: "Naukri.com".to_string(),
        },
        // Finance
        Job {
            id: "naukri-finance-1".to_string(),
            title: "Financial Analyst".to_string(),
            company: "HDFC Bank".to_string(),
            location: "Pune".to_string(),
            experience: "2-4 years".to_string(),
            salary: "5-8 LPA".to_string(),
            description: "CA/CFA with expertise in financial modeling and analysis. Banking experience preferred.".to_string(),
            skills: vec!["Financial Analysis".to_string(), "Excel".to_string(), "Financial Modeling".to_string(), "Accounting".to_string()],
            posted_date: days_ago(5),
            apply_url: "https://www.naukri.com/financial-analyst-jobs-in-pune".to_string(),
            source: "Naukri.com".to_string(),
        },
        Job {
            id: "naukri-finance-2".to_string(),
            title: "Investment Banker".to_string(),
            company: "ICICI Securities".to_string(),
            location: "Mumbai".to_string(),
            experience: "3-6 years".to_string(),
            salary: "12-20 LPA".to_string(),
            description: "MBA Finance with strong knowledge of capital markets and investment strategies.".to_string(),
            skills: vec!["Investment Banking".to_string(), "Financial Markets".to_string(), "Valuation".to_string(), "M&A".to_string()],
            posted_date: days_ago(1),
            apply_url: "https://www.naukri.com/investment-banker-jobs-in-mumbai".to_string(),
            source: "Naukri.com".to_string(),
        },
        // Education
        Job {
            id: "naukri-edu-1".to_string(),
            title: "Senior Teacher - Mathematics".to_string(),
            company: "Delhi Public School".to_string(),
            location: "Hyderabad".to_string(),
            experience: "5-10 years".to_string(),
            salary: "4-6 LPA".to_string(),
            description: "B.Ed required with 5+ years teaching experience for grades 9-12. Strong subject knowledge essential.".to_string(),
            skills: vec!["Teaching".to_string(), "Mathematics".to_string(), "Curriculum Planning".to_string(), "Student Assessment".to_string()],
            posted_date: days_ago(6),
            apply_url: "https://www.naukri.com/teacher-jobs-in-hyderabad".to_string(),
            source: "Naukri.com".to_string(),
        },
        Job {
            id: "naukri-edu-2".to_string(),
            title: "Academic Coordinator".to_string(),
            company: "Ryan International School".to_string(),
            location: "Bangalore".to_string(),
            experience: "7-12 years".to_string(),
            salary: "6-9 LPA".to_string(),
            description: "M.Ed with experience in curriculum development and teacher training.".to_string(),
            skills: vec!["Education Management".to_string(), "Curriculum Development".to_string(), "Teacher Training".to_string()],
            posted_date: days_ago(4),
            apply_url: "https://www.naukri.com/academic-coordinator-jobs-in-bangalore".to_string(),
            source: "Naukri.com".to_string(),
        },
        // Marketing
        Job {
            id: "naukri-marketing-1".to_string(),
            title: "Digital Marketing Manager".to_string(),
            company: "Flipkart".to_string(),
            location: "Bangalore".to_string(),
            experience: "3-6 years".to_string(),
            salary: "7-11 LPA".to_string(),
            description: "Experience in SEO, SEM, social media marketing and analytics. E-commerce experience preferred.".to_string(),
            skills: vec!["Digital Marketing".to_string(), "SEO".to_string(), "SEM".to_string(), "Google Analytics".to_string(), "Social Media".to_string()],
            posted_date: days_ago(2),
            apply_url: "https://www.naukri.com/digital-marketing-manager-jobs-in-bangalore".to_string(),
            source: "Naukri.com".to_string(),
        },
        Job {
            id: "naukri-marketing-2".to_string(),
            title: "Brand Manager".to_string(),
            company: "Hindustan Unilever".to_string(),
            location: "Mumbai".to_string(),
            experience: "4-7 years".to_string(),
            salary: "10-16 LPA".to_string(),
            description: "MBA Marketing with experience in brand strategy and product launches.".to_string(),
            skills: vec!["Brand Management".to_string(), "Marketing Strategy".to_string(), "Product Launch".to_string(), "Market Research".to_string()],
            posted_date: days_ago(3),
            apply_url: "https://www.naukri.com/brand-manager-jobs-in-mumbai".to_string(),
            source: "Naukri.com".to_string(),
        },
        // Design
        Job {
            id: "naukri-design-1".to_string(),
            title: "UI/UX Designer".to_string(),
            company: "Zomato".to_string(),
            location: "Remote".to_string(),
            experience: "2-5 years".to_string(),
            salary: "6-9 LPA".to_string(),
            description: "Portfolio required. Proficiency in Figma, Adobe XD, and user research methodologies.".to_string(),
            skills: vec!["UI Design".to_string(), "UX Design".to_string(), "Figma".to_string(), "Adobe XD".to_string(), "User Research".to_string()],
            posted_date: days_ago(1),
            apply_url: "https://www.naukri.com/ui-ux-designer-jobs".to_string(),
            source: "Naukri.com".to_string(),
        },
        Job {
            id: "naukri-design-2".to_string(),
            title: "Graphic Designer".to_string(),
            company: "Ogilvy India".to_string(),
            location: "Delhi".to_string(),
            experience: "2-4 years".to_string(),
            salary: "4-7 LPA".to_string(),
            description: "Creative designer needed for advertising campaigns. Adobe Creative Suite expertise required.".to_string(),
            skills: vec!["Graphic Design".to_string(), "Adobe Photoshop".to_string(), "Illustrator".to_string(), "InDesign".to_string(), "Branding".to_string()],
            posted_date: days_ago(5),
            apply_url: "https://www.naukri.com/graphic-designer-jobs-in-delhi".to_string(),
            source: "Naukri.com".to_string(),
        },
        // Sales
        Job {
            id: "naukri-sales-1".to_string(),
            title: "Sales Executive".to_string(),
            company: "Tata Motors".to_string(),
            location: "Chennai".to_string(),
            experience: "1-3 years".to_string(),
            salary: "3-5 LPA + Incentives".to_string(),
            description: "Strong communication skills, target-oriented with automotive industry knowledge preferred.".to_string(),
            skills: vec!["Sales".to_string(), "Communication".to_string(), "Negotiation".to_string(), "Customer Relationship".to_string()],
            posted_date: days_ago(1),
            apply_url: "https://www.naukri.com/sales-executive-jobs-in-chennai".to_string(),
            source: "Naukri.com".to_string(),
        },
        Job {
            id: "naukri-sales-2".to_string(),
            title: "Business Development Manager".to_string(),
            company: "Byju's".to_string(),
            location: "Bangalore".to_string(),
            experience: "3-6 years".to_string(),
            salary: "6-10 LPA + Incentives".to_string(),
            description: "B2B sales experience required. EdTech industry experience is a plus.".to_string(),
            skills: vec!["Business Development".to_string(), "B2B Sales".to_string(), "Lead Generation".to_string(), "Client Acquisition".to_string()],
            posted_date: days_ago(2),
            apply_url: "https://www.naukri.com/business-development-manager-jobs-in-bangalore".to_string(),
            source: "Naukri.com".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_set_is_nonempty_with_unique_ids() {
        let jobs = sample_jobs();
        assert!(!jobs.is_empty());
        let mut ids: Vec<_> = jobs.iter().map(|j| j.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), jobs.len(), "job ids must be unique");
    }

    #[test]
    fn test_every_job_is_fully_populated() {
        for job in sample_jobs() {
            assert!(!job.title.is_empty());
            assert!(!job.company.is_empty());
            assert!(!job.location.is_empty());
            assert!(!job.skills.is_empty());
            assert!(job.apply_url.starts_with("https://"));
            assert_eq!(job.source, "Naukri.com");
        }
    }
}
