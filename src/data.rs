use chrono::{Duration, Utc};

use crate::models::{AppliedJob, ApplicationStatus, Company, Job, SkillGapProgress};

/// The hard-coded recommendation catalog. There is no backend behind this;
/// the whole product runs off this table.
pub fn recommended_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "1".to_string(),
            title: "Senior React Developer".to_string(),
            company: Company {
                name: "TechCorp Inc.".to_string(),
                logo: Some("https://via.placeholder.com/40x40/6366f1/ffffff?text=TC".to_string()),
            },
            location: Some("San Francisco, CA".to_string()),
            remote: true,
            employment_type: "FULL_TIME".to_string(),
            salary_min: Some(120_000),
            salary_max: Some(160_000),
            currency: "USD".to_string(),
            skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Node.js".to_string(),
                "GraphQL".to_string(),
                "AWS".to_string(),
                "Docker".to_string(),
            ],
            description: "We are looking for a Senior React Developer to join our growing team. \
                You will be responsible for building scalable web applications using modern React \
                patterns and best practices. Our tech stack includes React, TypeScript, Node.js, and AWS."
                .to_string(),
            requirements: vec![
                "5+ years of React development experience".to_string(),
                "Strong TypeScript and JavaScript skills".to_string(),
                "Experience with modern React patterns (hooks, context)".to_string(),
                "Knowledge of GraphQL and REST APIs".to_string(),
                "Experience with testing frameworks (Jest, React Testing Library)".to_string(),
            ],
            match_score: Some(94),
            deadline: None,
        },
        Job {
            id: "2".to_string(),
            title: "Full Stack Engineer".to_string(),
            company: Company {
                name: "StartupXYZ".to_string(),
                logo: Some("https://via.placeholder.com/40x40/10b981/ffffff?text=SX".to_string()),
            },
            location: Some("New York, NY".to_string()),
            remote: false,
            employment_type: "FULL_TIME".to_string(),
            salary_min: Some(100_000),
            salary_max: Some(140_000),
            currency: "USD".to_string(),
            skills: vec![
                "Python".to_string(),
                "Django".to_string(),
                "React".to_string(),
                "PostgreSQL".to_string(),
                "Redis".to_string(),
                "Kubernetes".to_string(),
            ],
            description: "Join our fast-paced startup as a Full Stack Engineer! You'll work on \
                both frontend and backend systems, helping us scale our platform to millions of \
                users. We value innovation, collaboration, and continuous learning."
                .to_string(),
            requirements: vec![
                "3+ years of full-stack development".to_string(),
                "Proficiency in Python and Django".to_string(),
                "Frontend experience with React or Vue.js".to_string(),
                "Database design and optimization skills".to_string(),
                "Experience with cloud platforms (AWS, GCP, or Azure)".to_string(),
            ],
            match_score: Some(87),
            deadline: None,
        },
        Job {
            id: "3".to_string(),
            title: "Frontend Developer".to_string(),
            company: Company {
                name: "DesignStudio Pro".to_string(),
                logo: Some("https://via.placeholder.com/40x40/f59e0b/ffffff?text=DS".to_string()),
            },
            location: Some("Austin, TX".to_string()),
            remote: true,
            employment_type: "CONTRACT".to_string(),
            salary_min: Some(80_000),
            salary_max: Some(110_000),
            currency: "USD".to_string(),
            skills: vec![
                "Vue.js".to_string(),
                "Nuxt.js".to_string(),
                "SCSS".to_string(),
                "Figma".to_string(),
                "Animation".to_string(),
                "WebGL".to_string(),
            ],
            description: "We're seeking a creative Frontend Developer to bring beautiful designs \
                to life. You'll work closely with our design team to create engaging, interactive \
                web experiences that delight our users."
                .to_string(),
            requirements: vec![
                "4+ years of frontend development experience".to_string(),
                "Expert-level Vue.js and Nuxt.js skills".to_string(),
                "Strong CSS/SCSS and responsive design skills".to_string(),
                "Experience with animation libraries (GSAP, Framer Motion)".to_string(),
                "Knowledge of WebGL and Three.js is a plus".to_string(),
            ],
            match_score: Some(76),
            deadline: None,
        },
        Job {
            id: "4".to_string(),
            title: "DevOps Engineer".to_string(),
            company: Company {
                name: "CloudScale Solutions".to_string(),
                logo: Some("https://via.placeholder.com/40x40/8b5cf6/ffffff?text=CS".to_string()),
            },
            location: Some("Seattle, WA".to_string()),
            remote: true,
            employment_type: "FULL_TIME".to_string(),
            salary_min: Some(130_000),
            salary_max: Some(170_000),
            currency: "USD".to_string(),
            skills: vec![
                "Kubernetes".to_string(),
                "Terraform".to_string(),
                "AWS".to_string(),
                "CI/CD".to_string(),
                "Prometheus".to_string(),
                "Go".to_string(),
            ],
            description: "Help us build and operate the infrastructure that powers thousands of \
                customer workloads. You'll own our Kubernetes platform, improve our deployment \
                pipelines, and keep reliability high as we scale."
                .to_string(),
            requirements: vec![
                "Deep Kubernetes and container experience".to_string(),
                "Infrastructure-as-code with Terraform".to_string(),
                "Production AWS experience".to_string(),
                "Comfort owning on-call and incident response".to_string(),
            ],
            match_score: Some(81),
            deadline: None,
        },
        Job {
            id: "5".to_string(),
            title: "Senior Full Stack Developer".to_string(),
            company: Company {
                name: "Microsoft".to_string(),
                logo: Some("https://via.placeholder.com/48x48/0078d4/ffffff?text=M".to_string()),
            },
            location: Some("Bangalore, India".to_string()),
            remote: true,
            employment_type: "FULL_TIME".to_string(),
            salary_min: Some(2_500_000),
            salary_max: Some(3_500_000),
            currency: "INR".to_string(),
            skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Node.js".to_string(),
                "React Native".to_string(),
                "AWS".to_string(),
            ],
            description: "Join Microsoft's innovative team building next-generation cloud \
                solutions. Work on cutting-edge projects with React, TypeScript, and Azure \
                technologies."
                .to_string(),
            requirements: vec![
                "5+ years React experience".to_string(),
                "TypeScript expertise".to_string(),
                "Node.js backend experience".to_string(),
            ],
            match_score: Some(67),
            deadline: Some("2024-02-15".to_string()),
        },
    ]
}

/// Applications the demo account starts with, so the tracker sidebar has
/// something to show before the first right-swipe.
pub fn seeded_applications() -> Vec<AppliedJob> {
    let now = Utc::now();
    vec![
        AppliedJob {
            id: "101".to_string(),
            title: "Frontend Developer".to_string(),
            company: "Swiggy".to_string(),
            applied_at: (now - Duration::days(2)).to_rfc3339(),
            match_strength: 94,
            status: ApplicationStatus::Interview,
            skill_gap: SkillGapProgress {
                completed: 3,
                total: 5,
            },
            estimated_response: "2 days".to_string(),
        },
        AppliedJob {
            id: "102".to_string(),
            title: "Backend Engineer".to_string(),
            company: "CRED".to_string(),
            applied_at: (now - Duration::days(7)).to_rfc3339(),
            match_strength: 78,
            status: ApplicationStatus::Applied,
            skill_gap: SkillGapProgress {
                completed: 1,
                total: 5,
            },
            estimated_response: "3 days".to_string(),
        },
        AppliedJob {
            id: "103".to_string(),
            title: "DevOps Engineer".to_string(),
            company: "Razorpay".to_string(),
            applied_at: (now - Duration::days(3)).to_rfc3339(),
            match_strength: 85,
            status: ApplicationStatus::Viewed,
            skill_gap: SkillGapProgress {
                completed: 2,
                total: 5,
            },
            estimated_response: "5 days".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let jobs = recommended_jobs();
        let mut ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn test_seeded_applications_have_valid_progress() {
        for record in seeded_applications() {
            assert!(record.skill_gap.completed <= record.skill_gap.total);
            assert!(record.match_strength <= 100);
        }
    }
}
