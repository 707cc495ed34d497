use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: Company,
    pub location: Option<String>,
    pub remote: bool,
    pub employment_type: String, // "FULL_TIME", "CONTRACT", etc.
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub currency: String,
    pub skills: Vec<String>, // order matters: the card shows the first few
    pub description: String,
    pub requirements: Vec<String>,
    pub match_score: Option<u8>, // 0-100, mock origin
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,  // pass
    Right, // apply
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Viewed,
    Interview,
    Rejected,
    Offer,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Viewed => "viewed",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Offer => "offer",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SkillGapProgress {
    pub completed: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedJob {
    pub id: String,
    pub title: String,
    pub company: String, // flattened name, not a reference
    pub applied_at: String,
    pub match_strength: u8,
    pub status: ApplicationStatus,
    pub skill_gap: SkillGapProgress,
    pub estimated_response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
    pub provider: String, // "google", "github", "demo", etc.
    pub has_completed_onboarding: bool,
}
