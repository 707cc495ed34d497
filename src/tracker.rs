use crate::models::{AppliedJob, ApplicationStatus, Job, SkillGapProgress};
use crate::services::Simulation;

pub const SKILL_GAP_TOTAL: u32 = 5;
const DEFAULT_MATCH_STRENGTH: u8 = 67;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerStats {
    pub pending: usize,    // status == applied
    pub interviews: usize, // status == interview
    pub avg_match: u32,    // 0 when there are no records
}

/// Client-local bookkeeping of jobs the user applied to. Records are
/// front-appended; nothing here is persisted.
pub struct ApplicationTracker {
    records: Vec<AppliedJob>,
}

impl ApplicationTracker {
    pub fn new(seed: Vec<AppliedJob>) -> Self {
        Self { records: seed }
    }

    pub fn records(&self) -> &[AppliedJob] {
        &self.records
    }

    /// Create the record for a right-swiped job and put it at the front of
    /// the list. Match strength comes from the job's (mock) match score.
    pub fn record_application(&mut self, job: &Job, sim: &mut dyn Simulation) -> &AppliedJob {
        let record = AppliedJob {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.name.clone(),
            applied_at: chrono::Utc::now().to_rfc3339(),
            match_strength: job.match_score.unwrap_or(DEFAULT_MATCH_STRENGTH),
            status: ApplicationStatus::Applied,
            skill_gap: SkillGapProgress {
                completed: sim.initial_tasks_done().min(SKILL_GAP_TOTAL),
                total: SKILL_GAP_TOTAL,
            },
            estimated_response: format!("{} days", sim.response_estimate_days()),
        };
        self.records.insert(0, record);
        &self.records[0]
    }

    /// Mark one learning task done on a single application, nudging its
    /// match strength up. Unknown ids are ignored.
    pub fn complete_task(&mut self, id: &str, sim: &mut dyn Simulation) {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return;
        };
        record.skill_gap.completed = (record.skill_gap.completed + 1).min(record.skill_gap.total);
        record.match_strength = record
            .match_strength
            .saturating_add(sim.match_boost())
            .min(100);
    }

    pub fn stats(&self) -> TrackerStats {
        let pending = self
            .records
            .iter()
            .filter(|r| r.status == ApplicationStatus::Applied)
            .count();
        let interviews = self
            .records
            .iter()
            .filter(|r| r.status == ApplicationStatus::Interview)
            .count();
        let avg_match = if self.records.is_empty() {
            0
        } else {
            let total: u32 = self.records.iter().map(|r| r.match_strength as u32).sum();
            (total as f64 / self.records.len() as f64).round() as u32
        };
        TrackerStats {
            pending,
            interviews,
            avg_match,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Company;
    use crate::services::FixedSimulation;

    fn job(id: &str, score: Option<u8>) -> Job {
        Job {
            id: id.to_string(),
            title: format!("Job {}", id),
            company: Company {
                name: "TestCorp".to_string(),
                logo: None,
            },
            location: None,
            remote: true,
            employment_type: "FULL_TIME".to_string(),
            salary_min: None,
            salary_max: None,
            currency: "USD".to_string(),
            skills: vec![],
            description: String::new(),
            requirements: vec![],
            match_score: score,
            deadline: None,
        }
    }

    fn sim() -> FixedSimulation {
        FixedSimulation {
            days: 4,
            tasks_done: 1,
            boost: 10,
        }
    }

    #[test]
    fn test_record_application_front_appends() {
        let mut tracker = ApplicationTracker::new(vec![]);
        let mut sim = sim();

        tracker.record_application(&job("a", Some(90)), &mut sim);
        tracker.record_application(&job("b", Some(70)), &mut sim);

        assert_eq!(tracker.records().len(), 2);
        assert_eq!(tracker.records()[0].id, "b");
        assert_eq!(tracker.records()[1].id, "a");

        let latest = &tracker.records()[0];
        assert_eq!(latest.match_strength, 70);
        assert_eq!(latest.status, ApplicationStatus::Applied);
        assert_eq!(latest.skill_gap.completed, 1);
        assert_eq!(latest.skill_gap.total, SKILL_GAP_TOTAL);
        assert_eq!(latest.estimated_response, "4 days");
    }

    #[test]
    fn test_missing_match_score_falls_back_to_default() {
        let mut tracker = ApplicationTracker::new(vec![]);
        let mut sim = sim();
        tracker.record_application(&job("a", None), &mut sim);
        assert_eq!(tracker.records()[0].match_strength, 67);
    }

    #[test]
    fn test_complete_task_targets_one_record() {
        let mut tracker = ApplicationTracker::new(vec![]);
        let mut sim = sim();
        tracker.record_application(&job("a", Some(60)), &mut sim);
        tracker.record_application(&job("b", Some(60)), &mut sim);

        tracker.complete_task("a", &mut sim);

        let a = tracker.records().iter().find(|r| r.id == "a").unwrap();
        let b = tracker.records().iter().find(|r| r.id == "b").unwrap();
        assert_eq!(a.skill_gap.completed, 2);
        assert_eq!(a.match_strength, 70);
        assert_eq!(b.skill_gap.completed, 1);
        assert_eq!(b.match_strength, 60);

        // Unknown id is a quiet no-op.
        tracker.complete_task("zzz", &mut sim);
        assert_eq!(tracker.records().len(), 2);
    }

    #[test]
    fn test_complete_task_caps_progress_and_strength() {
        let mut tracker = ApplicationTracker::new(vec![]);
        let mut sim = FixedSimulation {
            days: 4,
            tasks_done: 0,
            boost: 50,
        };
        tracker.record_application(&job("a", Some(95)), &mut sim);

        for _ in 0..10 {
            tracker.complete_task("a", &mut sim);
        }

        let a = &tracker.records()[0];
        assert_eq!(a.skill_gap.completed, SKILL_GAP_TOTAL);
        assert_eq!(a.match_strength, 100);
    }

    #[test]
    fn test_stats_average_and_counts() {
        let mut tracker = ApplicationTracker::new(vec![]);
        let mut sim = sim();
        tracker.record_application(&job("a", Some(70)), &mut sim);
        tracker.record_application(&job("b", Some(90)), &mut sim);

        let stats = tracker.stats();
        assert_eq!(stats.avg_match, 80);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.interviews, 0);
    }

    #[test]
    fn test_stats_on_empty_tracker_are_defined() {
        let tracker = ApplicationTracker::new(vec![]);
        assert!(tracker.records().is_empty());
        let stats = tracker.stats();
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.interviews, 0);
        assert_eq!(stats.avg_match, 0);
    }
}
