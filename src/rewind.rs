use std::collections::VecDeque;

use crate::models::Job;

pub const HISTORY_LIMIT: usize = 5;
pub const STARTING_CREDITS: u32 = 3;

/// Recently passed jobs, most recent first, plus the credit pool that gates
/// bringing one back. Credits only ever go down; there is no replenishment.
pub struct RewindLedger {
    history: VecDeque<Job>,
    credits: u32,
}

impl RewindLedger {
    pub fn new(credits: u32) -> Self {
        Self {
            history: VecDeque::new(),
            credits,
        }
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_rewind(&self) -> bool {
        self.credits > 0 && !self.history.is_empty()
    }

    /// Remember a passed job. The oldest entry falls off once the history
    /// would exceed the cap.
    pub fn record_pass(&mut self, job: Job) {
        self.history.push_front(job);
        self.history.truncate(HISTORY_LIMIT);
    }

    /// Take back the most recently passed job, spending one credit.
    /// Returns `None` (and spends nothing) when rewinding isn't allowed.
    pub fn take_recent(&mut self) -> Option<Job> {
        if !self.can_rewind() {
            return None;
        }
        let job = self.history.pop_front()?;
        self.credits -= 1;
        Some(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Company;

    fn job(id: &str) -> Job {
        Job {
            id: id.to_string(),
            title: format!("Job {}", id),
            company: Company {
                name: "TestCorp".to_string(),
                logo: None,
            },
            location: None,
            remote: false,
            employment_type: "FULL_TIME".to_string(),
            salary_min: None,
            salary_max: None,
            currency: "USD".to_string(),
            skills: vec![],
            description: String::new(),
            requirements: vec![],
            match_score: None,
            deadline: None,
        }
    }

    #[test]
    fn test_history_is_capped_at_five() {
        let mut ledger = RewindLedger::new(STARTING_CREDITS);
        for id in ["a", "b", "c", "d", "e", "f"] {
            ledger.record_pass(job(id));
        }
        assert_eq!(ledger.history_len(), 5);

        // "a" was evicted; the most recent pass comes back first.
        assert_eq!(ledger.take_recent().unwrap().id, "f");
        assert_eq!(ledger.take_recent().unwrap().id, "e");
        assert_eq!(ledger.take_recent().unwrap().id, "d");
    }

    #[test]
    fn test_credits_gate_rewind_and_never_go_negative() {
        let mut ledger = RewindLedger::new(STARTING_CREDITS);
        for id in ["a", "b", "c", "d"] {
            ledger.record_pass(job(id));
        }

        assert!(ledger.take_recent().is_some());
        assert!(ledger.take_recent().is_some());
        assert!(ledger.take_recent().is_some());
        assert_eq!(ledger.credits(), 0);

        // History still has an entry but the pool is dry.
        assert_eq!(ledger.history_len(), 1);
        assert!(!ledger.can_rewind());
        assert!(ledger.take_recent().is_none());
        assert_eq!(ledger.credits(), 0);
    }

    #[test]
    fn test_empty_history_blocks_rewind() {
        let mut ledger = RewindLedger::new(STARTING_CREDITS);
        assert!(!ledger.can_rewind());
        assert!(ledger.take_recent().is_none());
        assert_eq!(ledger.credits(), STARTING_CREDITS);
    }
}
