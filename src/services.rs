use anyhow::{bail, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;

use crate::data;
use crate::models::{Job, SwipeDirection};

/// Response envelope the mock services return, matching the shape a real
/// REST backend would hand back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

// --- Job catalog ---

/// In-process stand-in for the jobs API. Returns the mock catalog after an
/// artificial delay.
pub struct JobCatalog {
    latency: Duration,
}

impl JobCatalog {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(1000),
        }
    }

    #[cfg(test)]
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    pub fn recommended_jobs(&self) -> Result<ServiceResponse<Vec<Job>>> {
        thread::sleep(self.latency);
        Ok(ServiceResponse {
            success: true,
            data: Some(data::recommended_jobs()),
            message: None,
        })
    }

    pub fn job_by_id(&self, id: &str) -> Result<ServiceResponse<Job>> {
        thread::sleep(self.latency / 2);
        match data::recommended_jobs().into_iter().find(|j| j.id == id) {
            Some(job) => Ok(ServiceResponse {
                success: true,
                data: Some(job),
                message: None,
            }),
            None => bail!("Job not found: {}", id),
        }
    }
}

// --- Swipe service ---

pub trait SwipeService {
    /// Record a swipe decision. The mock always succeeds; the failing
    /// variant exists to exercise the error path.
    fn swipe_job(&mut self, job_id: &str, direction: SwipeDirection) -> Result<ServiceResponse<()>>;
}

pub struct MockSwipeService {
    fail: bool,
}

impl MockSwipeService {
    pub fn new() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl SwipeService for MockSwipeService {
    fn swipe_job(&mut self, _job_id: &str, direction: SwipeDirection) -> Result<ServiceResponse<()>> {
        if self.fail {
            bail!("swipe service unavailable");
        }
        let message = match direction {
            SwipeDirection::Right => "Application submitted!",
            SwipeDirection::Left => "Job passed",
        };
        Ok(ServiceResponse {
            success: true,
            data: Some(()),
            message: Some(message.to_string()),
        })
    }
}

// --- Simulation seam ---

/// All the mock randomness behind one seam, so a real scoring backend can
/// replace it without touching the swipe state machine.
pub trait Simulation {
    /// Estimated days until the company responds (3-9 in the mock).
    fn response_estimate_days(&mut self) -> u32;
    /// Skill-gap tasks already done when an application is created (0-2 of 5).
    fn initial_tasks_done(&mut self) -> u32;
    /// Match-strength bump granted by completing a learning task (5-14).
    fn match_boost(&mut self) -> u8;
}

pub struct RandomSimulation {
    rng: rand::rngs::ThreadRng,
}

impl RandomSimulation {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Simulation for RandomSimulation {
    fn response_estimate_days(&mut self) -> u32 {
        self.rng.gen_range(3..=9)
    }

    fn initial_tasks_done(&mut self) -> u32 {
        self.rng.gen_range(0..3)
    }

    fn match_boost(&mut self) -> u8 {
        self.rng.gen_range(5..15)
    }
}

/// Deterministic simulation for tests.
#[cfg(test)]
pub struct FixedSimulation {
    pub days: u32,
    pub tasks_done: u32,
    pub boost: u8,
}

#[cfg(test)]
impl Simulation for FixedSimulation {
    fn response_estimate_days(&mut self) -> u32 {
        self.days
    }

    fn initial_tasks_done(&mut self) -> u32 {
        self.tasks_done
    }

    fn match_boost(&mut self) -> u8 {
        self.boost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_simulation_stays_in_mock_ranges() {
        let mut sim = RandomSimulation::new();
        for _ in 0..50 {
            let days = sim.response_estimate_days();
            assert!((3..=9).contains(&days));
            assert!(sim.initial_tasks_done() < 3);
            let boost = sim.match_boost();
            assert!((5..=14).contains(&boost));
        }
    }

    #[test]
    fn test_mock_swipe_service_reports_direction() {
        let mut svc = MockSwipeService::new();
        let resp = svc.swipe_job("1", SwipeDirection::Right).unwrap();
        assert!(resp.success);
        assert_eq!(resp.message.as_deref(), Some("Application submitted!"));

        let resp = svc.swipe_job("1", SwipeDirection::Left).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Job passed"));
    }

    #[test]
    fn test_failing_swipe_service_errors() {
        let mut svc = MockSwipeService::failing();
        assert!(svc.swipe_job("1", SwipeDirection::Right).is_err());
    }

    #[test]
    fn test_catalog_finds_job_by_id() {
        let catalog = JobCatalog::instant();
        let resp = catalog.job_by_id("1").unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.unwrap().id, "1");
        assert!(catalog.job_by_id("nope").is_err());
    }
}
