use std::time::{Duration, Instant};

use crate::deck::JobDeck;
use crate::models::{AppliedJob, Job, SwipeDirection};
use crate::rewind::{RewindLedger, STARTING_CREDITS};
use crate::services::{Simulation, SwipeService};
use crate::toast::{APPLY_TOAST, ERROR_TOAST, PASS_TOAST, REWIND_TOAST, ToastChannel, ToastKind};
use crate::tracker::{ApplicationTracker, TrackerStats};

/// Timing and credit knobs. The web and mobile clients of old disagreed on
/// these; one configurable engine replaces both.
#[derive(Debug, Clone, Copy)]
pub struct SwipeConfig {
    pub exit_animation: Duration,
    pub rewind_credits: u32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            exit_animation: Duration::from_millis(300),
            rewind_credits: STARTING_CREDITS,
        }
    }
}

struct PendingAdvance {
    direction: SwipeDirection,
    due: Instant,
}

/// The swipe state machine: deck cursor, rewind ledger, applied-jobs
/// tracker, and the toast slot, driven by user decisions and a tick clock.
/// Precondition violations (no current job, no rewind credit) are quiet
/// no-ops; nothing here is worth an error the user can't recover from.
pub struct SwipeEngine {
    deck: JobDeck,
    ledger: RewindLedger,
    tracker: ApplicationTracker,
    toasts: ToastChannel,
    pending: Option<PendingAdvance>,
    service: Box<dyn SwipeService>,
    sim: Box<dyn Simulation>,
    config: SwipeConfig,
}

impl SwipeEngine {
    pub fn new(
        jobs: Vec<Job>,
        seed_applications: Vec<AppliedJob>,
        service: Box<dyn SwipeService>,
        sim: Box<dyn Simulation>,
        config: SwipeConfig,
    ) -> Self {
        Self {
            deck: JobDeck::new(jobs),
            ledger: RewindLedger::new(config.rewind_credits),
            tracker: ApplicationTracker::new(seed_applications),
            toasts: ToastChannel::new(),
            pending: None,
            service,
            sim,
            config,
        }
    }

    pub fn current_job(&self) -> Option<&Job> {
        self.deck.current()
    }

    pub fn deck(&self) -> &JobDeck {
        &self.deck
    }

    pub fn applications(&self) -> &[AppliedJob] {
        self.tracker.records()
    }

    pub fn stats(&self) -> TrackerStats {
        self.tracker.stats()
    }

    pub fn rewind_credits(&self) -> u32 {
        self.ledger.credits()
    }

    pub fn can_rewind(&self) -> bool {
        self.ledger.can_rewind()
    }

    pub fn toast(&self) -> Option<&crate::toast::Toast> {
        self.toasts.current()
    }

    pub fn dismiss_toast(&mut self) {
        self.toasts.dismiss();
    }

    /// Direction of the in-flight exit animation, if any.
    pub fn animating(&self) -> Option<SwipeDirection> {
        self.pending.as_ref().map(|p| p.direction)
    }

    /// Decide on the current job. Records the pass or the application
    /// immediately, then defers the cursor advance until the exit
    /// animation has run; `tick` completes it.
    pub fn handle_swipe(&mut self, direction: SwipeDirection, now: Instant) {
        if self.pending.is_some() {
            return;
        }
        let Some(job) = self.deck.current().cloned() else {
            return;
        };

        if direction == SwipeDirection::Left {
            self.ledger.record_pass(job.clone());
        }

        if let Err(err) = self.service.swipe_job(&job.id, direction) {
            eprintln!("swipe failed: {:#}", err);
            self.toasts.show(
                "Something went wrong. Please try again.",
                ToastKind::Error,
                ERROR_TOAST,
                now,
            );
            return;
        }

        if direction == SwipeDirection::Right {
            self.tracker.record_application(&job, self.sim.as_mut());
        }

        self.pending = Some(PendingAdvance {
            direction,
            due: now + self.config.exit_animation,
        });
    }

    /// Bring back the most recently passed job, spending a credit. No-op
    /// when out of credits or history.
    pub fn rewind(&mut self, now: Instant) {
        if self.pending.is_some() {
            return;
        }
        let Some(job) = self.ledger.take_recent() else {
            return;
        };
        self.deck.reinsert(job);
        self.toasts.show(
            format!(
                "Job brought back! {} rewinds left today.",
                self.ledger.credits()
            ),
            ToastKind::Success,
            REWIND_TOAST,
            now,
        );
    }

    /// Complete one learning task on a tracked application.
    pub fn complete_task(&mut self, id: &str) {
        self.tracker.complete_task(id, self.sim.as_mut());
    }

    /// Advance deferred work: finish a due exit animation (cursor advance
    /// plus its toast) and expire the toast slot.
    pub fn tick(&mut self, now: Instant) {
        if let Some(pending) = &self.pending {
            if now >= pending.due {
                let direction = pending.direction;
                self.pending = None;
                self.deck.advance();
                match direction {
                    SwipeDirection::Right => self.toasts.show(
                        "Application submitted!",
                        ToastKind::Success,
                        APPLY_TOAST,
                        now,
                    ),
                    SwipeDirection::Left => self.toasts.show(
                        "Job passed. Keep swiping!",
                        ToastKind::Success,
                        PASS_TOAST,
                        now,
                    ),
                }
                return;
            }
        }
        self.toasts.tick(now);
    }
}
