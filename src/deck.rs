use crate::models::Job;

/// How many upcoming jobs the "coming up" preview shows.
pub const PREVIEW_LEN: usize = 3;

/// Ordered queue of job postings plus a cursor. Jobs before the cursor are
/// already decided; the job at the cursor (if any) is the one on screen.
pub struct JobDeck {
    jobs: Vec<Job>,
    cursor: usize,
}

impl JobDeck {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs, cursor: 0 }
    }

    pub fn current(&self) -> Option<&Job> {
        self.jobs.get(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.jobs.len()
    }

    pub fn remaining(&self) -> usize {
        self.jobs.len() - self.cursor
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The next few jobs after the current one, clamped to what's left.
    pub fn upcoming(&self) -> &[Job] {
        let start = (self.cursor + 1).min(self.jobs.len());
        let end = (start + PREVIEW_LEN).min(self.jobs.len());
        &self.jobs[start..end]
    }

    /// Move past the current job. Fail-closed: advancing an exhausted deck
    /// is a no-op, callers are expected to check first.
    pub fn advance(&mut self) {
        if self.cursor < self.jobs.len() {
            self.cursor += 1;
        }
    }

    /// Put a job back at the cursor position so it becomes the one on
    /// screen again. The tail shifts right; the cursor does not move.
    pub fn reinsert(&mut self, job: Job) {
        let at = self.cursor.min(self.jobs.len());
        self.jobs.insert(at, job);
    }
}
