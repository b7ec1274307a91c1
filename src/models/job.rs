//! Job (periodic instance) model.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId};

/// One periodic instance of a process, identified by `(process_id, index)`.
///
/// A job is a plain value: the simulation moves it between the pending
/// pool, the ready set, the running slot and finalization, so it is never
/// reachable from two places at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Owning process.
    pub process_id: ProcessId,
    /// Instance index within the process (`0..jobs_per_process`).
    pub index: usize,
    /// Release time.
    pub release: i64,
    /// Total CPU demand (copied from the process).
    pub execution: i64,
    /// CPU time still needed.
    pub remaining: i64,
    /// Absolute deadline (`release + process.deadline`).
    pub absolute_deadline: i64,
    /// Priority used by priority-driven policies (larger = more important).
    pub static_priority: f64,
    /// Time of the first dispatch, once the job has run.
    pub first_start: Option<i64>,
}

impl Job {
    /// Creates job `index` of `process` with the given static priority.
    pub fn new(process: &Process, index: usize, static_priority: f64) -> Self {
        let release = process.release_of(index);
        Self {
            process_id: process.id,
            index,
            release,
            execution: process.execution,
            remaining: process.execution,
            absolute_deadline: release.saturating_add(process.deadline),
            static_priority,
            first_start: None,
        }
    }

    /// Laxity at time `now`: slack left if the job ran uninterrupted from `now`.
    #[inline]
    pub fn laxity(&self, now: i64) -> i64 {
        self.absolute_deadline
            .saturating_sub(now.saturating_add(self.remaining))
    }

    /// Whether all work has been done.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Records the first dispatch time (later dispatches are ignored).
    pub fn mark_started(&mut self, now: i64) {
        self.first_start.get_or_insert(now);
    }

    /// Ordering key of the pending pool: release, then process id, then index.
    #[inline]
    pub fn release_key(&self) -> (i64, ProcessId, usize) {
        (self.release, self.process_id, self.index)
    }
}
