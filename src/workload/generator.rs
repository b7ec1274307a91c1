//! Periodic job generation.
//!
//! Expands process descriptors into the finite set of job instances a run
//! will schedule. Job `j` of process `p` is released at
//! `p.arrival + j * p.period` and exists only if that release falls
//! strictly before the horizon.

use serde::{Deserialize, Serialize};

use crate::models::{Job, Process};

/// Scaling constant of the rate-monotonic priority (`K / period`).
pub const RATE_MONOTONIC_SCALE: f64 = 10_000.0;

/// How a job's `static_priority` is derived from its process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityAssignment {
    /// Use the declared process priority.
    #[default]
    Declared,
    /// `RATE_MONOTONIC_SCALE / period`: shorter period, higher priority.
    RateMonotonic,
}

impl PriorityAssignment {
    /// Derived priority for `process`. The descriptor itself is not modified.
    pub fn priority_of(&self, process: &Process) -> f64 {
        match self {
            Self::Declared => process.priority as f64,
            Self::RateMonotonic => {
                if process.period <= 0 {
                    0.0
                } else {
                    RATE_MONOTONIC_SCALE / process.period as f64
                }
            }
        }
    }
}

/// Generates up to `jobs_per_process` jobs per process, keeping only those
/// released before `horizon`.
///
/// Output order is process order, then job index. Consumers impose their
/// own ordering.
///
/// Releases grow with the index, so generation for a process stops at its
/// first release at or past the horizon; the work done is bounded by the
/// number of jobs produced, not by `jobs_per_process`. Processes with a
/// non-positive period yield no jobs.
pub fn generate_jobs(
    processes: &[Process],
    jobs_per_process: usize,
    horizon: i64,
    assignment: PriorityAssignment,
) -> Vec<Job> {
    let mut jobs = Vec::new();

    for process in processes.iter().filter(|p| p.period > 0) {
        let priority = assignment.priority_of(process);
        for index in 0..jobs_per_process {
            if process.release_of(index) >= horizon {
                break;
            }
            jobs.push(Job::new(process, index, priority));
        }
    }

    jobs
}
