//! Deadline monitoring.
//!
//! Every job leaves the simulation through the monitor exactly once:
//! either finalized on completion, or abandoned when the horizon is
//! reached with work remaining. The monitor writes the job's outcome and,
//! when due, a `MissedDeadline` record into the schedule.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Job, JobOutcome, JobStatus, MissedDeadline, Schedule};

/// Treatment of jobs still unfinished at the simulation horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizonPolicy {
    /// Record the job as abandoned without a deadline check.
    #[default]
    Drop,
    /// Record the job as abandoned and report a deadline miss for it.
    CountAsMiss,
}

/// Checks completed jobs against their absolute deadlines.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadlineMonitor {
    horizon_policy: HorizonPolicy,
}

impl DeadlineMonitor {
    /// Creates a monitor with the given horizon policy.
    pub fn new(horizon_policy: HorizonPolicy) -> Self {
        Self { horizon_policy }
    }

    /// Finalizes a completed job. A miss is recorded iff
    /// `completion > absolute_deadline`; finishing exactly on the
    /// deadline is on time.
    pub fn finalize(&self, job: Job, completion: i64, schedule: &mut Schedule) {
        let missed = completion > job.absolute_deadline;
        if missed {
            debug!(
                process = job.process_id,
                job = job.index,
                completion,
                deadline = job.absolute_deadline,
                "deadline missed"
            );
            schedule.add_miss(MissedDeadline {
                job_index: job.index,
                process_id: job.process_id,
                absolute_deadline: job.absolute_deadline,
            });
        }

        schedule.add_outcome(JobOutcome {
            job_index: job.index,
            process_id: job.process_id,
            release: job.release,
            absolute_deadline: job.absolute_deadline,
            first_start: job.first_start,
            completion: Some(completion),
            status: if missed { JobStatus::Missed } else { JobStatus::Met },
        });
    }

    /// Retires a job cut off by the horizon.
    pub fn abandon(&self, job: Job, schedule: &mut Schedule) {
        debug!(
            process = job.process_id,
            job = job.index,
            remaining = job.remaining,
            "job abandoned at horizon"
        );
        if self.horizon_policy == HorizonPolicy::CountAsMiss {
            schedule.add_miss(MissedDeadline {
                job_index: job.index,
                process_id: job.process_id,
                absolute_deadline: job.absolute_deadline,
            });
        }

        schedule.add_outcome(JobOutcome {
            job_index: job.index,
            process_id: job.process_id,
            release: job.release,
            absolute_deadline: job.absolute_deadline,
            first_start: job.first_start,
            completion: None,
            status: JobStatus::Abandoned,
        });
    }
}
