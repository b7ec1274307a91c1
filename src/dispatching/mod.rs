//! Dispatching policies and the event-driven simulation core.
//!
//! Preemptive policies (SRT, Priority, Round Robin, Minimum Laxity, RMS,
//! EDF) are expressed as `DispatchingRule`s and run by the shared
//! `EventEngine`. Non-preemptive policies (FCFS, SJN, Multilevel Queues)
//! run to completion one job at a time in `BatchDispatcher`.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, EventEngine};
//! use u_cpusched::models::Process;
//! use u_cpusched::workload::{generate_jobs, PriorityAssignment};
//!
//! let procs = vec![Process::new(0, 4, 2), Process::new(1, 6, 3)];
//! let jobs = generate_jobs(&procs, 2, 20, PriorityAssignment::Declared);
//!
//! let schedule = EventEngine::new(20).run(&rules::Edf, jobs).unwrap();
//! assert_eq!(schedule.busy_time(), 10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Buttazzo (2011), "Hard Real-Time Computing Systems", Ch. 3-4

mod batch;
mod context;
mod engine;
pub mod rules;

pub use batch::{median_priority, BatchDispatcher};
pub use context::SchedulingContext;
pub use engine::EventEngine;

use crate::models::Job;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = f64;

/// A selection/preemption rule for the event-driven core.
///
/// # Score Convention
/// **Lower score = higher priority.** Among ready jobs the one with the
/// smallest score is dispatched; equal scores resolve to the job found
/// first in ready-queue order.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "EDF").
    fn name(&self) -> &'static str;

    /// Scores a job at the current decision point.
    fn evaluate(&self, job: &Job, context: &SchedulingContext) -> RuleScore;

    /// Whether a ready job with score `candidate` displaces the running
    /// job with score `incumbent`. Default: strictly better score only, so
    /// the running job keeps the CPU on ties.
    fn preempts(&self, candidate: RuleScore, incumbent: RuleScore) -> bool {
        candidate < incumbent
    }

    /// Maximum uninterrupted burst, for time-sliced rules.
    fn time_slice(&self) -> Option<i64> {
        None
    }

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Index of the best-scored job in `ready`; first found wins ties.
pub(crate) fn select_best(
    rule: &dyn DispatchingRule,
    ready: &[Job],
    context: &SchedulingContext,
) -> Option<usize> {
    ready
        .iter()
        .enumerate()
        .map(|(i, job)| (i, rule.evaluate(job, context)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn job(pid: u32, execution: i64, deadline: i64) -> Job {
        Job::new(
            &Process::new(pid, 100, execution).with_deadline(deadline),
            0,
            1.0,
        )
    }

    #[test]
    fn test_select_best_minimum() {
        let ready = vec![job(0, 5, 50), job(1, 2, 50), job(2, 4, 50)];
        let ctx = SchedulingContext::at_time(0);
        assert_eq!(select_best(&rules::Srt, &ready, &ctx), Some(1));
    }

    #[test]
    fn test_select_best_first_found_on_tie() {
        let ready = vec![job(0, 5, 50), job(1, 2, 50), job(2, 2, 50)];
        let ctx = SchedulingContext::at_time(0);
        assert_eq!(select_best(&rules::Srt, &ready, &ctx), Some(1));
    }

    #[test]
    fn test_select_best_empty() {
        let ctx = SchedulingContext::at_time(0);
        assert_eq!(select_best(&rules::Edf, &[], &ctx), None);
    }
}
