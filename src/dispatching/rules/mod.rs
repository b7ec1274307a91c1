//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Work-based**: SJN, SRT
//! - **Deadline-based**: EDF, Minimum Laxity
//! - **Priority**: Priority (declared or rate-monotonic priorities)
//! - **Time-sliced**: Round Robin
//!
//! # Score Convention
//! All rules return lower scores for jobs that should run first.
//!
//! # References
//! - Liu & Layland (1973), "Scheduling Algorithms for Multiprogramming in a
//!   Hard-Real-Time Environment"
//! - Mok (1983), "Fundamental Design Problems of Distributed Systems for
//!   the Hard-Real-Time Environment"
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Job;

// ======================== Work-based rules ========================

/// Shortest Job Next.
///
/// Scores by the job's total execution time. Used by the non-preemptive
/// SJN batch dispatcher.
#[derive(Debug, Clone, Copy)]
pub struct ShortestJob;

impl DispatchingRule for ShortestJob {
    fn name(&self) -> &'static str {
        "SJN"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        job.execution as f64
    }

    fn preempts(&self, _candidate: RuleScore, _incumbent: RuleScore) -> bool {
        false
    }

    fn description(&self) -> &'static str {
        "Shortest Job Next"
    }
}

/// Shortest Remaining Time.
///
/// Preemptive SJN: a newly released job with strictly less remaining work
/// than the running job takes the CPU.
#[derive(Debug, Clone, Copy)]
pub struct Srt;

impl DispatchingRule for Srt {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        job.remaining as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

// ======================== Deadline-based rules ========================

/// Earliest Deadline First.
///
/// Optimal among preemptive uniprocessor policies: any job set that can
/// meet all deadlines does so under EDF.
///
/// # Reference
/// Liu & Layland (1973), Theorem 7.
#[derive(Debug, Clone, Copy)]
pub struct Edf;

impl DispatchingRule for Edf {
    fn name(&self) -> &'static str {
        "EDF"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        job.absolute_deadline as f64
    }

    fn description(&self) -> &'static str {
        "Earliest Deadline First"
    }
}

/// Minimum (least) Laxity First.
///
/// Laxity = deadline - (now + remaining). Evaluated at every decision
/// boundary, so waiting jobs whose slack shrank since the last boundary
/// can displace the running job.
///
/// # Reference
/// Mok (1983)
#[derive(Debug, Clone, Copy)]
pub struct MinimumLaxity;

impl DispatchingRule for MinimumLaxity {
    fn name(&self) -> &'static str {
        "Minimum Laxity"
    }

    fn evaluate(&self, job: &Job, context: &SchedulingContext) -> RuleScore {
        job.laxity(context.current_time) as f64
    }

    fn description(&self) -> &'static str {
        "Minimum Laxity First"
    }
}

// ======================== Priority-based rule ========================

/// Fixed-priority preemptive rule.
///
/// Prioritizes jobs with higher `static_priority` values (negated because
/// lower score = higher priority in convention). Rate-monotonic scheduling
/// is this rule applied to jobs generated with
/// `PriorityAssignment::RateMonotonic`.
#[derive(Debug, Clone, Copy)]
pub struct StaticPriority;

impl DispatchingRule for StaticPriority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn evaluate(&self, job: &Job, _context: &SchedulingContext) -> RuleScore {
        -job.static_priority
    }

    fn description(&self) -> &'static str {
        "Fixed-priority preemptive (declared or rate-monotonic)"
    }
}

// ======================== Time-sliced rule ========================

/// Round Robin.
///
/// All ready jobs score equally, so dispatch follows ready-queue order.
/// The running job is never displaced by an arrival; it yields when its
/// quantum expires and re-enters the queue tail.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    /// Time slice per dispatch (must be ≥ 1).
    pub quantum: i64,
}

impl RoundRobin {
    /// Creates a round-robin rule with the given quantum.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }
}

impl DispatchingRule for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn evaluate(&self, _job: &Job, _context: &SchedulingContext) -> RuleScore {
        0.0
    }

    fn preempts(&self, _candidate: RuleScore, _incumbent: RuleScore) -> bool {
        false
    }

    fn time_slice(&self) -> Option<i64> {
        Some(self.quantum)
    }

    fn description(&self) -> &'static str {
        "Round Robin with a fixed quantum"
    }
}
