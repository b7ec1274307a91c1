//! Event-driven simulation core for preemptive policies.
//!
//! Time jumps from one decision boundary to the next instead of ticking:
//! the next boundary is the earliest of the running job's completion, the
//! next pending release, the horizon, and (for time-sliced rules) the end
//! of the current slice. The number of loop iterations is therefore
//! bounded by the number of releases, completions and slice expiries.
//!
//! # Job Ownership
//! A job lives in exactly one of `pending`, `ready`, the running burst, or
//! the schedule's outcome list (after the deadline monitor consumed it).
//! Transfers are moves.

use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use super::{select_best, DispatchingRule, SchedulingContext};
use crate::error::SimulationError;
use crate::models::{Job, Schedule, ScheduleEntry};
use crate::monitor::DeadlineMonitor;

/// The job currently holding the CPU and the time its burst began.
#[derive(Debug)]
struct Burst {
    job: Job,
    start: i64,
}

impl Burst {
    /// Ends the burst at `now`, recording its interval, and hands the job back.
    fn close(self, now: i64, schedule: &mut Schedule) -> Job {
        if now > self.start {
            schedule.add_entry(ScheduleEntry::new(
                self.job.index,
                self.job.process_id,
                self.start,
                now,
            ));
        }
        self.job
    }
}

/// Discrete-event simulator shared by all preemptive dispatching rules.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, EventEngine};
/// use u_cpusched::models::Process;
/// use u_cpusched::workload::{generate_jobs, PriorityAssignment};
///
/// let procs = vec![Process::new(0, 5, 3), Process::new(1, 5, 2).with_arrival(1)];
/// let jobs = generate_jobs(&procs, 1, 10, PriorityAssignment::Declared);
///
/// let schedule = EventEngine::new(10).run(&rules::RoundRobin::new(2), jobs).unwrap();
/// let spans: Vec<(i64, i64)> = schedule.entries.iter().map(|e| (e.start, e.end)).collect();
/// assert_eq!(spans, vec![(0, 2), (2, 4), (4, 5)]);
/// ```
#[derive(Debug, Clone)]
pub struct EventEngine {
    horizon: i64,
    monitor: DeadlineMonitor,
}

impl EventEngine {
    /// Creates an engine that stops simulating at `horizon`.
    pub fn new(horizon: i64) -> Self {
        Self {
            horizon,
            monitor: DeadlineMonitor::default(),
        }
    }

    /// Sets the deadline monitor (and with it the horizon policy).
    pub fn with_monitor(mut self, monitor: DeadlineMonitor) -> Self {
        self.monitor = monitor;
        self
    }

    /// Iteration ceiling for `job_count` jobs.
    ///
    /// Every iteration either advances time by at least one unit or jumps
    /// to a release, so twice the horizon plus the job count is never
    /// reached by a correct run.
    pub fn step_limit(&self, job_count: usize) -> usize {
        let horizon = usize::try_from(self.horizon.max(0)).unwrap_or(usize::MAX);
        horizon
            .saturating_add(job_count)
            .saturating_mul(2)
            .saturating_add(16)
    }

    /// Runs `jobs` under `rule` until all work is done or the horizon is hit.
    ///
    /// Jobs still unfinished at the horizon are handed to the deadline
    /// monitor as abandoned.
    ///
    /// # Errors
    /// `SimulationError::Internal` if the iteration ceiling is exceeded.
    pub fn run(
        &self,
        rule: &dyn DispatchingRule,
        jobs: Vec<Job>,
    ) -> Result<Schedule, SimulationError> {
        let step_limit = self.step_limit(jobs.len());
        let mut pending: VecDeque<Job> = {
            let mut sorted = jobs;
            sorted.sort_by_key(Job::release_key);
            sorted.into()
        };
        let mut ready: Vec<Job> = Vec::new();
        let mut running: Option<Burst> = None;
        let mut schedule = Schedule::new();
        let mut now: i64 = 0;
        let mut steps: usize = 0;

        while now < self.horizon {
            steps += 1;
            if steps > step_limit {
                warn!(rule = rule.name(), steps, now, "step limit exceeded");
                return Err(SimulationError::internal(format!(
                    "{} exceeded {step_limit} steps at t={now}",
                    rule.name()
                )));
            }

            // Admit every release up to and including `now`.
            while pending.front().is_some_and(|j| j.release <= now) {
                if let Some(job) = pending.pop_front() {
                    trace!(process = job.process_id, job = job.index, now, "released");
                    ready.push(job);
                }
            }

            let ctx = SchedulingContext::at_time(now);

            // Slice expiry: the expired job queues behind this instant's arrivals.
            if let Some(slice) = rule.time_slice() {
                if running.as_ref().is_some_and(|b| now.saturating_sub(b.start) >= slice) {
                    if let Some(burst) = running.take() {
                        ready.push(burst.close(now, &mut schedule));
                    }
                }
            }

            let preempt = match (running.as_ref(), select_best(rule, &ready, &ctx)) {
                (Some(burst), Some(best)) => {
                    let candidate = rule.evaluate(&ready[best], &ctx);
                    let incumbent = rule.evaluate(&burst.job, &ctx);
                    rule.preempts(candidate, incumbent)
                }
                _ => false,
            };
            if preempt {
                if let Some(burst) = running.take() {
                    debug!(
                        rule = rule.name(),
                        now,
                        process = burst.job.process_id,
                        job = burst.job.index,
                        "preempted"
                    );
                    ready.push(burst.close(now, &mut schedule));
                }
            }

            if running.is_none() {
                if let Some(best) = select_best(rule, &ready, &ctx) {
                    let mut job = ready.remove(best);
                    job.mark_started(now);
                    trace!(process = job.process_id, job = job.index, now, "dispatched");
                    running = Some(Burst { job, start: now });
                }
            }

            let Some(burst) = running.as_mut() else {
                // Idle: jump to the next release, or stop when nothing is left.
                match pending.front() {
                    Some(next) => {
                        now = next.release;
                        continue;
                    }
                    None => break,
                }
            };

            let mut boundary = now.saturating_add(burst.job.remaining).min(self.horizon);
            if let Some(next) = pending.front() {
                boundary = boundary.min(next.release);
            }
            if let Some(slice) = rule.time_slice() {
                boundary = boundary.min(burst.start.saturating_add(slice));
            }

            burst.job.remaining -= boundary - now;
            now = boundary;

            if burst.job.is_complete() {
                if let Some(burst) = running.take() {
                    let job = burst.close(now, &mut schedule);
                    debug!(process = job.process_id, job = job.index, now, "completed");
                    self.monitor.finalize(job, now, &mut schedule);
                }
            }
        }

        if let Some(burst) = running.take() {
            ready.push(burst.close(now, &mut schedule));
        }
        for job in ready.into_iter().chain(pending) {
            self.monitor.abandon(job, &mut schedule);
        }

        Ok(schedule)
    }
}
