//! Non-preemptive batch dispatching: FCFS, SJN, Multilevel Queues.
//!
//! # Algorithm
//!
//! Jobs are taken one at a time and run to completion in a single
//! interval starting at `max(now, release)`. The policies differ only in
//! how the next job is chosen:
//!
//! 1. **FCFS**: ascending release, ties by process id then job index.
//! 2. **SJN**: among released jobs, the smallest execution time.
//! 3. **Multilevel Queues**: two static queues split at the median process
//!    priority, each served FCFS; the whole high queue runs before the low
//!    queue starts.
//!
//! The horizon only limits job generation here: every generated job runs
//! to completion.
//!
//! # Complexity
//! FCFS and Multilevel Queues: O(n log n). SJN: O(n²) in the ready-set size.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use std::collections::VecDeque;

use tracing::trace;

use super::{rules, select_best, SchedulingContext};
use crate::models::{Job, Process, Schedule, ScheduleEntry};
use crate::monitor::DeadlineMonitor;

/// Median of the declared process priorities.
///
/// For an even count this is the mean of the two middle values. Returns
/// `None` for an empty process list.
pub fn median_priority(processes: &[Process]) -> Option<f64> {
    if processes.is_empty() {
        return None;
    }
    let mut priorities: Vec<i32> = processes.iter().map(|p| p.priority).collect();
    priorities.sort_unstable();

    let mid = priorities.len() / 2;
    if priorities.len() % 2 == 1 {
        Some(priorities[mid] as f64)
    } else {
        Some((priorities[mid - 1] as f64 + priorities[mid] as f64) / 2.0)
    }
}

/// Run-to-completion dispatcher for the non-preemptive policies.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchDispatcher {
    monitor: DeadlineMonitor,
}

impl BatchDispatcher {
    /// Creates a dispatcher reporting through `monitor`.
    pub fn new(monitor: DeadlineMonitor) -> Self {
        Self { monitor }
    }

    /// First-Come, First-Served.
    pub fn fcfs(&self, jobs: Vec<Job>) -> Schedule {
        let mut schedule = Schedule::new();
        self.run_in_release_order(jobs, 0, &mut schedule);
        schedule
    }

    /// Shortest Job Next (non-preemptive).
    ///
    /// Ties go to the job released first (ready-set scan order).
    pub fn shortest_job_next(&self, jobs: Vec<Job>) -> Schedule {
        let mut pending: VecDeque<Job> = {
            let mut sorted = jobs;
            sorted.sort_by_key(Job::release_key);
            sorted.into()
        };
        let mut ready: Vec<Job> = Vec::new();
        let mut schedule = Schedule::new();
        let mut now = 0;

        loop {
            while pending.front().is_some_and(|j| j.release <= now) {
                if let Some(job) = pending.pop_front() {
                    ready.push(job);
                }
            }

            let ctx = SchedulingContext::at_time(now);
            match select_best(&rules::ShortestJob, &ready, &ctx) {
                Some(best) => {
                    let job = ready.remove(best);
                    now = self.run_to_completion(job, now, &mut schedule);
                }
                None => match pending.front() {
                    Some(next) => now = next.release,
                    None => break,
                },
            }
        }

        schedule
    }

    /// Multilevel Queues: jobs whose priority is strictly above `split`
    /// form the high queue and all run before any low-queue job.
    pub fn multilevel_queues(&self, jobs: Vec<Job>, split: f64) -> Schedule {
        let (high, low): (Vec<Job>, Vec<Job>) =
            jobs.into_iter().partition(|j| j.static_priority > split);

        let mut schedule = Schedule::new();
        let now = self.run_in_release_order(high, 0, &mut schedule);
        self.run_in_release_order(low, now, &mut schedule);
        schedule
    }

    /// Runs `jobs` sorted by release starting at `now`; returns the end time.
    fn run_in_release_order(
        &self,
        mut jobs: Vec<Job>,
        mut now: i64,
        schedule: &mut Schedule,
    ) -> i64 {
        jobs.sort_by_key(Job::release_key);
        for job in jobs {
            now = self.run_to_completion(job, now, schedule);
        }
        now
    }

    fn run_to_completion(&self, mut job: Job, now: i64, schedule: &mut Schedule) -> i64 {
        let start = now.max(job.release);
        let end = start.saturating_add(job.remaining);
        job.mark_started(start);
        job.remaining = 0;

        trace!(process = job.process_id, job = job.index, start, end, "ran to completion");
        schedule.add_entry(ScheduleEntry::new(job.index, job.process_id, start, end));
        self.monitor.finalize(job, end, schedule);
        end
    }
}
