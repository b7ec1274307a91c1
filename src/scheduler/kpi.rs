//! Simulation statistics.
//!
//! Computes the summary indicators shown next to a schedule from the
//! schedule itself and the process set that produced it.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total jobs | Jobs generated (one outcome each) |
//! | Completed | Jobs that finished, on time or late |
//! | Missed | Deadline-miss records |
//! | Miss percentage | missed / total × 100 |
//! | Utilization | Σ execution / period over processes |
//! | Avg response time | Mean(completion - release) over completed jobs |
//! | Avg waiting time | Mean(first start - release) over dispatched jobs |
//!
//! # Reference
//! Liu & Layland (1973): a process set with utilization above 1 cannot be
//! scheduled on one processor by any policy.

use serde::{Deserialize, Serialize};

use crate::models::{JobStatus, Process, Schedule};

/// Summary statistics of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Number of generated jobs.
    pub total_jobs: usize,
    /// Jobs that finished (on time or late).
    pub completed_jobs: usize,
    /// Jobs that finished on or before their deadline.
    pub on_time_jobs: usize,
    /// Number of deadline-miss records.
    pub missed_jobs: usize,
    /// Jobs cut off by the horizon.
    pub abandoned_jobs: usize,
    /// `missed / total * 100`; 0 when no jobs were generated.
    pub miss_percentage: f64,
    /// Processor utilization demanded by the process set.
    pub utilization: f64,
    /// `utilization > 1.0`.
    pub overloaded: bool,
    /// Latest end time of any interval.
    pub makespan: i64,
    /// Total time the CPU was occupied.
    pub busy_time: i64,
    /// Mean response time over completed jobs.
    pub avg_response_time: f64,
    /// Mean waiting time over jobs that were dispatched at least once.
    pub avg_waiting_time: f64,
}

impl SimulationStats {
    /// Computes statistics for `schedule` produced from `processes`.
    pub fn calculate(schedule: &Schedule, processes: &[Process]) -> Self {
        let total_jobs = schedule.outcomes.len();
        let mut completed_jobs = 0;
        let mut on_time_jobs = 0;
        let mut abandoned_jobs = 0;
        let mut total_response: i64 = 0;
        let mut total_waiting: i64 = 0;
        let mut dispatched: usize = 0;

        for outcome in &schedule.outcomes {
            match outcome.status {
                JobStatus::Met => on_time_jobs += 1,
                JobStatus::Missed => {}
                JobStatus::Abandoned => abandoned_jobs += 1,
            }
            if let Some(response) = outcome.response_time() {
                completed_jobs += 1;
                total_response += response;
            }
            if let Some(waiting) = outcome.waiting_time() {
                dispatched += 1;
                total_waiting += waiting;
            }
        }

        let missed_jobs = schedule.miss_count();
        let miss_percentage = if total_jobs == 0 {
            0.0
        } else {
            missed_jobs as f64 / total_jobs as f64 * 100.0
        };

        let utilization = utilization(processes);

        Self {
            total_jobs,
            completed_jobs,
            on_time_jobs,
            missed_jobs,
            abandoned_jobs,
            miss_percentage,
            utilization,
            overloaded: utilization > 1.0,
            makespan: schedule.makespan(),
            busy_time: schedule.busy_time(),
            avg_response_time: mean(total_response, completed_jobs),
            avg_waiting_time: mean(total_waiting, dispatched),
        }
    }

    /// Whether every generated job finished by its deadline.
    pub fn all_deadlines_met(&self) -> bool {
        self.on_time_jobs == self.total_jobs
    }
}

/// Processor utilization `Σ execution / period`.
pub fn utilization(processes: &[Process]) -> f64 {
    processes.iter().map(Process::utilization).sum()
}

fn mean(total: i64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}
