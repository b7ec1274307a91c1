//! Simulation run coordinator.
//!
//! # Algorithm
//!
//! 1. Validate the request (all problems reported at once).
//! 2. Expand processes into jobs, deriving rate-monotonic priorities for RMS.
//! 3. Dispatch to the batch dispatcher (FCFS, SJN, Multilevel Queues) or
//!    to the event engine with the policy's dispatching rule.
//! 4. Check the single-processor invariant and compute statistics.
//!
//! Each run builds its own job set and schedule; nothing is shared
//! between runs.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{Policy, SimulationStats};
use crate::dispatching::{median_priority, rules, BatchDispatcher, EventEngine};
use crate::error::SimulationError;
use crate::models::{JobOutcome, MissedDeadline, Process, Schedule, ScheduleEntry};
use crate::monitor::{DeadlineMonitor, HorizonPolicy};
use crate::validation::validate_request;
use crate::workload::{generate_jobs, PriorityAssignment};

/// Default number of jobs generated per process.
pub const DEFAULT_JOBS_PER_PROCESS: usize = 2;
/// Default simulation horizon.
pub const DEFAULT_HORIZON: i64 = 100;
/// Default Round Robin quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

fn default_jobs_per_process() -> usize {
    DEFAULT_JOBS_PER_PROCESS
}

fn default_horizon() -> i64 {
    DEFAULT_HORIZON
}

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

/// Input container for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Periodic processes to simulate.
    pub processes: Vec<Process>,
    /// Jobs generated per process (before the horizon cut).
    #[serde(default = "default_jobs_per_process")]
    pub jobs_per_process: usize,
    /// Policy identifier, e.g. `"EDF"` or `"Round Robin"`.
    pub policy: String,
    /// Simulation horizon.
    #[serde(default = "default_horizon")]
    pub horizon: i64,
    /// Round Robin time slice; ignored by other policies.
    #[serde(default = "default_quantum")]
    pub quantum: i64,
    /// Treatment of jobs unfinished at the horizon.
    #[serde(default)]
    pub horizon_policy: HorizonPolicy,
}

impl SimulationRequest {
    /// Creates a request with default job count, horizon and quantum.
    pub fn new(processes: Vec<Process>, policy: impl Into<String>) -> Self {
        Self {
            processes,
            jobs_per_process: DEFAULT_JOBS_PER_PROCESS,
            policy: policy.into(),
            horizon: DEFAULT_HORIZON,
            quantum: DEFAULT_QUANTUM,
            horizon_policy: HorizonPolicy::default(),
        }
    }

    /// Creates a request for a known policy.
    pub fn for_policy(processes: Vec<Process>, policy: Policy) -> Self {
        Self::new(processes, policy.name())
    }

    /// Sets the number of jobs per process.
    pub fn with_jobs_per_process(mut self, jobs_per_process: usize) -> Self {
        self.jobs_per_process = jobs_per_process;
        self
    }

    /// Sets the simulation horizon.
    pub fn with_horizon(mut self, horizon: i64) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the horizon policy.
    pub fn with_horizon_policy(mut self, horizon_policy: HorizonPolicy) -> Self {
        self.horizon_policy = horizon_policy;
        self
    }
}

/// Result of a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Policy that produced the schedule.
    pub policy: Policy,
    /// Execution timeline, misses and per-job outcomes.
    pub schedule: Schedule,
    /// Summary statistics.
    pub stats: SimulationStats,
}

impl SimulationReport {
    /// Execution intervals.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.schedule.entries
    }

    /// Deadline misses.
    pub fn missed(&self) -> &[MissedDeadline] {
        &self.schedule.missed
    }

    /// Per-job outcomes.
    pub fn outcomes(&self) -> &[JobOutcome] {
        &self.schedule.outcomes
    }
}

/// Runs validated simulation requests.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{SimulationRequest, Simulator};
///
/// let request = SimulationRequest::new(vec![Process::new(0, 4, 2)], "FCFS")
///     .with_jobs_per_process(1)
///     .with_horizon(10);
///
/// let report = Simulator::new().run(&request).unwrap();
/// assert_eq!(report.entries().len(), 1);
/// assert!(report.missed().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    /// Creates a simulator.
    pub fn new() -> Self {
        Self
    }

    /// Runs one simulation.
    ///
    /// # Errors
    /// - `SimulationError::Validation` if the request is rejected; no
    ///   simulation step runs in that case.
    /// - `SimulationError::Internal` if the engine breaks an invariant.
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationReport, SimulationError> {
        let policy = validate_request(request)?;

        let assignment = match policy {
            Policy::Rms => PriorityAssignment::RateMonotonic,
            _ => PriorityAssignment::Declared,
        };
        let jobs = generate_jobs(
            &request.processes,
            request.jobs_per_process,
            request.horizon,
            assignment,
        );

        let monitor = DeadlineMonitor::new(request.horizon_policy);
        let batch = BatchDispatcher::new(monitor);
        let engine = EventEngine::new(request.horizon).with_monitor(monitor);

        let schedule = match policy {
            Policy::Fcfs => batch.fcfs(jobs),
            Policy::Sjn => batch.shortest_job_next(jobs),
            Policy::MultilevelQueues => {
                let split = median_priority(&request.processes).unwrap_or_default();
                batch.multilevel_queues(jobs, split)
            }
            Policy::Srt => engine.run(&rules::Srt, jobs)?,
            Policy::Priority | Policy::Rms => engine.run(&rules::StaticPriority, jobs)?,
            Policy::RoundRobin => engine.run(&rules::RoundRobin::new(request.quantum), jobs)?,
            Policy::MinimumLaxity => engine.run(&rules::MinimumLaxity, jobs)?,
            Policy::Edf => engine.run(&rules::Edf, jobs)?,
        };

        if let Some((a, b)) = schedule.find_overlap() {
            return Err(SimulationError::internal(format!(
                "{policy} produced overlapping intervals [{}, {}) and [{}, {})",
                a.start, a.end, b.start, b.end
            )));
        }

        let stats = SimulationStats::calculate(&schedule, &request.processes);
        if stats.overloaded {
            warn!(
                policy = policy.name(),
                utilization = stats.utilization,
                "process set overloads the processor"
            );
        }
        info!(
            policy = policy.name(),
            jobs = stats.total_jobs,
            completed = stats.completed_jobs,
            missed = stats.missed_jobs,
            abandoned = stats.abandoned_jobs,
            "simulation finished"
        );

        Ok(SimulationReport {
            policy,
            schedule,
            stats,
        })
    }
}

/// Runs `request` with a default simulator.
pub fn simulate(request: &SimulationRequest) -> Result<SimulationReport, SimulationError> {
    Simulator::new().run(request)
}
