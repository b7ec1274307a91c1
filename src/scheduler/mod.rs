//! Simulation run coordination and statistics.
//!
//! Provides the request/report boundary used by presentation layers.
//!
//! # Run Coordinator
//!
//! `Simulator` validates a `SimulationRequest`, expands its processes into
//! jobs, dispatches them under the selected `Policy` and returns a
//! `SimulationReport`.
//!
//! # Statistics
//!
//! `SimulationStats` computes job counts, miss percentage, utilization and
//! overload, makespan, and mean response and waiting times.
//!
//! # References
//!
//! - Liu & Layland (1973), "Scheduling Algorithms for Multiprogramming in a
//!   Hard-Real-Time Environment"
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod kpi;
mod policy;
mod simulator;

pub use kpi::{utilization, SimulationStats};
pub use policy::{Policy, UnknownPolicy};
pub use simulator::{
    simulate, SimulationReport, SimulationRequest, Simulator, DEFAULT_HORIZON,
    DEFAULT_JOBS_PER_PROCESS, DEFAULT_QUANTUM,
};
