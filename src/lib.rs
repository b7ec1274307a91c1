//! Periodic CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates a single processor running periodic processes under nine
//! classical and real-time policies, and reports the execution timeline,
//! deadline misses, per-job outcomes and summary statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Job`, `Schedule`,
//!   `ScheduleEntry`, `MissedDeadline`, `JobOutcome`
//! - **`workload`**: Periodic job generation and seeded synthetic process sets
//! - **`dispatching`**: Event-driven core, dispatching rules (SRT, Priority,
//!   Round Robin, Minimum Laxity, EDF) and batch policies (FCFS, SJN,
//!   Multilevel Queues)
//! - **`monitor`**: Deadline-miss accounting and horizon handling
//! - **`scheduler`**: Run coordinator (`Simulator`) and statistics
//! - **`validation`**: Request integrity checks
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::{simulate, SimulationRequest};
//!
//! let procs = vec![
//!     Process::new(0, 5, 2),
//!     Process::new(1, 10, 4).with_arrival(1),
//! ];
//! let request = SimulationRequest::new(procs, "EDF").with_horizon(20);
//! let report = simulate(&request).unwrap();
//!
//! assert!(!report.stats.overloaded);
//! assert!(report.missed().is_empty());
//! ```
//!
//! # References
//!
//! - Liu & Layland (1973), "Scheduling Algorithms for Multiprogramming in a
//!   Hard-Real-Time Environment"
//! - Buttazzo (2011), "Hard Real-Time Computing Systems"
//! - Silberschatz et al. (2018), "Operating System Concepts"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod monitor;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
