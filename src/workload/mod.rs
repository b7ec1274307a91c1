//! Workload construction: periodic job expansion and synthetic process sets.
//!
//! # Job Generation
//!
//! `generate_jobs` is a pure function of the process list, the number of
//! jobs per process, the horizon and a `PriorityAssignment`. The
//! rate-monotonic assignment derives priorities without touching the
//! process descriptors.
//!
//! # Synthetic Workloads
//!
//! `SyntheticWorkload` draws reproducible random process sets from a seed.

mod generator;
mod synthetic;

pub use generator::{generate_jobs, PriorityAssignment, RATE_MONOTONIC_SCALE};
pub use synthetic::SyntheticWorkload;
