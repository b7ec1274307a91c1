//! Seeded random process sets.
//!
//! Produces reproducible synthetic workloads: periods, execution times,
//! arrivals and priorities drawn uniformly from configurable ranges.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Process, ProcessId};

/// Generator of random periodic process sets.
///
/// # Example
/// ```
/// use u_cpusched::workload::SyntheticWorkload;
///
/// let procs = SyntheticWorkload::new(4).with_seed(7).generate();
/// assert_eq!(procs.len(), 4);
/// assert!(procs.iter().all(|p| p.execution <= p.period));
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticWorkload {
    process_count: usize,
    seed: u64,
    period_range: (i64, i64),
    max_arrival: i64,
    max_priority: i32,
    implicit_deadlines: bool,
}

impl SyntheticWorkload {
    /// Creates a generator for `process_count` processes.
    ///
    /// Defaults: seed 0, periods in `4..=20`, arrivals in `0..=5`,
    /// priorities in `1..=10`, random constrained deadlines.
    pub fn new(process_count: usize) -> Self {
        Self {
            process_count,
            seed: 0,
            period_range: (4, 20),
            max_arrival: 5,
            max_priority: 10,
            implicit_deadlines: false,
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the inclusive period range. Values below 1 are raised to 1.
    pub fn with_period_range(mut self, min: i64, max: i64) -> Self {
        let min = min.max(1);
        self.period_range = (min, max.max(min));
        self
    }

    /// Sets the largest first-release offset.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the largest declared priority.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(1);
        self
    }

    /// Uses `deadline = period` and `arrival = 0` for every process.
    pub fn with_implicit_deadlines(mut self) -> Self {
        self.implicit_deadlines = true;
        self
    }

    /// Generates the process set. Same configuration, same output.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.process_count)
            .map(|i| self.random_process(i as ProcessId, &mut rng))
            .collect()
    }

    fn random_process<R: Rng>(&self, id: ProcessId, rng: &mut R) -> Process {
        let (min_period, max_period) = self.period_range;
        let period = rng.random_range(min_period..=max_period);
        let execution = rng.random_range(1..=period);
        let priority = rng.random_range(1..=self.max_priority);

        let process = Process::new(id, period, execution).with_priority(priority);
        if self.implicit_deadlines {
            return process;
        }

        let arrival = rng.random_range(0..=self.max_arrival);
        let deadline = rng.random_range(execution..=period);
        process.with_arrival(arrival).with_deadline(deadline)
    }
}
