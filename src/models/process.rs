//! Periodic process model.
//!
//! A process is the static descriptor of a periodic workload. Every
//! `period` time units it releases a new job that needs `execution` units
//! of CPU time and must finish within `deadline` units of its release.
//!
//! # Reference
//! Liu & Layland (1973), "Scheduling Algorithms for Multiprogramming in a
//! Hard-Real-Time Environment", JACM 20(1)

use serde::{Deserialize, Serialize};

/// Stable process identifier.
pub type ProcessId = u32;

/// A periodic process descriptor.
///
/// Immutable for the duration of a simulation run. Policies that need a
/// different priority (e.g. rate-monotonic) derive it at job generation
/// time instead of rewriting the descriptor.
///
/// # Time Representation
/// All times are integral time units relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Human-readable name.
    pub name: String,
    /// Release offset of job 0.
    #[serde(default)]
    pub arrival: i64,
    /// Release period (> 0).
    pub period: i64,
    /// CPU time needed by every job (> 0).
    pub execution: i64,
    /// Relative deadline, measured from each job's own release.
    pub deadline: i64,
    /// Declared priority (larger = more important for the Priority policy).
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    1
}

impl Process {
    /// Creates an implicit-deadline process (`deadline = period`,
    /// `arrival = 0`, `priority = 1`) named `P{id + 1}`.
    pub fn new(id: ProcessId, period: i64, execution: i64) -> Self {
        Self {
            id,
            name: format!("P{}", id.saturating_add(1)),
            arrival: 0,
            period,
            execution,
            deadline: period,
            priority: default_priority(),
        }
    }

    /// Sets the process name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the release offset of the first job.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the relative deadline.
    pub fn with_deadline(mut self, deadline: i64) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets the declared priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Release time of job `index`.
    ///
    /// Saturates at `i64::MAX` on overflow, which lies at or past any
    /// horizon.
    #[inline]
    pub fn release_of(&self, index: usize) -> i64 {
        i64::try_from(index)
            .ok()
            .and_then(|i| i.checked_mul(self.period))
            .and_then(|offset| self.arrival.checked_add(offset))
            .unwrap_or(i64::MAX)
    }

    /// Processor share demanded by this process (`execution / period`).
    ///
    /// Returns 0.0 for a non-positive period; such processes are rejected
    /// by validation before any run.
    pub fn utilization(&self) -> f64 {
        if self.period <= 0 {
            return 0.0;
        }
        self.execution as f64 / self.period as f64
    }

    /// Whether the deadline equals the period.
    pub fn has_implicit_deadline(&self) -> bool {
        self.deadline == self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_defaults() {
        let p = Process::new(0, 6, 2);
        assert_eq!(p.name, "P1");
        assert_eq!(p.arrival, 0);
        assert_eq!(p.deadline, 6);
        assert_eq!(p.priority, 1);
        assert!(p.has_implicit_deadline());
    }

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 10, 4)
            .with_name("sensor")
            .with_arrival(2)
            .with_deadline(8)
            .with_priority(5);

        assert_eq!(p.id, 3);
        assert_eq!(p.name, "sensor");
        assert_eq!(p.arrival, 2);
        assert_eq!(p.deadline, 8);
        assert_eq!(p.priority, 5);
        assert!(!p.has_implicit_deadline());
    }

    #[test]
    fn test_release_of() {
        let p = Process::new(0, 5, 1).with_arrival(3);
        assert_eq!(p.release_of(0), 3);
        assert_eq!(p.release_of(1), 8);
        assert_eq!(p.release_of(4), 23);
    }

    #[test]
    fn test_release_of_saturates() {
        let p = Process::new(0, i64::MAX / 2, 1).with_arrival(5);
        assert_eq!(p.release_of(1), i64::MAX / 2 + 5);
        assert_eq!(p.release_of(3), i64::MAX);
        assert_eq!(p.release_of(usize::MAX), i64::MAX);
    }

    #[test]
    fn test_utilization() {
        assert!((Process::new(0, 4, 1).utilization() - 0.25).abs() < 1e-12);
        assert!((Process::new(0, 2, 3).utilization() - 1.5).abs() < 1e-12);
        assert_eq!(Process::new(0, 0, 3).utilization(), 0.0);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{"id":1,"name":"A","period":6,"execution":2,"deadline":6}"#;
        let p: Process = serde_json::from_str(json).unwrap();
        assert_eq!(p.arrival, 0);
        assert_eq!(p.priority, 1);
    }
}
