//! Scheduling policy identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The nine supported scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come, First-Served (non-preemptive).
    Fcfs,
    /// Shortest Job Next (non-preemptive).
    Sjn,
    /// Shortest Remaining Time (preemptive).
    Srt,
    /// Fixed declared priority (preemptive).
    Priority,
    /// Round Robin with a fixed quantum.
    RoundRobin,
    /// Two static queues split at the median priority (non-preemptive).
    MultilevelQueues,
    /// Minimum Laxity First (preemptive).
    MinimumLaxity,
    /// Rate-Monotonic Scheduling (preemptive).
    Rms,
    /// Earliest Deadline First (preemptive).
    Edf,
}

impl Policy {
    /// All policies, in presentation order.
    pub const ALL: [Policy; 9] = [
        Policy::Fcfs,
        Policy::Sjn,
        Policy::Srt,
        Policy::Priority,
        Policy::RoundRobin,
        Policy::MultilevelQueues,
        Policy::MinimumLaxity,
        Policy::Rms,
        Policy::Edf,
    ];

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjn => "SJN",
            Policy::Srt => "SRT",
            Policy::Priority => "Priority",
            Policy::RoundRobin => "Round Robin",
            Policy::MultilevelQueues => "Multilevel Queues",
            Policy::MinimumLaxity => "Minimum Laxity",
            Policy::Rms => "RMS",
            Policy::Edf => "EDF",
        }
    }

    /// Whether a running job can be interrupted before completion.
    pub fn is_preemptive(&self) -> bool {
        !matches!(self, Policy::Fcfs | Policy::Sjn | Policy::MultilevelQueues)
    }

    /// Whether the policy needs a time quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a policy identifier is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown scheduling policy '{}'", self.0)
    }
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for Policy {
    type Err = UnknownPolicy;

    /// Parses a display name or common abbreviation, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let policy = match key.as_str() {
            "fcfs" => Policy::Fcfs,
            "sjn" | "sjf" => Policy::Sjn,
            "srt" | "srtf" => Policy::Srt,
            "priority" => Policy::Priority,
            "round robin" | "rr" => Policy::RoundRobin,
            "multilevel queues" | "mlq" => Policy::MultilevelQueues,
            "minimum laxity" | "ml" | "llf" => Policy::MinimumLaxity,
            "rms" => Policy::Rms,
            "edf" => Policy::Edf,
            _ => return Err(UnknownPolicy(s.to_string())),
        };
        Ok(policy)
    }
}
