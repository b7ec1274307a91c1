//! Input validation for simulation requests.
//!
//! Checks a request before any simulation step runs. Detects:
//! - Empty process lists
//! - Non-positive periods and execution times
//! - Negative first-release offsets
//! - Duplicate process IDs
//! - Zero jobs per process and non-positive horizons
//! - Unknown policy identifiers
//! - Round Robin without a positive quantum
//!
//! All problems are collected, not just the first.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;
use crate::scheduler::{Policy, SimulationRequest};

/// Validation result.
pub type ValidationResult<T = ()> = Result<T, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyWorkload,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has `period <= 0`.
    InvalidPeriod,
    /// A process has `execution <= 0`.
    InvalidExecutionTime,
    /// A process has a negative arrival offset.
    InvalidArrival,
    /// `jobs_per_process` is zero.
    InvalidJobCount,
    /// The horizon is not positive.
    InvalidHorizon,
    /// The policy identifier is not recognized.
    UnknownPolicy,
    /// Round Robin selected with `quantum <= 0`.
    InvalidQuantum,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. `period > 0` and `execution > 0` for every process
/// 4. `arrival >= 0` for every process
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "At least one process is required",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        if p.period <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPeriod,
                format!("Process '{}' has non-positive period {}", p.name, p.period),
            ));
        }
        if p.execution <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidExecutionTime,
                format!(
                    "Process '{}' has non-positive execution time {}",
                    p.name, p.execution
                ),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                format!("Process '{}' has negative arrival {}", p.name, p.arrival),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a full simulation request and resolves its policy.
///
/// # Returns
/// The parsed `Policy` if all checks pass, `Err(errors)` with all detected
/// issues otherwise.
pub fn validate_request(request: &SimulationRequest) -> ValidationResult<Policy> {
    let mut errors = validate_processes(&request.processes).err().unwrap_or_default();

    if request.jobs_per_process == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidJobCount,
            "Jobs per process must be at least 1",
        ));
    }

    if request.horizon <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidHorizon,
            format!("Horizon must be positive, got {}", request.horizon),
        ));
    }

    let policy = match request.policy.parse::<Policy>() {
        Ok(policy) => Some(policy),
        Err(e) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownPolicy,
                e.to_string(),
            ));
            None
        }
    };

    if policy.is_some_and(|p| p.requires_quantum()) && request.quantum <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Round Robin quantum must be positive, got {}", request.quantum),
        ));
    }

    match policy {
        Some(policy) if errors.is_empty() => Ok(policy),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(0, 6, 2),
            Process::new(1, 8, 3).with_arrival(1),
        ]
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_request() {
        let request = SimulationRequest::new(sample_processes(), "EDF");
        assert_eq!(validate_request(&request), Ok(Policy::Edf));
    }

    #[test]
    fn test_empty_processes() {
        let errors = validate_processes(&[]).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::EmptyWorkload));
    }

    #[test]
    fn test_duplicate_process_id() {
        let procs = vec![Process::new(0, 6, 2), Process::new(0, 8, 1)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_non_positive_period_and_execution() {
        let procs = vec![Process::new(0, 0, 2), Process::new(1, 5, -1)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvalidPeriod));
        assert!(has_kind(&errors, ValidationErrorKind::InvalidExecutionTime));
    }

    #[test]
    fn test_negative_arrival() {
        let procs = vec![Process::new(0, 5, 1).with_arrival(-3)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvalidArrival));
    }

    #[test]
    fn test_execution_above_period_is_allowed() {
        let procs = vec![Process::new(0, 2, 3)];
        assert!(validate_processes(&procs).is_ok());
    }

    #[test]
    fn test_unknown_policy() {
        let request = SimulationRequest::new(sample_processes(), "Lottery");
        let errors = validate_request(&request).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::UnknownPolicy));
        assert!(errors[0].message.contains("Lottery"));
    }

    #[test]
    fn test_round_robin_quantum() {
        let request = SimulationRequest::new(sample_processes(), "Round Robin").with_quantum(0);
        let errors = validate_request(&request).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvalidQuantum));
    }

    #[test]
    fn test_quantum_ignored_for_other_policies() {
        let request = SimulationRequest::new(sample_processes(), "SRT").with_quantum(0);
        assert_eq!(validate_request(&request), Ok(Policy::Srt));
    }

    #[test]
    fn test_job_count_and_horizon() {
        let request = SimulationRequest::new(sample_processes(), "FCFS")
            .with_jobs_per_process(0)
            .with_horizon(0);
        let errors = validate_request(&request).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvalidJobCount));
        assert!(has_kind(&errors, ValidationErrorKind::InvalidHorizon));
    }

    #[test]
    fn test_multiple_errors() {
        let request = SimulationRequest::new(vec![Process::new(0, -1, 0)], "RR").with_quantum(-2);
        let errors = validate_request(&request).unwrap_err();
        assert!(errors.len() >= 3);
        assert!(has_kind(&errors, ValidationErrorKind::InvalidPeriod));
        assert!(has_kind(&errors, ValidationErrorKind::InvalidExecutionTime));
        assert!(has_kind(&errors, ValidationErrorKind::InvalidQuantum));
    }
}
