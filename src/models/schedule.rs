//! Schedule (simulation output) model.
//!
//! A schedule is the execution timeline of one simulation run on a single
//! processor: the CPU-occupation intervals, the deadline misses, and one
//! outcome record per generated job.
//!
//! # Reference
//! Buttazzo (2011), "Hard Real-Time Computing Systems", Ch. 1.2

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// The complete output timeline of a simulation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// CPU-occupation intervals, in the order they were closed.
    pub entries: Vec<ScheduleEntry>,
    /// Deadline misses, in the order they were detected.
    pub missed: Vec<MissedDeadline>,
    /// One outcome per generated job.
    pub outcomes: Vec<JobOutcome>,
}

/// One contiguous interval `[start, end)` during which a job held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Instance index of the job.
    pub job_index: usize,
    /// Owning process.
    pub process_id: ProcessId,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

/// A job whose completion came strictly after its absolute deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedDeadline {
    /// Instance index of the job.
    pub job_index: usize,
    /// Owning process.
    pub process_id: ProcessId,
    /// The absolute deadline that was missed.
    pub absolute_deadline: i64,
}

/// Final state of a job at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    /// Completed at or before its deadline.
    Met,
    /// Completed after its deadline.
    Missed,
    /// Still had work left when the horizon was reached.
    Abandoned,
}

/// Per-job summary: timing, completion and deadline status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOutcome {
    /// Instance index of the job.
    pub job_index: usize,
    /// Owning process.
    pub process_id: ProcessId,
    /// Release time.
    pub release: i64,
    /// Absolute deadline.
    pub absolute_deadline: i64,
    /// First dispatch time, if the job ever ran.
    pub first_start: Option<i64>,
    /// Completion time, if the job finished.
    pub completion: Option<i64>,
    /// Final status.
    pub status: JobStatus,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(job_index: usize, process_id: ProcessId, start: i64, end: i64) -> Self {
        Self {
            job_index,
            process_id,
            start,
            end,
        }
    }

    /// Interval length (`end - start`).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether this entry belongs to job `(process_id, job_index)`.
    #[inline]
    pub fn is_job(&self, process_id: ProcessId, job_index: usize) -> bool {
        self.process_id == process_id && self.job_index == job_index
    }

    /// Whether the half-open intervals of `self` and `other` intersect.
    #[inline]
    pub fn overlaps(&self, other: &ScheduleEntry) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl JobOutcome {
    /// Time from release to completion.
    pub fn response_time(&self) -> Option<i64> {
        self.completion.map(|c| c - self.release)
    }

    /// Time from release to first dispatch.
    pub fn waiting_time(&self) -> Option<i64> {
        self.first_start.map(|s| s - self.release)
    }

    /// Whether the job finished (on time or late).
    pub fn is_completed(&self) -> bool {
        self.completion.is_some()
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an execution interval.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Appends a deadline miss.
    pub fn add_miss(&mut self, miss: MissedDeadline) {
        self.missed.push(miss);
    }

    /// Appends a job outcome.
    pub fn add_outcome(&mut self, outcome: JobOutcome) {
        self.outcomes.push(outcome);
    }

    /// Latest end time across all entries.
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.end).max().unwrap_or(0)
    }

    /// Total time the CPU was occupied.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(ScheduleEntry::duration).sum()
    }

    /// Entries of one job, in time order.
    pub fn entries_for_job(&self, process_id: ProcessId, job_index: usize) -> Vec<&ScheduleEntry> {
        let mut entries: Vec<&ScheduleEntry> = self
            .entries
            .iter()
            .filter(|e| e.is_job(process_id, job_index))
            .collect();
        entries.sort_by_key(|e| e.start);
        entries
    }

    /// Outcome of one job.
    pub fn outcome(&self, process_id: ProcessId, job_index: usize) -> Option<&JobOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.process_id == process_id && o.job_index == job_index)
    }

    /// Completion time of one job, if it finished.
    pub fn completion_time(&self, process_id: ProcessId, job_index: usize) -> Option<i64> {
        self.outcome(process_id, job_index).and_then(|o| o.completion)
    }

    /// Whether a miss was recorded for one job.
    pub fn is_missed(&self, process_id: ProcessId, job_index: usize) -> bool {
        self.missed
            .iter()
            .any(|m| m.process_id == process_id && m.job_index == job_index)
    }

    /// Returns the first pair of overlapping entries, if any.
    ///
    /// A single processor can hold at most one job at a time, so any hit
    /// here is a defect in the policy that produced the schedule.
    pub fn find_overlap(&self) -> Option<(ScheduleEntry, ScheduleEntry)> {
        let mut sorted: Vec<ScheduleEntry> = self.entries.clone();
        sorted.sort_by_key(|e| (e.start, e.end));
        sorted
            .windows(2)
            .find(|w| w[0].overlaps(&w[1]))
            .map(|w| (w[0], w[1]))
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of deadline misses.
    pub fn miss_count(&self) -> usize {
        self.missed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_entry(ScheduleEntry::new(0, 0, 0, 2));
        s.add_entry(ScheduleEntry::new(0, 1, 2, 4));
        s.add_entry(ScheduleEntry::new(0, 0, 4, 5));
        s.add_entry(ScheduleEntry::new(1, 0, 7, 10));
        s
    }

    #[test]
    fn test_makespan_and_busy_time() {
        let s = sample_schedule();
        assert_eq!(s.makespan(), 10);
        assert_eq!(s.busy_time(), 8);
    }

    #[test]
    fn test_entries_for_job() {
        let s = sample_schedule();
        let p0j0 = s.entries_for_job(0, 0);
        assert_eq!(p0j0.len(), 2);
        assert_eq!(p0j0[0].start, 0);
        assert_eq!(p0j0[1].start, 4);
        assert!(s.entries_for_job(2, 0).is_empty());
    }

    #[test]
    fn test_no_overlap() {
        let s = sample_schedule();
        assert!(s.find_overlap().is_none());
    }

    #[test]
    fn test_overlap_detected() {
        let mut s = sample_schedule();
        s.add_entry(ScheduleEntry::new(2, 1, 9, 11));
        let (a, b) = s.find_overlap().unwrap();
        assert_eq!(a.start, 7);
        assert_eq!(b.start, 9);
    }

    #[test]
    fn test_touching_intervals_do_not_overlap() {
        let a = ScheduleEntry::new(0, 0, 0, 2);
        let b = ScheduleEntry::new(0, 1, 2, 4);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_outcome_queries() {
        let mut s = Schedule::new();
        s.add_outcome(JobOutcome {
            job_index: 0,
            process_id: 1,
            release: 1,
            absolute_deadline: 6,
            first_start: Some(2),
            completion: Some(7),
            status: JobStatus::Missed,
        });
        s.add_miss(MissedDeadline {
            job_index: 0,
            process_id: 1,
            absolute_deadline: 6,
        });

        let o = s.outcome(1, 0).unwrap();
        assert_eq!(o.response_time(), Some(6));
        assert_eq!(o.waiting_time(), Some(1));
        assert!(o.is_completed());
        assert_eq!(s.completion_time(1, 0), Some(7));
        assert!(s.is_missed(1, 0));
        assert!(!s.is_missed(0, 0));
        assert_eq!(s.miss_count(), 1);
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert_eq!(s.makespan(), 0);
        assert_eq!(s.busy_time(), 0);
        assert_eq!(s.entry_count(), 0);
        assert!(s.find_overlap().is_none());
    }
}
