//! Simulation domain models.
//!
//! Provides the data types shared by the job generator, the dispatching
//! policies and the run coordinator.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Real-time literature | OS kernel |
//! |------------|---------------------|-----------|
//! | Process | Periodic task τᵢ | Thread / periodic timer |
//! | Job | Job τᵢ,ⱼ | One activation |
//! | ScheduleEntry | Execution interval | Time on CPU between context switches |
//! | Schedule | Feasibility trace | Scheduler trace |

mod job;
mod process;
mod schedule;

pub use job::Job;
pub use process::{Process, ProcessId};
pub use schedule::{JobOutcome, JobStatus, MissedDeadline, Schedule, ScheduleEntry};
