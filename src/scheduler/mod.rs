/*!
 * Scheduler Module
 * Policy selection and the per-policy simulation loops
 */

mod entry;
mod policies;
mod traits;
pub mod types;
mod workload;

pub(crate) use policies::{
    FirstComeFirstServed, PreemptivePriority, PriorityFirst, RoundRobin, ShortestJobFirst,
    ShortestRemainingTime,
};
pub(crate) use traits::PolicySimulator;
pub(crate) use workload::{Outcome, Workload};

// Re-export public API
pub use types::{Policy, TimeQuantum};
