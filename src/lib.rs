/*!
 * CPU Scheduling Simulator Library
 * Classical CPU scheduling policies over a fixed set of processes
 */

pub mod core;
pub mod engine;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{SchedulerError, SchedulerResult};
pub use crate::core::types::{Priority, Ticks};
pub use engine::{simulate, simulate_request, SimulationRequest};
pub use monitoring::init_tracing;
pub use process::{ProcessId, ProcessRecord};
pub use report::{MetricsRow, RunStats, SimulationResult, TimelineSegment};
pub use scheduler::{Policy, TimeQuantum};
