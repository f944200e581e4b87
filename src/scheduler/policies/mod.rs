/*!
 * Policy Simulators
 * One event loop per scheduling policy
 */

mod fcfs;
mod keyed;
mod priority;
mod round_robin;
mod sjf;

pub(crate) use fcfs::FirstComeFirstServed;
pub(crate) use priority::{PreemptivePriority, PriorityFirst};
pub(crate) use round_robin::RoundRobin;
pub(crate) use sjf::{ShortestJobFirst, ShortestRemainingTime};
