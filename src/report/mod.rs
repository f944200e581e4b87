/*!
 * Report Module
 * Timeline construction, metrics and the simulation result
 */

mod metrics;
mod result;
mod stats;
mod timeline;

pub use metrics::{Averages, MetricsRow, RowInput};
pub use result::SimulationResult;
pub use stats::RunStats;
pub use timeline::{TimelineBuilder, TimelineSegment};
