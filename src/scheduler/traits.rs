/*!
 * Scheduler Traits
 * Interface shared by every policy simulator
 */

use super::types::Policy;
use super::workload::Workload;

/// One scheduling policy's event loop
///
/// Implementations pick the next process from their own ready queue and
/// drive the workload until every process has finished.
pub(crate) trait PolicySimulator {
    /// Policy implemented by this simulator
    fn policy(&self) -> Policy;

    /// Run the workload to completion
    fn run(&self, workload: &mut Workload);
}
