/*!
 * Process Module
 * Process records consumed by the scheduling engine
 */

mod id;
mod types;

pub use id::ProcessId;
pub use types::ProcessRecord;
