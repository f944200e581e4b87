/*!
 * Process Types
 * Caller-supplied description of a simulated process
 */

use super::id::ProcessId;
use crate::core::types::{Priority, Ticks};
use serde::{Deserialize, Serialize};

/// Immutable description of one process
///
/// The remaining-time counter is not part of the record: each simulator run
/// builds its own working copy, so records can be shared freely between runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pub id: ProcessId,
    #[serde(default)]
    pub arrival: Ticks,
    pub burst: Ticks,
    #[serde(default)]
    pub priority: Priority,
}

impl ProcessRecord {
    pub fn new(id: impl Into<ProcessId>, arrival: Ticks, burst: Ticks, priority: Priority) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority,
        }
    }

    /// Record with default priority, for policies that ignore it
    pub fn unprioritized(id: impl Into<ProcessId>, arrival: Ticks, burst: Ticks) -> Self {
        Self::new(id, arrival, burst, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_to_zero() {
        let record: ProcessRecord = serde_json::from_str(r#"{"id":"P1","burst":4}"#).unwrap();
        assert_eq!(record, ProcessRecord::new("P1", 0, 4, 0));
    }
}
