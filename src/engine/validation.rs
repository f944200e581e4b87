/*!
 * Request Validation
 * Fail-fast checks run before any simulation work
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::limits::{MAX_ARRIVAL, MAX_BURST, MAX_PROCESSES};
use crate::core::types::Ticks;
use crate::process::ProcessRecord;
use crate::scheduler::{Policy, TimeQuantum};
use ahash::AHashSet;
use tracing::debug;

/// Validate a request and resolve its quantum
///
/// Checks run in a fixed order: empty input, process count, quantum, each
/// record's fields in input order, then duplicate ids. Returns the quantum
/// only for policies that use one.
pub(crate) fn validate(
    processes: &[ProcessRecord],
    policy: Policy,
    quantum: Option<Ticks>,
) -> SchedulerResult<Option<TimeQuantum>> {
    if processes.is_empty() {
        return Err(SchedulerError::EmptyInput);
    }

    if processes.len() > MAX_PROCESSES {
        return Err(SchedulerError::TooManyProcesses {
            count: processes.len(),
            limit: MAX_PROCESSES,
        });
    }

    let quantum = if policy.requires_quantum() {
        Some(TimeQuantum::require(quantum)?)
    } else {
        if let Some(ignored) = quantum {
            debug!(policy = %policy, quantum = ignored, "quantum ignored by policy");
        }
        None
    };

    for record in processes {
        validate_record(record)?;
    }

    let mut seen = AHashSet::with_capacity(processes.len());
    for record in processes {
        if !seen.insert(record.id.as_str()) {
            return Err(SchedulerError::DuplicateId {
                id: record.id.clone(),
            });
        }
    }

    Ok(quantum)
}

fn validate_record(record: &ProcessRecord) -> SchedulerResult<()> {
    if record.id.is_empty() {
        return Err(SchedulerError::invalid_field(&record.id, "id", "\"\""));
    }

    if !(0..=MAX_ARRIVAL).contains(&record.arrival) {
        return Err(SchedulerError::invalid_field(
            &record.id,
            "arrival",
            record.arrival,
        ));
    }

    if !(1..=MAX_BURST).contains(&record.burst) {
        return Err(SchedulerError::invalid_field(
            &record.id,
            "burst",
            record.burst,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ProcessRecord> {
        vec![
            ProcessRecord::unprioritized("P1", 0, 5),
            ProcessRecord::unprioritized("P2", 1, 3),
        ]
    }

    #[test]
    fn test_valid_request() {
        assert_eq!(validate(&sample(), Policy::Fcfs, None).unwrap(), None);
        assert_eq!(
            validate(&sample(), Policy::RoundRobin, Some(2)).unwrap(),
            Some(TimeQuantum::new(2).unwrap())
        );
    }

    #[test]
    fn test_quantum_ignored_outside_round_robin() {
        assert_eq!(validate(&sample(), Policy::SjfPreemptive, Some(0)).unwrap(), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            validate(&[], Policy::RoundRobin, None).unwrap_err(),
            SchedulerError::EmptyInput
        );
    }

    #[test]
    fn test_missing_quantum() {
        assert_eq!(
            validate(&sample(), Policy::RoundRobin, None).unwrap_err(),
            SchedulerError::MissingQuantum { value: None }
        );
        assert_eq!(
            validate(&sample(), Policy::RoundRobin, Some(-1)).unwrap_err(),
            SchedulerError::MissingQuantum {
                value: Some("-1".to_string())
            }
        );
    }

    #[test]
    fn test_invalid_fields() {
        let negative_arrival = vec![ProcessRecord::unprioritized("P1", -1, 5)];
        assert_eq!(
            validate(&negative_arrival, Policy::Fcfs, None).unwrap_err(),
            SchedulerError::invalid_field("P1", "arrival", -1)
        );

        let zero_burst = vec![ProcessRecord::unprioritized("P1", 0, 0)];
        assert_eq!(
            validate(&zero_burst, Policy::Fcfs, None).unwrap_err(),
            SchedulerError::invalid_field("P1", "burst", 0)
        );

        let huge_burst = vec![ProcessRecord::unprioritized("P1", 0, MAX_BURST + 1)];
        assert!(validate(&huge_burst, Policy::Fcfs, None).is_err());

        let empty_id = vec![ProcessRecord::unprioritized("", 0, 1)];
        assert_eq!(
            validate(&empty_id, Policy::Fcfs, None).unwrap_err().kind(),
            "invalid_field"
        );
    }

    #[test]
    fn test_duplicate_id() {
        let mut records = sample();
        records.push(ProcessRecord::unprioritized("P1", 4, 1));
        assert_eq!(
            validate(&records, Policy::Fcfs, None).unwrap_err(),
            SchedulerError::DuplicateId { id: "P1".into() }
        );
    }

    #[test]
    fn test_too_many_processes() {
        let records: Vec<ProcessRecord> = (0..=MAX_PROCESSES)
            .map(|i| ProcessRecord::unprioritized(format!("P{}", i), 0, 1))
            .collect();
        assert_eq!(
            validate(&records, Policy::Fcfs, None).unwrap_err().kind(),
            "too_many_processes"
        );
    }
}
