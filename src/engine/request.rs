/*!
 * Simulation Request
 * Caller-owned request object and its JSON codec
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Ticks;
use crate::process::{ProcessId, ProcessRecord};
use crate::scheduler::Policy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Everything needed for one `simulate` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationRequest {
    pub policy: Policy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Ticks>,
    pub processes: Vec<ProcessRecord>,
}

impl SimulationRequest {
    pub fn new(policy: Policy, processes: Vec<ProcessRecord>) -> Self {
        Self {
            policy,
            quantum: None,
            processes,
        }
    }

    pub fn with_quantum(mut self, quantum: Ticks) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Decode a JSON request, reporting bad input as typed errors
    ///
    /// Unlike plain `serde_json::from_str`, every rejected field maps onto a
    /// specific `SchedulerError`: unknown policy names become
    /// `UnsupportedPolicy`, non-integer process fields become `InvalidField`.
    /// Range checks are left to the engine.
    pub fn from_json(input: &str) -> SchedulerResult<Self> {
        let value: Value = serde_json::from_str(input)?;
        let object = value
            .as_object()
            .ok_or_else(|| malformed("request must be a JSON object"))?;

        let policy = match object.get("policy") {
            Some(Value::String(name)) => Policy::from_str(name)?,
            Some(other) => return Err(SchedulerError::UnsupportedPolicy(other.to_string())),
            None => return Err(malformed("missing field 'policy'")),
        };

        let quantum = if policy.requires_quantum() {
            decode_quantum(object.get("quantum"))?
        } else {
            // Non round-robin policies never read the quantum
            object.get("quantum").and_then(Value::as_i64)
        };

        let processes = match object.get("processes") {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(position, item)| decode_process(position, item))
                .collect::<SchedulerResult<Vec<_>>>()?,
            Some(_) => return Err(malformed("'processes' must be an array")),
            None => return Err(malformed("missing field 'processes'")),
        };

        Ok(Self {
            policy,
            quantum,
            processes,
        })
    }

    pub fn to_json(&self) -> SchedulerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn malformed(reason: &str) -> SchedulerError {
    SchedulerError::MalformedRequest(reason.to_string())
}

fn decode_quantum(value: Option<&Value>) -> SchedulerResult<Option<Ticks>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => match v.as_i64() {
            Some(ticks) => Ok(Some(ticks)),
            None => Err(SchedulerError::MissingQuantum {
                value: Some(v.to_string()),
            }),
        },
    }
}

fn decode_process(position: usize, item: &Value) -> SchedulerResult<ProcessRecord> {
    let object = item
        .as_object()
        .ok_or_else(|| malformed(&format!("process #{} must be a JSON object", position)))?;

    // Placeholder name for errors until the id is known
    let placeholder = ProcessId::from(format!("#{}", position));

    let id = match object.get("id") {
        Some(Value::String(s)) => ProcessId::from(s.as_str()),
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => ProcessId::from(n.to_string()),
        Some(other) => return Err(SchedulerError::invalid_field(placeholder, "id", other)),
        None => return Err(SchedulerError::invalid_field(placeholder, "id", "missing")),
    };

    let arrival = integer_field(object, &id, "arrival")?.unwrap_or(0);
    let burst = integer_field(object, &id, "burst")?
        .ok_or_else(|| SchedulerError::invalid_field(&id, "burst", "missing"))?;
    let priority = integer_field(object, &id, "priority")?.unwrap_or(0);

    Ok(ProcessRecord {
        id,
        arrival,
        burst,
        priority,
    })
}

fn integer_field(
    object: &Map<String, Value>,
    id: &ProcessId,
    field: &str,
) -> SchedulerResult<Option<i64>> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| SchedulerError::invalid_field(id, field, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_full_request() {
        let request = SimulationRequest::from_json(
            r#"{
                "policy": "round_robin",
                "quantum": 2,
                "processes": [
                    {"id": "P1", "arrival": 0, "burst": 5, "priority": 2},
                    {"id": 7, "burst": 3}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            request,
            SimulationRequest::new(
                Policy::RoundRobin,
                vec![
                    ProcessRecord::new("P1", 0, 5, 2),
                    ProcessRecord::new("7", 0, 3, 0),
                ],
            )
            .with_quantum(2)
        );
    }

    #[test]
    fn test_unsupported_policy() {
        let err = SimulationRequest::from_json(r#"{"policy": "lottery", "processes": []}"#)
            .unwrap_err();
        assert_eq!(err, SchedulerError::UnsupportedPolicy("lottery".to_string()));
    }

    #[test]
    fn test_non_integer_fields() {
        let err = SimulationRequest::from_json(
            r#"{"policy": "fcfs", "processes": [{"id": "P1", "burst": 2.5}]}"#,
        )
        .unwrap_err();
        assert_eq!(err, SchedulerError::invalid_field("P1", "burst", "2.5"));

        let err = SimulationRequest::from_json(
            r#"{"policy": "fcfs", "processes": [{"id": "P1", "arrival": "3", "burst": 2}]}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), "invalid_field");
    }

    #[test]
    fn test_missing_fields() {
        let err =
            SimulationRequest::from_json(r#"{"policy": "fcfs", "processes": [{"id": "P1"}]}"#)
                .unwrap_err();
        assert_eq!(err, SchedulerError::invalid_field("P1", "burst", "missing"));

        let err = SimulationRequest::from_json(r#"{"policy": "fcfs", "processes": [{"burst": 1}]}"#)
            .unwrap_err();
        assert_eq!(err, SchedulerError::invalid_field("#0", "id", "missing"));

        let err = SimulationRequest::from_json(r#"{"processes": []}"#).unwrap_err();
        assert_eq!(err.kind(), "malformed_request");
    }

    #[test]
    fn test_non_integer_quantum_keeps_supplied_value() {
        let err = SimulationRequest::from_json(
            r#"{"policy": "rr", "quantum": 1.5, "processes": [{"id": "P1", "burst": 2}]}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SchedulerError::MissingQuantum {
                value: Some("1.5".to_string())
            }
        );

        let err = SimulationRequest::from_json(
            r#"{"policy": "rr", "quantum": "2", "processes": [{"id": "P1", "burst": 2}]}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SchedulerError::MissingQuantum {
                value: Some("\"2\"".to_string())
            }
        );
        assert_eq!(
            err.to_string(),
            "Round robin requires a positive time quantum (got \"2\")"
        );
    }

    #[test]
    fn test_malformed_json() {
        let err = SimulationRequest::from_json("{not json").unwrap_err();
        assert_eq!(err.kind(), "malformed_request");
    }

    #[test]
    fn test_to_json_decodes_back() {
        let request = SimulationRequest::new(
            Policy::PriorityPreemptive,
            vec![ProcessRecord::new("P1", 1, 2, 3)],
        );
        let json = request.to_json().unwrap();
        assert_eq!(SimulationRequest::from_json(&json).unwrap(), request);
    }
}
