/*!
 * Metrics Calculator
 * Per-process timing metrics and their averages
 */

use crate::core::types::{Priority, Ticks};
use crate::process::ProcessId;
use serde::{Deserialize, Serialize};

/// Timing metrics for one process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MetricsRow {
    pub process_id: ProcessId,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Priority,
    /// Dispatch time for non-preemptive policies, arrival for preemptive ones
    pub start_time: Ticks,
    pub completion_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
    /// Time from arrival to first dispatch
    pub response_time: Ticks,
}

/// Inputs for one metrics row
#[derive(Debug, Clone, Copy)]
pub struct RowInput<'a> {
    pub process_id: &'a ProcessId,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Priority,
    pub first_run: Ticks,
    pub completion: Ticks,
}

impl MetricsRow {
    /// Derive waiting and turnaround time from completion, arrival and burst
    pub fn calculate(input: RowInput<'_>, preemptive: bool) -> Self {
        let turnaround_time = input.completion - input.arrival;
        let waiting_time = turnaround_time - input.burst;
        debug_assert!(
            waiting_time >= 0,
            "negative waiting time for {}",
            input.process_id
        );

        Self {
            process_id: input.process_id.clone(),
            arrival: input.arrival,
            burst: input.burst,
            priority: input.priority,
            start_time: if preemptive {
                input.arrival
            } else {
                input.first_run
            },
            completion_time: input.completion,
            waiting_time,
            turnaround_time,
            response_time: input.first_run - input.arrival,
        }
    }
}

/// Arithmetic means over all processes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Averages {
    pub waiting_time: f64,
    pub turnaround_time: f64,
    pub response_time: f64,
}

impl Averages {
    pub fn of(rows: &[MetricsRow]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }

        let n = rows.len() as f64;
        let sum = |f: fn(&MetricsRow) -> Ticks| rows.iter().map(f).sum::<Ticks>() as f64 / n;

        Self {
            waiting_time: sum(|r| r.waiting_time),
            turnaround_time: sum(|r| r.turnaround_time),
            response_time: sum(|r| r.response_time),
        }
    }
}
