/*!
 * Simulation Result
 * Unified response returned by the scheduling engine
 */

use super::metrics::{Averages, MetricsRow, RowInput};
use super::stats::RunStats;
use super::timeline::TimelineSegment;
use crate::core::types::Ticks;
use crate::scheduler::{Outcome, Policy, TimeQuantum};
use serde::{Deserialize, Serialize};

/// Metrics, timeline and averages of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationResult {
    pub policy: Policy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Ticks>,
    /// One row per process, in input order
    pub rows: Vec<MetricsRow>,
    /// Execution order
    pub timeline: Vec<TimelineSegment>,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    pub average_response_time: f64,
    pub stats: RunStats,
}

impl SimulationResult {
    pub(crate) fn assemble(policy: Policy, quantum: Option<TimeQuantum>, outcome: Outcome) -> Self {
        let preemptive = policy.is_preemptive();
        let rows: Vec<MetricsRow> = outcome
            .processes
            .iter()
            .map(|process| {
                MetricsRow::calculate(
                    RowInput {
                        process_id: &process.id,
                        arrival: process.arrival,
                        burst: process.burst,
                        priority: process.priority,
                        first_run: process.first_run,
                        completion: process.completion,
                    },
                    preemptive,
                )
            })
            .collect();

        let averages = Averages::of(&rows);
        let stats = RunStats::from_timeline(&outcome.timeline);

        Self {
            policy,
            quantum: quantum.map(|q| q.ticks()),
            rows,
            timeline: outcome.timeline,
            average_waiting_time: averages.waiting_time,
            average_turnaround_time: averages.turnaround_time,
            average_response_time: averages.response_time,
            stats,
        }
    }

    /// Metrics row for `process_id`, if present
    pub fn row(&self, process_id: &str) -> Option<&MetricsRow> {
        self.rows.iter().find(|row| row.process_id == process_id)
    }

    /// Total CPU time across the timeline
    pub fn busy_time(&self) -> Ticks {
        self.timeline.iter().map(TimelineSegment::duration).sum()
    }
}
