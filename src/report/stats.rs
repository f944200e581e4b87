/*!
 * Run Statistics
 * CPU-level counters derived from the finished timeline
 */

use super::timeline::TimelineSegment;
use crate::core::types::Ticks;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Scheduler counters for one simulation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunStats {
    /// Number of timeline segments
    pub dispatches: usize,
    /// Consecutive segments that belong to different processes
    pub context_switches: usize,
    /// Times a process left the CPU with work remaining
    pub preemptions: usize,
    /// Ticks in `[0, makespan)` during which nothing ran
    pub idle_time: Ticks,
    /// Completion time of the last process
    pub makespan: Ticks,
    /// Busy ticks divided by makespan
    pub cpu_utilization: f64,
}

impl RunStats {
    pub fn from_timeline(timeline: &[TimelineSegment]) -> Self {
        let makespan = timeline.last().map(|s| s.end).unwrap_or(0);
        let busy: Ticks = timeline.iter().map(TimelineSegment::duration).sum();

        let context_switches = timeline
            .windows(2)
            .filter(|pair| pair[0].process_id != pair[1].process_id)
            .count();

        // Every segment except a process's last one ended with work left
        let mut per_process: AHashMap<&str, usize> = AHashMap::new();
        for segment in timeline {
            *per_process.entry(segment.process_id.as_str()).or_default() += 1;
        }
        let preemptions = per_process.values().map(|count| count - 1).sum();

        Self {
            dispatches: timeline.len(),
            context_switches,
            preemptions,
            idle_time: makespan - busy,
            makespan,
            cpu_utilization: if makespan > 0 {
                busy as f64 / makespan as f64
            } else {
                0.0
            },
        }
    }
}
