/*!
 * Timeline Builder
 * Gantt segments with coalescing of back-to-back runs of the same process
 */

use crate::core::types::Ticks;
use crate::process::ProcessId;
use serde::{Deserialize, Serialize};

/// Contiguous interval during which one process held the CPU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TimelineSegment {
    pub process_id: ProcessId,
    pub start: Ticks,
    pub end: Ticks,
}

impl TimelineSegment {
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Accumulates execution intervals in execution order
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    segments: Vec<TimelineSegment>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `process_id` ran over `[start, end)`
    ///
    /// Extends the previous segment when it belongs to the same process and
    /// ends exactly at `start`. Empty intervals are ignored.
    pub fn record(&mut self, process_id: &ProcessId, start: Ticks, end: Ticks) {
        if end <= start {
            return;
        }

        if let Some(last) = self.segments.last_mut() {
            if last.process_id == *process_id && last.end == start {
                last.end = end;
                return;
            }
        }

        self.segments.push(TimelineSegment {
            process_id: process_id.clone(),
            start,
            end,
        });
    }

    pub fn build(self) -> Vec<TimelineSegment> {
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesces_adjacent_steps() {
        let p1 = ProcessId::from("P1");
        let mut builder = TimelineBuilder::new();
        for t in 0..4 {
            builder.record(&p1, t, t + 1);
        }

        assert_eq!(
            builder.build(),
            vec![TimelineSegment {
                process_id: p1,
                start: 0,
                end: 4
            }]
        );
    }

    #[test]
    fn test_keeps_real_switches_and_gaps() {
        let a = ProcessId::from("A");
        let b = ProcessId::from("B");
        let mut builder = TimelineBuilder::new();
        builder.record(&a, 0, 2);
        builder.record(&b, 2, 3);
        builder.record(&a, 3, 5);
        // Same process after an idle gap stays a separate segment
        builder.record(&a, 7, 8);
        builder.record(&b, 8, 8);

        let spans: Vec<_> = builder
            .build()
            .into_iter()
            .map(|s| (s.process_id.to_string(), s.start, s.end))
            .collect();
        assert_eq!(
            spans,
            vec![
                ("A".to_string(), 0, 2),
                ("B".to_string(), 2, 3),
                ("A".to_string(), 3, 5),
                ("A".to_string(), 7, 8),
            ]
        );
    }
}
