/*!
 * Simulation Workload
 * Virtual clock, arrival admission and execution bookkeeping shared by all policies
 */

use super::entry::{Entry, Finished};
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Ticks;
use crate::process::ProcessRecord;
use crate::report::{TimelineBuilder, TimelineSegment};
use tracing::trace;

/// Mutable state of one simulation run
///
/// Owns the working copies of every process. Policies decide *which* process
/// runs and for how long; the workload advances the clock, records the
/// timeline and tracks completions.
pub(crate) struct Workload {
    entries: Vec<Entry>,
    // Indices into `entries`, sorted by (arrival, input order)
    arrival_order: Vec<usize>,
    admitted: usize,
    completed: usize,
    clock: Ticks,
    timeline: TimelineBuilder,
}

/// Everything a finished run hands to the metrics stage
pub(crate) struct Outcome {
    /// One per process, in input order
    pub processes: Vec<Finished>,
    pub timeline: Vec<TimelineSegment>,
}

impl Workload {
    pub fn new(records: &[ProcessRecord]) -> Self {
        let entries: Vec<Entry> = records
            .iter()
            .enumerate()
            .map(|(index, record)| Entry::new(index, record))
            .collect();

        let mut arrival_order: Vec<usize> = (0..entries.len()).collect();
        // Stable sort keeps input order for simultaneous arrivals
        arrival_order.sort_by_key(|&index| entries[index].arrival);

        Self {
            entries,
            arrival_order,
            admitted: 0,
            completed: 0,
            clock: 0,
            timeline: TimelineBuilder::new(),
        }
    }

    #[inline(always)]
    pub fn clock(&self) -> Ticks {
        self.clock
    }

    #[inline(always)]
    pub fn entry(&self, index: usize) -> &Entry {
        &self.entries[index]
    }

    /// Hand every process with `arrival <= clock` that has not been admitted
    /// yet to `on_arrival`, in arrival order
    pub fn admit(&mut self, mut on_arrival: impl FnMut(&Entry)) {
        while let Some(&index) = self.arrival_order.get(self.admitted) {
            let entry = &self.entries[index];
            if entry.arrival > self.clock {
                break;
            }
            on_arrival(entry);
            self.admitted += 1;
        }
    }

    /// Earliest arrival among processes not yet admitted
    #[inline]
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.arrival_order
            .get(self.admitted)
            .map(|&index| self.entries[index].arrival)
    }

    /// Jump the clock to the next arrival; returns false when nothing is left
    pub fn idle_until_next_arrival(&mut self) -> bool {
        match self.next_arrival() {
            Some(at) => {
                trace!(from = self.clock, to = at, "cpu idle");
                self.clock = self.clock.max(at);
                true
            }
            None => false,
        }
    }

    /// Run `index` for `duration` ticks starting at the current clock
    ///
    /// Returns true if the process finished during this slice.
    pub fn run_for(&mut self, index: usize, duration: Ticks) -> bool {
        let start = self.clock;
        let entry = &mut self.entries[index];
        debug_assert!(duration > 0, "empty slice for {}", entry.id);
        debug_assert!(duration <= entry.remaining, "slice exceeds remaining");

        let end = start + duration;
        entry.remaining -= duration;
        entry.first_run.get_or_insert(start);
        self.timeline.record(&entry.id, start, end);
        self.clock = end;

        trace!(
            process = %entry.id,
            start,
            end,
            remaining = entry.remaining,
            "dispatch"
        );

        if entry.is_finished() {
            entry.completion = Some(end);
            self.completed += 1;
            true
        } else {
            false
        }
    }

    /// Run `index` for all of its remaining time
    pub fn run_to_completion(&mut self, index: usize) {
        let remaining = self.entries[index].remaining;
        self.run_for(index, remaining);
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.completed == self.entries.len()
    }

    /// Close the run; every process must have completed
    pub fn finish(self) -> SchedulerResult<Outcome> {
        let processes = self
            .entries
            .iter()
            .map(|entry| {
                entry.finished().ok_or_else(|| {
                    SchedulerError::Internal(format!(
                        "process '{}' ended with {} ticks of pending work",
                        entry.id, entry.remaining
                    ))
                })
            })
            .collect::<SchedulerResult<Vec<_>>>()?;

        Ok(Outcome {
            processes,
            timeline: self.timeline.build(),
        })
    }
}
