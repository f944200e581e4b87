/*!
 * Scheduler Entry Types
 * Per-run working copies of process records and heap ordering
 */

use crate::core::types::{Priority, Ticks};
use crate::process::{ProcessId, ProcessRecord};
use std::cmp::Ordering;

/// Private working copy of one process for a single simulation run
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    /// Position in the caller's input, the final tie-breaker
    pub index: usize,
    pub id: ProcessId,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Priority,
    pub remaining: Ticks,
    /// Time of the first dispatch, used for response time
    pub first_run: Option<Ticks>,
    pub completion: Option<Ticks>,
}

impl Entry {
    pub fn new(index: usize, record: &ProcessRecord) -> Self {
        Self {
            index,
            id: record.id.clone(),
            arrival: record.arrival,
            burst: record.burst,
            priority: record.priority,
            remaining: record.burst,
            first_run: None,
            completion: None,
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }
}

/// Timing of a process that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Finished {
    pub id: ProcessId,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Priority,
    pub first_run: Ticks,
    pub completion: Ticks,
}

impl Entry {
    /// `None` while the entry still has work left
    pub fn finished(&self) -> Option<Finished> {
        Some(Finished {
            id: self.id.clone(),
            arrival: self.arrival,
            burst: self.burst,
            priority: self.priority,
            first_run: self.first_run?,
            completion: self.completion?,
        })
    }
}

/// Selection key extracted from an entry; smaller keys run first
pub(crate) type KeyFn = fn(&Entry) -> i64;

/// Ready-queue candidate for keyed policies
///
/// The key is captured when the candidate is queued. For shortest remaining
/// time this stays correct because only the running process changes its
/// remaining time, and it is popped while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub key: i64,
    pub arrival: Ticks,
    pub index: usize,
}

impl Candidate {
    #[inline]
    pub fn of(entry: &Entry, key: KeyFn) -> Self {
        Self {
            key: key(entry),
            arrival: entry.arrival,
            index: entry.index,
        }
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so reverse every comparison: smallest key,
        // then earliest arrival, then earliest input position pops first
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.arrival.cmp(&self.arrival))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
