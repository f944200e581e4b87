/*!
 * Round Robin
 * FIFO ready queue with a fixed time quantum
 */

use super::super::traits::PolicySimulator;
use super::super::types::{Policy, TimeQuantum};
use super::super::workload::Workload;
use std::collections::VecDeque;

/// Round robin over a FIFO ready queue
pub(crate) struct RoundRobin {
    quantum: TimeQuantum,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }
}

impl PolicySimulator for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin
    }

    fn run(&self, workload: &mut Workload) {
        let quantum = self.quantum.ticks();
        let mut ready = VecDeque::new();

        workload.admit(|entry| ready.push_back(entry.index));

        loop {
            let Some(index) = ready.pop_front() else {
                if workload.idle_until_next_arrival() {
                    workload.admit(|entry| ready.push_back(entry.index));
                    continue;
                }
                break;
            };

            let slice = workload.entry(index).remaining.min(quantum);
            let finished = workload.run_for(index, slice);

            // Arrivals during the slice join ahead of the preempted process
            workload.admit(|entry| ready.push_back(entry.index));
            if !finished {
                ready.push_back(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{completions, run, segments};
    use super::*;
    use crate::process::ProcessRecord;

    fn rr(quantum: i64) -> RoundRobin {
        RoundRobin::new(TimeQuantum::new(quantum).unwrap())
    }

    #[test]
    fn test_fifo_rotation_with_staggered_arrivals() {
        let outcome = run(
            &rr(2),
            &[
                ProcessRecord::unprioritized("P1", 0, 5),
                ProcessRecord::unprioritized("P2", 1, 3),
                ProcessRecord::unprioritized("P3", 2, 4),
            ],
        );

        assert_eq!(
            segments(&outcome),
            vec![
                ("P1", 0, 2),
                ("P2", 2, 4),
                ("P3", 4, 6),
                ("P1", 6, 8),
                ("P2", 8, 9),
                ("P3", 9, 11),
                ("P1", 11, 12),
            ]
        );
        assert_eq!(completions(&outcome), vec![12, 9, 11]);
    }

    #[test]
    fn test_arrival_at_slice_end_precedes_requeue() {
        let outcome = run(
            &rr(3),
            &[
                ProcessRecord::unprioritized("A", 0, 6),
                ProcessRecord::unprioritized("B", 3, 3),
            ],
        );

        assert_eq!(
            segments(&outcome),
            vec![("A", 0, 3), ("B", 3, 6), ("A", 6, 9)]
        );
    }

    #[test]
    fn test_lone_process_is_coalesced() {
        let outcome = run(&rr(1), &[ProcessRecord::unprioritized("solo", 2, 4)]);
        assert_eq!(segments(&outcome), vec![("solo", 2, 6)]);
    }

    #[test]
    fn test_idle_gap_between_bursts() {
        let outcome = run(
            &rr(2),
            &[
                ProcessRecord::unprioritized("A", 0, 1),
                ProcessRecord::unprioritized("B", 5, 3),
            ],
        );

        assert_eq!(segments(&outcome), vec![("A", 0, 1), ("B", 5, 8)]);
    }
}
