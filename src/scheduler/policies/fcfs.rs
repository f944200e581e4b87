/*!
 * First-Come-First-Served
 */

use super::super::traits::PolicySimulator;
use super::super::types::Policy;
use super::super::workload::Workload;
use std::collections::VecDeque;

/// Runs processes to completion in arrival order
pub(crate) struct FirstComeFirstServed;

impl PolicySimulator for FirstComeFirstServed {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn run(&self, workload: &mut Workload) {
        let mut ready = VecDeque::new();

        loop {
            workload.admit(|entry| ready.push_back(entry.index));

            let Some(index) = ready.pop_front() else {
                if workload.idle_until_next_arrival() {
                    continue;
                }
                break;
            };

            workload.run_to_completion(index);
        }
    }
}
