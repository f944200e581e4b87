/*!
 * Priority Scheduling
 * Lower priority value runs first; non-preemptive and preemptive variants
 */

use super::super::entry::Entry;
use super::super::traits::PolicySimulator;
use super::super::types::Policy;
use super::super::workload::Workload;
use super::keyed::{run_non_preemptive, run_preemptive};

fn priority(entry: &Entry) -> i64 {
    entry.priority
}

/// Highest priority ready process, run to completion
pub(crate) struct PriorityFirst;

impl PolicySimulator for PriorityFirst {
    fn policy(&self) -> Policy {
        Policy::PriorityNonPreemptive
    }

    fn run(&self, workload: &mut Workload) {
        run_non_preemptive(workload, priority);
    }
}

/// Highest priority ready process, preempted when a better one arrives
pub(crate) struct PreemptivePriority;

impl PolicySimulator for PreemptivePriority {
    fn policy(&self) -> Policy {
        Policy::PriorityPreemptive
    }

    fn run(&self, workload: &mut Workload) {
        run_preemptive(workload, priority);
    }
}
