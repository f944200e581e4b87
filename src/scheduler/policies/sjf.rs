/*!
 * Shortest Job First
 * Non-preemptive (by burst) and preemptive (by remaining time) variants
 */

use super::super::entry::Entry;
use super::super::traits::PolicySimulator;
use super::super::types::Policy;
use super::super::workload::Workload;
use super::keyed::{run_non_preemptive, run_preemptive};

fn burst(entry: &Entry) -> i64 {
    entry.burst
}

fn remaining(entry: &Entry) -> i64 {
    entry.remaining
}

/// Shortest burst among ready processes, run to completion
pub(crate) struct ShortestJobFirst;

impl PolicySimulator for ShortestJobFirst {
    fn policy(&self) -> Policy {
        Policy::SjfNonPreemptive
    }

    fn run(&self, workload: &mut Workload) {
        run_non_preemptive(workload, burst);
    }
}

/// Shortest remaining time first
pub(crate) struct ShortestRemainingTime;

impl PolicySimulator for ShortestRemainingTime {
    fn policy(&self) -> Policy {
        Policy::SjfPreemptive
    }

    fn run(&self, workload: &mut Workload) {
        run_preemptive(workload, remaining);
    }
}
