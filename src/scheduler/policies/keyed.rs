/*!
 * Keyed Ready Queue Loops
 * Shared event loops for policies that pick the smallest selection key
 */

use super::super::entry::{Candidate, KeyFn};
use super::super::workload::Workload;
use std::collections::BinaryHeap;

/// Dispatch the smallest-key ready process and run it to completion
///
/// The ready set is re-evaluated at every decision point, so a process that
/// arrives while another one runs competes at the next dispatch.
pub(crate) fn run_non_preemptive(workload: &mut Workload, key: KeyFn) {
    let mut ready = BinaryHeap::new();

    loop {
        workload.admit(|entry| ready.push(Candidate::of(entry, key)));

        let Some(next) = ready.pop() else {
            if workload.idle_until_next_arrival() {
                continue;
            }
            break;
        };

        workload.run_to_completion(next.index);
    }
}

/// Always run the smallest-key ready process, re-evaluating on every arrival
///
/// Equivalent to re-selecting every tick: between arrivals the running
/// process keeps the smallest key, so the loop only stops at the next
/// arrival or at completion.
pub(crate) fn run_preemptive(workload: &mut Workload, key: KeyFn) {
    let mut ready = BinaryHeap::new();

    loop {
        workload.admit(|entry| ready.push(Candidate::of(entry, key)));

        let Some(next) = ready.pop() else {
            if workload.idle_until_next_arrival() {
                continue;
            }
            break;
        };

        let remaining = workload.entry(next.index).remaining;
        let slice = match workload.next_arrival() {
            Some(at) => remaining.min(at - workload.clock()),
            None => remaining,
        };

        if !workload.run_for(next.index, slice) {
            ready.push(Candidate::of(workload.entry(next.index), key));
        }
    }
}
