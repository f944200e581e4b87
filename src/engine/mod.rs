/*!
 * Scheduling Engine
 * Single entry point: validate, dispatch to a policy simulator, assemble the result
 */

mod request;
mod validation;

pub use request::SimulationRequest;

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Ticks;
use crate::monitoring::SimulationSpan;
use crate::process::ProcessRecord;
use crate::report::SimulationResult;
use crate::scheduler::{
    FirstComeFirstServed, Policy, PolicySimulator, PreemptivePriority, PriorityFirst,
    RoundRobin, ShortestJobFirst, ShortestRemainingTime, TimeQuantum, Workload,
};
use tracing::{debug, warn};

/// Simulate `processes` under `policy`
///
/// `quantum` is required for [`Policy::RoundRobin`] and ignored otherwise.
/// The call is pure: the records are only read, every run works on its own
/// copy, and identical inputs produce identical results.
///
/// # Errors
/// Returns a [`SchedulerError`](crate::SchedulerError) before any simulation
/// work when the input is empty, too large, has duplicate ids or out-of-range
/// fields, or when round robin has no positive quantum.
pub fn simulate(
    processes: &[ProcessRecord],
    policy: Policy,
    quantum: Option<Ticks>,
) -> SchedulerResult<SimulationResult> {
    let span = SimulationSpan::new(policy, processes.len());
    let _entered = span.enter();

    let quantum = match validation::validate(processes, policy, quantum) {
        Ok(quantum) => quantum,
        Err(err) => {
            warn!(error = %err, kind = err.kind(), "simulation request rejected");
            span.record_error(err.kind());
            return Err(err);
        }
    };

    let mut workload = Workload::new(processes);
    simulator_for(policy, quantum)?.run(&mut workload);
    let outcome = workload.finish().map_err(|err| {
        warn!(error = %err, "simulation ended early");
        span.record_error(err.kind());
        err
    })?;
    let result = SimulationResult::assemble(policy, quantum, outcome);

    debug!(
        segments = result.timeline.len(),
        makespan = result.stats.makespan,
        avg_waiting = result.average_waiting_time,
        avg_turnaround = result.average_turnaround_time,
        "simulation complete"
    );
    span.record_success();

    Ok(result)
}

/// Simulate a decoded request
pub fn simulate_request(request: &SimulationRequest) -> SchedulerResult<SimulationResult> {
    simulate(&request.processes, request.policy, request.quantum)
}

/// Map each policy onto its simulator
fn simulator_for(
    policy: Policy,
    quantum: Option<TimeQuantum>,
) -> SchedulerResult<Box<dyn PolicySimulator>> {
    let simulator: Box<dyn PolicySimulator> = match policy {
        Policy::Fcfs => Box::new(FirstComeFirstServed),
        Policy::SjfNonPreemptive => Box::new(ShortestJobFirst),
        Policy::SjfPreemptive => Box::new(ShortestRemainingTime),
        Policy::RoundRobin => {
            let quantum = quantum.ok_or(SchedulerError::MissingQuantum { value: None })?;
            Box::new(RoundRobin::new(quantum))
        }
        Policy::PriorityNonPreemptive => Box::new(PriorityFirst),
        Policy::PriorityPreemptive => Box::new(PreemptivePriority),
    };
    Ok(simulator)
}
