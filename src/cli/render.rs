/*!
 * Text Report
 * Plain-text metrics table and Gantt line for terminal output
 */

use cpu_sched_sim::core::limits::AVERAGE_PRECISION;
use cpu_sched_sim::SimulationResult;
use std::fmt::Write;

/// Render a result as a metrics table followed by a Gantt line
pub fn render_table(result: &SimulationResult) -> String {
    let mut out = String::new();

    let title = match result.quantum {
        Some(q) => format!("{} (quantum {})", result.policy.label(), q),
        None => result.policy.label().to_string(),
    };
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out);

    let id_width = result
        .rows
        .iter()
        .map(|r| r.process_id.as_str().len())
        .max()
        .unwrap_or(0)
        .max("Process".len());

    let _ = writeln!(
        out,
        "{:<w$}  {:>7}  {:>5}  {:>8}  {:>5}  {:>10}  {:>7}  {:>10}  {:>8}",
        "Process",
        "Arrival",
        "Burst",
        "Priority",
        "Start",
        "Completion",
        "Waiting",
        "Turnaround",
        "Response",
        w = id_width
    );
    for row in &result.rows {
        let _ = writeln!(
            out,
            "{:<w$}  {:>7}  {:>5}  {:>8}  {:>5}  {:>10}  {:>7}  {:>10}  {:>8}",
            row.process_id.as_str(),
            row.arrival,
            row.burst,
            row.priority,
            row.start_time,
            row.completion_time,
            row.waiting_time,
            row.turnaround_time,
            row.response_time,
            w = id_width
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Average Waiting Time: {:.p$}",
        result.average_waiting_time,
        p = AVERAGE_PRECISION
    );
    let _ = writeln!(
        out,
        "Average Turnaround Time: {:.p$}",
        result.average_turnaround_time,
        p = AVERAGE_PRECISION
    );
    let _ = writeln!(
        out,
        "Average Response Time: {:.p$}",
        result.average_response_time,
        p = AVERAGE_PRECISION
    );
    let _ = writeln!(
        out,
        "CPU Utilization: {:.1}% (idle {}, context switches {}, preemptions {})",
        result.stats.cpu_utilization * 100.0,
        result.stats.idle_time,
        result.stats.context_switches,
        result.stats.preemptions
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Gantt Chart");
    let _ = writeln!(out, "{}", render_gantt(result));
    out
}

/// One `| id start-end |` cell per segment, idle gaps shown explicitly
pub fn render_gantt(result: &SimulationResult) -> String {
    let mut line = String::new();
    let mut clock = 0;

    for segment in &result.timeline {
        if segment.start > clock {
            let _ = write!(line, "| idle {}-{} ", clock, segment.start);
        }
        let _ = write!(
            line,
            "| {} {}-{} ",
            segment.process_id, segment.start, segment.end
        );
        clock = segment.end;
    }
    line.push('|');
    line
}
