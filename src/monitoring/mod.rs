/*!
 * Monitoring
 * Tracing setup and per-run spans
 */

mod tracer;

pub use tracer::{generate_trace_id, init_tracing, SimulationSpan, TRACE_JSON_ENV};
