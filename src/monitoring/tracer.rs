/*!
 * Tracing
 * Structured logging for simulation runs using the tracing crate
 *
 * Features:
 * - Trace ID per simulation run for correlating dispatch events
 * - JSON-formatted logs for structured parsing
 * - Run duration recorded when the span closes
 */

use crate::scheduler::Policy;
use std::time::Instant;
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Environment variable enabling JSON log output
pub const TRACE_JSON_ENV: &str = "SCHED_TRACE_JSON";

/// Runs slower than this are reported at warn level
const SLOW_RUN_MILLIS: u128 = 100;

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHED_TRACE_JSON: Enable JSON output (default: false)
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        debug!(json = use_json, "Structured tracing initialized");
    }
}

/// Generate a unique trace ID for run correlation
pub fn generate_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one `simulate` call
///
/// Only observability data lives here; nothing in the span feeds back into
/// the simulation result.
pub struct SimulationSpan {
    span: tracing::Span,
    start: Instant,
    policy: Policy,
    trace_id: String,
}

impl SimulationSpan {
    pub fn new(policy: Policy, processes: usize) -> Self {
        let trace_id = generate_trace_id();

        let span = span!(
            Level::DEBUG,
            "simulate",
            trace_id = %trace_id,
            policy = policy.as_str(),
            processes = processes,
            duration_us = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            policy,
            trace_id,
        }
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    pub fn record_success(&self) {
        self.span.record("result", "success");
    }

    pub fn record_error(&self, error: &str) {
        self.span.record("error", error);
        self.span.record("result", "error");
    }
}

impl Drop for SimulationSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_us", duration.as_micros() as u64);

        if duration.as_millis() > SLOW_RUN_MILLIS {
            warn!(
                trace_id = %self.trace_id,
                policy = %self.policy,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow simulation detected"
            );
        } else {
            info!(
                trace_id = %self.trace_id,
                policy = %self.policy,
                duration_us = duration.as_micros() as u64,
                "simulation finished"
            );
        }
    }
}
