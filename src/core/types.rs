/*!
 * Core Types
 * Common types used across the simulator
 */

/// Simulated time, in abstract ticks
///
/// Signed so that negative arrivals in untrusted input can be reported as
/// validation errors instead of failing to parse.
pub type Ticks = i64;

/// Priority level (lower value = more important)
pub type Priority = i64;
