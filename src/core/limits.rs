/*!
 * System Limits and Constants
 *
 * Centralized location for simulator-wide limits.
 * Organized by domain for maintainability and discoverability.
 */

use super::types::Ticks;

// =============================================================================
// REQUEST LIMITS
// =============================================================================

/// Maximum processes accepted in one request
/// Keeps the per-run working set and the rendered Gantt chart bounded
pub const MAX_PROCESSES: usize = 10_000;

/// Maximum burst for a single process
/// [SECURITY] Bounds total simulated time so the clock cannot overflow
pub const MAX_BURST: Ticks = 1_000_000_000;

/// Maximum arrival time for a single process
pub const MAX_ARRIVAL: Ticks = 1_000_000_000_000;

// =============================================================================
// PRESENTATION
// =============================================================================

/// Decimal places used when averages are rendered as text
pub const AVERAGE_PRECISION: usize = 2;
