//! Optional per-run performance counters, compiled in with the
//! `perf-metrics` feature and surfaced on `DiffSummary`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffMetrics {
    /// Wall-clock time for the whole call, in milliseconds.
    pub total_time_ms: u64,
    /// Number of bisect invocations across all recursion levels.
    pub bisect_calls: u64,
    /// Number of successful half-match splits.
    pub half_match_splits: u32,
    /// Number of times the line-granularity pre-pass ran.
    pub line_mode_runs: u32,
    /// Bisect regions that hit the deadline and degraded.
    pub degraded_regions: u32,
}
