//! Core diffing engine.
//!
//! Provides the public entry points [`diff`], [`diff_with_config`], and
//! [`diff_with_summary`], and orchestrates the pipeline: affix trimming,
//! trivial-case short-circuits, half-match splitting, the optional
//! line-granularity pre-pass, bisection, and merge normalization.
//!
//! Every call is a pure function over its inputs. No state is shared
//! between calls, so any number of diffs may run concurrently.

use crate::affix::{common_prefix, common_suffix, find_sub_from};
use crate::bisect::bisect;
use crate::cleanup_merge::cleanup_merge;
use crate::config::DiffConfig;
use crate::deadline::Deadline;
use crate::diff::{Diff, DiffSummary};
use crate::half_match::half_match_slices;
use crate::line_mode;
#[cfg(feature = "perf-metrics")]
use crate::perf::DiffMetrics;

/// Per-call bookkeeping threaded through the recursion: the deadline plus
/// run counters. Dropped when the call returns; nothing outlives it.
#[derive(Debug)]
pub(crate) struct DiffState {
    pub(crate) deadline: Deadline,
    pub(crate) line_mode_threshold: usize,
    pub(crate) degraded_regions: u32,
    pub(crate) bisect_calls: u64,
    pub(crate) half_match_splits: u32,
    pub(crate) line_mode_runs: u32,
}

impl DiffState {
    fn new(config: &DiffConfig) -> Self {
        Self {
            deadline: Deadline::from_timeout_secs(config.timeout_secs),
            line_mode_threshold: config.line_mode_threshold as usize,
            degraded_regions: 0,
            bisect_calls: 0,
            half_match_splits: 0,
            line_mode_runs: 0,
        }
    }
}

/// Diff two texts with the default configuration (line pre-pass on, one
/// second of budget).
pub fn diff(text1: &str, text2: &str) -> Vec<Diff> {
    diff_with_config(text1, text2, &DiffConfig::default())
}

/// Diff two texts under an explicit configuration.
pub fn diff_with_config(text1: &str, text2: &str, config: &DiffConfig) -> Vec<Diff> {
    diff_with_summary(text1, text2, config).0
}

/// Diff two texts and report whether every region ran to a minimal result.
pub fn diff_with_summary(
    text1: &str,
    text2: &str,
    config: &DiffConfig,
) -> (Vec<Diff>, DiffSummary) {
    #[cfg(feature = "perf-metrics")]
    let started = std::time::Instant::now();

    let chars1: Vec<char> = text1.chars().collect();
    let chars2: Vec<char> = text2.chars().collect();
    let mut state = DiffState::new(config);
    let script = diff_slices(&chars1, &chars2, config.check_lines, &mut state);

    let summary = DiffSummary {
        complete: state.degraded_regions == 0,
        degraded_regions: state.degraded_regions,
        op_count: script.len(),
        #[cfg(feature = "perf-metrics")]
        metrics: Some(DiffMetrics {
            total_time_ms: started.elapsed().as_millis() as u64,
            bisect_calls: state.bisect_calls,
            half_match_splits: state.half_match_splits,
            line_mode_runs: state.line_mode_runs,
            degraded_regions: state.degraded_regions,
        }),
    };
    (script, summary)
}

/// Full pipeline over scalar slices. Entered once from the public surface
/// and re-entered by every recursive split.
pub(crate) fn diff_slices(
    text1: &[char],
    text2: &[char],
    check_lines: bool,
    state: &mut DiffState,
) -> Vec<Diff> {
    if text1 == text2 {
        if text1.is_empty() {
            return Vec::new();
        }
        return vec![Diff::equal_from(text1)];
    }

    // Hold the common affixes aside as bookend equalities and diff the
    // remainders.
    let prefix_len = common_prefix(text1, text2);
    let prefix = &text1[..prefix_len];
    let trimmed1 = &text1[prefix_len..];
    let trimmed2 = &text2[prefix_len..];
    let suffix_len = common_suffix(trimmed1, trimmed2);
    let suffix = &trimmed1[trimmed1.len() - suffix_len..];
    let trimmed1 = &trimmed1[..trimmed1.len() - suffix_len];
    let trimmed2 = &trimmed2[..trimmed2.len() - suffix_len];

    let mut diffs = compute_middle(trimmed1, trimmed2, check_lines, state);

    if !prefix.is_empty() {
        diffs.insert(0, Diff::equal_from(prefix));
    }
    if !suffix.is_empty() {
        diffs.push(Diff::equal_from(suffix));
    }
    cleanup_merge(diffs)
}

/// Diff two texts known to share no common affix and to differ.
fn compute_middle(
    text1: &[char],
    text2: &[char],
    check_lines: bool,
    state: &mut DiffState,
) -> Vec<Diff> {
    if text1.is_empty() {
        return vec![Diff::insert_from(text2)];
    }
    if text2.is_empty() {
        return vec![Diff::delete_from(text1)];
    }

    let first_longer = text1.len() > text2.len();
    let (long, short) = if first_longer {
        (text1, text2)
    } else {
        (text2, text1)
    };

    // Shorter text inside the longer: two flanking edits around one
    // equality, already minimal. The affix trim guarantees the flanks are
    // non-empty.
    if let Some(at) = find_sub_from(long, short, 0) {
        let head = &long[..at];
        let tail = &long[at + short.len()..];
        return if first_longer {
            vec![
                Diff::delete_from(head),
                Diff::equal_from(short),
                Diff::delete_from(tail),
            ]
        } else {
            vec![
                Diff::insert_from(head),
                Diff::equal_from(short),
                Diff::insert_from(tail),
            ]
        };
    }

    // A lone scalar that survived the substring probe matches nothing.
    if short.len() == 1 {
        return vec![Diff::delete_from(text1), Diff::insert_from(text2)];
    }

    if let Some(hm) = half_match_slices(text1, text2) {
        state.half_match_splits += 1;
        let mut diffs = diff_slices(hm.text1_prefix, hm.text2_prefix, check_lines, state);
        diffs.push(Diff::equal_from(hm.mid_common));
        diffs.extend(diff_slices(hm.text1_suffix, hm.text2_suffix, check_lines, state));
        return diffs;
    }

    if check_lines
        && text1.len() > state.line_mode_threshold
        && text2.len() > state.line_mode_threshold
    {
        if let Some(diffs) = line_mode::diff_line_mode(text1, text2, state) {
            return diffs;
        }
    }

    bisect(text1, text2, state)
}
