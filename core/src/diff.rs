//! Edit-script data model.
//!
//! A diff run produces an ordered sequence of [`Diff`] values. Concatenating
//! the Equal and Delete texts reproduces the first input; concatenating the
//! Equal and Insert texts reproduces the second. In canonical form no two
//! adjacent diffs share a kind, no diff carries empty text, and a Delete
//! precedes its paired Insert except where overlap elimination deliberately
//! reverses them.

use serde::{Deserialize, Serialize};

#[cfg(feature = "perf-metrics")]
use crate::perf::DiffMetrics;

/// A single edit operation over a span of text.
///
/// The three kinds form a closed set; every consumer matches exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diff {
    /// Span present in both texts.
    Equal(String),
    /// Span present only in the second text.
    Insert(String),
    /// Span present only in the first text.
    Delete(String),
}

impl Diff {
    /// The text carried by this edit, whatever its kind.
    pub fn text(&self) -> &str {
        match self {
            Diff::Equal(text) | Diff::Insert(text) | Diff::Delete(text) => text,
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, Diff::Equal(_))
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Diff::Insert(_))
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Diff::Delete(_))
    }

    pub(crate) fn text_mut(&mut self) -> &mut String {
        match self {
            Diff::Equal(text) | Diff::Insert(text) | Diff::Delete(text) => text,
        }
    }

    /// Same kind, different text.
    pub(crate) fn with_text(&self, text: String) -> Diff {
        match self {
            Diff::Equal(_) => Diff::Equal(text),
            Diff::Insert(_) => Diff::Insert(text),
            Diff::Delete(_) => Diff::Delete(text),
        }
    }

    pub(crate) fn equal_from(chars: &[char]) -> Diff {
        Diff::Equal(chars.iter().collect())
    }

    pub(crate) fn insert_from(chars: &[char]) -> Diff {
        Diff::Insert(chars.iter().collect())
    }

    pub(crate) fn delete_from(chars: &[char]) -> Diff {
        Diff::Delete(chars.iter().collect())
    }
}

/// Reconstruct the first input text from a script (Equal + Delete spans).
pub fn source_text(diffs: &[Diff]) -> String {
    diffs
        .iter()
        .filter(|diff| !diff.is_insert())
        .map(Diff::text)
        .collect()
}

/// Reconstruct the second input text from a script (Equal + Insert spans).
pub fn target_text(diffs: &[Diff]) -> String {
    diffs
        .iter()
        .filter(|diff| !diff.is_delete())
        .map(Diff::text)
        .collect()
}

/// Summary metadata about a diff run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Whether every sub-problem ran to a minimal result. `false` when at
    /// least one bisect region hit the deadline and degraded.
    pub complete: bool,
    /// Number of bisect regions that abandoned minimality at the deadline.
    pub degraded_regions: u32,
    /// Number of ops in the returned script.
    pub op_count: usize,
    #[cfg(feature = "perf-metrics")]
    /// Per-run counters and timings when the `perf-metrics` feature is enabled.
    pub metrics: Option<DiffMetrics>,
}
