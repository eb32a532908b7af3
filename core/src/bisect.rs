//! Myers shortest-edit-script search with divide-and-conquer bisection.
//!
//! Walks the edit graph from both ends at once, keeping one frontier array
//! per direction indexed by diagonal. When the frontiers meet, the problem
//! splits at the meeting point and both halves recurse through the engine.
//! The deadline is checked once per outer distance iteration; on expiry the
//! current sub-problem gives up minimality and degrades to a single
//! Delete+Insert pair, which bounds worst-case latency on pathological
//! inputs at the cost of optimality.

use crate::diff::Diff;
use crate::engine::{diff_slices, DiffState};

/// Find a minimal edit script for two texts with no common affix.
///
/// Both inputs must be non-empty; the engine handles the trivial cases
/// before calling in.
pub(crate) fn bisect(text1: &[char], text2: &[char], state: &mut DiffState) -> Vec<Diff> {
    state.bisect_calls += 1;

    let len1 = text1.len() as isize;
    let len2 = text2.len() as isize;
    let max_d = (text1.len() + text2.len()).div_ceil(2);
    let v_offset = max_d as isize;
    let v_length = 2 * max_d;
    let mut v1 = vec![-1isize; v_length];
    let mut v2 = vec![-1isize; v_length];
    v1[max_d + 1] = 0;
    v2[max_d + 1] = 0;
    let delta = len1 - len2;
    // When the delta is odd the paths can only meet on the forward sweep;
    // when even, only on the reverse sweep.
    let front = delta % 2 != 0;
    // Trim diagonals that have walked off an edge of the graph.
    let mut k1start = 0isize;
    let mut k1end = 0isize;
    let mut k2start = 0isize;
    let mut k2end = 0isize;

    for d in 0..max_d as isize {
        if state.deadline.expired() {
            state.degraded_regions += 1;
            break;
        }

        // Forward sweep.
        let mut k1 = -d + k1start;
        while k1 <= d - k1end {
            let k1_offset = (v_offset + k1) as usize;
            let mut x1 = if k1 == -d || (k1 != d && v1[k1_offset - 1] < v1[k1_offset + 1]) {
                v1[k1_offset + 1]
            } else {
                v1[k1_offset - 1] + 1
            };
            let mut y1 = x1 - k1;
            while x1 < len1 && y1 < len2 && text1[x1 as usize] == text2[y1 as usize] {
                x1 += 1;
                y1 += 1;
            }
            v1[k1_offset] = x1;
            if x1 > len1 {
                k1end += 2;
            } else if y1 > len2 {
                k1start += 2;
            } else if front {
                let k2_offset = v_offset + delta - k1;
                if k2_offset >= 0 && (k2_offset as usize) < v_length && v2[k2_offset as usize] != -1
                {
                    // Mirror the reverse frontier onto forward coordinates.
                    let x2 = len1 - v2[k2_offset as usize];
                    if x1 >= x2 {
                        return split(text1, text2, x1 as usize, y1 as usize, state);
                    }
                }
            }
            k1 += 2;
        }

        // Reverse sweep.
        let mut k2 = -d + k2start;
        while k2 <= d - k2end {
            let k2_offset = (v_offset + k2) as usize;
            let mut x2 = if k2 == -d || (k2 != d && v2[k2_offset - 1] < v2[k2_offset + 1]) {
                v2[k2_offset + 1]
            } else {
                v2[k2_offset - 1] + 1
            };
            let mut y2 = x2 - k2;
            while x2 < len1
                && y2 < len2
                && text1[(len1 - x2 - 1) as usize] == text2[(len2 - y2 - 1) as usize]
            {
                x2 += 1;
                y2 += 1;
            }
            v2[k2_offset] = x2;
            if x2 > len1 {
                k2end += 2;
            } else if y2 > len2 {
                k2start += 2;
            } else if !front {
                let k1_offset = v_offset + delta - k2;
                if k1_offset >= 0 && (k1_offset as usize) < v_length && v1[k1_offset as usize] != -1
                {
                    let x1 = v1[k1_offset as usize];
                    let y1 = v_offset + x1 - k1_offset;
                    let x2 = len1 - x2;
                    if x1 >= x2 {
                        return split(text1, text2, x1 as usize, y1 as usize, state);
                    }
                }
            }
            k2 += 2;
        }
    }

    // Deadline hit, or no commonality at all: the whole region is one
    // deletion paired with one insertion.
    vec![Diff::delete_from(text1), Diff::insert_from(text2)]
}

/// Recurse on both halves of the meeting point and concatenate.
fn split(
    text1: &[char],
    text2: &[char],
    x: usize,
    y: usize,
    state: &mut DiffState,
) -> Vec<Diff> {
    let mut diffs = diff_slices(&text1[..x], &text2[..y], false, state);
    diffs.extend(diff_slices(&text1[x..], &text2[y..], false, state));
    diffs
}
