//! Half-match heuristic.
//!
//! Locates one substring shared by both texts that is at least half as long
//! as the longer text. A hit splits the alignment problem into two much
//! smaller sub-problems around the shared middle, avoiding a full bisect on
//! large similar inputs. A miss is a normal outcome, not a failure.

use crate::affix::{common_prefix, common_suffix, find_sub_from};

/// Successful half-match split: prefix and suffix of each input around the
/// shared middle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfMatch {
    pub text1_prefix: String,
    pub text1_suffix: String,
    pub text2_prefix: String,
    pub text2_suffix: String,
    pub mid_common: String,
}

/// Borrowed view of a half-match split, used internally to avoid copies on
/// the recursion path.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HalfMatchSlices<'a> {
    pub text1_prefix: &'a [char],
    pub text1_suffix: &'a [char],
    pub text2_prefix: &'a [char],
    pub text2_suffix: &'a [char],
    pub mid_common: &'a [char],
}

/// Do the two texts share a substring at least half the length of the longer
/// text?
pub fn half_match(text1: &str, text2: &str) -> Option<HalfMatch> {
    let chars1: Vec<char> = text1.chars().collect();
    let chars2: Vec<char> = text2.chars().collect();
    half_match_slices(&chars1, &chars2).map(|hm| HalfMatch {
        text1_prefix: hm.text1_prefix.iter().collect(),
        text1_suffix: hm.text1_suffix.iter().collect(),
        text2_prefix: hm.text2_prefix.iter().collect(),
        text2_suffix: hm.text2_suffix.iter().collect(),
        mid_common: hm.mid_common.iter().collect(),
    })
}

pub(crate) fn half_match_slices<'a>(
    text1: &'a [char],
    text2: &'a [char],
) -> Option<HalfMatchSlices<'a>> {
    let first_longer = text1.len() > text2.len();
    let (long, short) = if first_longer {
        (text1, text2)
    } else {
        (text2, text1)
    };
    if long.len() < 4 || short.len() * 2 < long.len() {
        // No qualifying middle can exist.
        return None;
    }

    // Probe at the quarter and midpoint of the longer text.
    let quarter = probe(long, short, long.len().div_ceil(4));
    let midpoint = probe(long, short, long.len().div_ceil(2));
    let best = match (quarter, midpoint) {
        (None, None) => return None,
        (Some(hit), None) => hit,
        (None, Some(hit)) => hit,
        // The midpoint probe wins only with a strictly longer middle.
        (Some(q), Some(m)) => {
            if m.mid.len() > q.mid.len() {
                m
            } else {
                q
            }
        }
    };

    Some(if first_longer {
        HalfMatchSlices {
            text1_prefix: best.long_prefix,
            text1_suffix: best.long_suffix,
            text2_prefix: best.short_prefix,
            text2_suffix: best.short_suffix,
            mid_common: best.mid,
        }
    } else {
        HalfMatchSlices {
            text1_prefix: best.short_prefix,
            text1_suffix: best.short_suffix,
            text2_prefix: best.long_prefix,
            text2_suffix: best.long_suffix,
            mid_common: best.mid,
        }
    })
}

#[derive(Debug, Clone, Copy)]
struct ProbeHit<'a> {
    long_prefix: &'a [char],
    long_suffix: &'a [char],
    short_prefix: &'a [char],
    short_suffix: &'a [char],
    mid: &'a [char],
}

/// Seed a quarter-length substring of `long` at offset `i`, then greedily
/// extend around every occurrence of the seed in `short`, keeping the widest
/// shared middle. Qualifies only when that middle covers at least half of
/// `long`.
fn probe<'a>(long: &'a [char], short: &'a [char], i: usize) -> Option<ProbeHit<'a>> {
    let seed = &long[i..i + long.len() / 4];
    let mut best: Option<ProbeHit<'a>> = None;
    let mut best_len = 0;

    let mut j = find_sub_from(short, seed, 0);
    while let Some(at) = j {
        let prefix_len = common_prefix(&long[i..], &short[at..]);
        let suffix_len = common_suffix(&long[..i], &short[..at]);
        if best_len < suffix_len + prefix_len {
            best_len = suffix_len + prefix_len;
            best = Some(ProbeHit {
                mid: &short[at - suffix_len..at + prefix_len],
                long_prefix: &long[..i - suffix_len],
                long_suffix: &long[i + prefix_len..],
                short_prefix: &short[..at - suffix_len],
                short_suffix: &short[at + prefix_len..],
            });
        }
        j = find_sub_from(short, seed, at + 1);
    }

    best.filter(|hit| hit.mid.len() * 2 >= long.len())
}
