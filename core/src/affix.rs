//! Common-affix scanning over Unicode scalar sequences.
//!
//! All comparisons are scalar-exact: no normalization, no grapheme
//! composition. A ligature never matches its expanded letters.

/// Length in scalars of the longest common prefix of `text1` and `text2`.
pub fn common_prefix_length(text1: &str, text2: &str) -> usize {
    text1
        .chars()
        .zip(text2.chars())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Length in scalars of the longest common suffix of `text1` and `text2`.
pub fn common_suffix_length(text1: &str, text2: &str) -> usize {
    text1
        .chars()
        .rev()
        .zip(text2.chars().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Length in scalars of the longest suffix of `text1` that is a prefix of
/// `text2`. Equal inputs overlap entirely.
pub fn common_overlap_length(text1: &str, text2: &str) -> usize {
    let chars1: Vec<char> = text1.chars().collect();
    let chars2: Vec<char> = text2.chars().collect();
    common_overlap(&chars1, &chars2)
}

// Chunked scans: compare four scalars at a time before falling back to a
// scalar-by-scalar tail. Keeps multi-megabyte prefix trims cheap.
const CHUNK: usize = 4;

pub(crate) fn common_prefix(a: &[char], b: &[char]) -> usize {
    let off = a
        .chunks_exact(CHUNK)
        .zip(b.chunks_exact(CHUNK))
        .take_while(|(ca, cb)| ca == cb)
        .count()
        * CHUNK;
    off + a[off..]
        .iter()
        .zip(&b[off..])
        .take_while(|(x, y)| x == y)
        .count()
}

pub(crate) fn common_suffix(a: &[char], b: &[char]) -> usize {
    let off = a
        .rchunks_exact(CHUNK)
        .zip(b.rchunks_exact(CHUNK))
        .take_while(|(ca, cb)| ca == cb)
        .count()
        * CHUNK;
    off + a[..a.len() - off]
        .iter()
        .rev()
        .zip(b[..b.len() - off].iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

pub(crate) fn common_overlap(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Truncate both sides to the shared window: only the tail of `a` can
    // overlap the head of `b`.
    let (a, b) = if a.len() > b.len() {
        (&a[a.len() - b.len()..], b)
    } else {
        (a, &b[..a.len()])
    };
    let window = a.len();
    if a == b {
        return window;
    }

    // Grow the candidate overlap by searching for progressively longer
    // suffixes of `a` at the start of `b`.
    let mut best = 0;
    let mut length = 1;
    loop {
        if length > window {
            return best;
        }
        let pattern = &a[window - length..];
        let Some(found) = find_sub_from(b, pattern, 0) else {
            return best;
        };
        length += found;
        if found == 0 || a[window - length..] == b[..length] {
            best = length;
            length += 1;
        }
    }
}

/// First occurrence of `needle` in `haystack` at or after `from`.
pub(crate) fn find_sub_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(from.min(haystack.len()));
    }
    if from >= haystack.len() || haystack.len() - from < needle.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}
