//! Line-granularity pre-pass for large inputs.
//!
//! Interns every distinct line to a synthetic scalar, diffs the (much
//! shorter) synthetic sequences first, then re-diffs only the changed
//! regions at scalar granularity. Interning is exact, never hashed, so the
//! pre-pass can only change execution cost, not the semantic content of the
//! result.

use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};

use crate::cleanup_semantic::cleanup_semantic;
use crate::diff::Diff;
use crate::engine::{diff_slices, DiffState};

/// Surrogate gap in the scalar space; synthetic ids skip over it.
const SURROGATE_START: u32 = 0xD800;
const SURROGATE_SPAN: u32 = 0x800;

fn synthetic_char(id: u32) -> Option<char> {
    let code = if id < SURROGATE_START {
        id
    } else {
        id.checked_add(SURROGATE_SPAN)?
    };
    char::from_u32(code)
}

fn synthetic_id(c: char) -> u32 {
    let code = c as u32;
    if code < SURROGATE_START {
        code
    } else {
        code - SURROGATE_SPAN
    }
}

#[derive(Debug)]
enum Bucket {
    One(u32),
    Many(Vec<u32>),
}

/// Exact interner from line content to dense ids, shared by both inputs so
/// identical lines map to identical synthetic scalars.
#[derive(Debug, Default)]
struct LinePool {
    lines: Vec<String>,
    index: FxHashMap<u64, Bucket>,
}

impl LinePool {
    fn new() -> Self {
        Self::default()
    }

    fn intern(&mut self, line: &[char]) -> u32 {
        let h = hash_line(line);
        let lines = &mut self.lines;

        if let Some(bucket) = self.index.get_mut(&h) {
            match bucket {
                Bucket::One(existing) => {
                    let id = *existing;
                    if line_eq(&lines[id as usize], line) {
                        return id;
                    }
                    let new_id = lines.len() as u32;
                    lines.push(line.iter().collect());
                    *bucket = Bucket::Many(vec![id, new_id]);
                    new_id
                }
                Bucket::Many(ids) => {
                    for &id in ids.iter() {
                        if line_eq(&lines[id as usize], line) {
                            return id;
                        }
                    }
                    let new_id = lines.len() as u32;
                    lines.push(line.iter().collect());
                    ids.push(new_id);
                    new_id
                }
            }
        } else {
            let id = lines.len() as u32;
            lines.push(line.iter().collect());
            self.index.insert(h, Bucket::One(id));
            id
        }
    }

    fn resolve(&self, id: u32) -> &str {
        &self.lines[id as usize]
    }

    /// Map a text to one synthetic scalar per line (newline-inclusive).
    /// Returns None if the distinct-line count outgrows the scalar space.
    fn encode(&mut self, text: &[char]) -> Option<Vec<char>> {
        let mut encoded = Vec::new();
        let mut start = 0;
        for (i, &c) in text.iter().enumerate() {
            if c == '\n' {
                let id = self.intern(&text[start..=i]);
                encoded.push(synthetic_char(id)?);
                start = i + 1;
            }
        }
        if start < text.len() {
            let id = self.intern(&text[start..]);
            encoded.push(synthetic_char(id)?);
        }
        Some(encoded)
    }

    /// Swap synthetic scalars back for the line text they stand for.
    fn rehydrate(&self, diffs: Vec<Diff>) -> Vec<Diff> {
        diffs
            .into_iter()
            .map(|diff| {
                let mut text = String::new();
                for c in diff.text().chars() {
                    text.push_str(self.resolve(synthetic_id(c)));
                }
                diff.with_text(text)
            })
            .collect()
    }
}

fn hash_line(line: &[char]) -> u64 {
    let mut hasher = FxHasher::default();
    line.hash(&mut hasher);
    hasher.finish()
}

fn line_eq(stored: &str, line: &[char]) -> bool {
    stored.chars().eq(line.iter().copied())
}

/// Diff at line granularity first, then refine every changed region at
/// scalar granularity with the same deadline. Returns None when the inputs
/// have too many distinct lines to encode, in which case the caller falls
/// back to a plain bisect.
pub(crate) fn diff_line_mode(
    text1: &[char],
    text2: &[char],
    state: &mut DiffState,
) -> Option<Vec<Diff>> {
    let mut pool = LinePool::new();
    let encoded1 = pool.encode(text1)?;
    let encoded2 = pool.encode(text2)?;
    state.line_mode_runs += 1;

    let line_diffs = diff_slices(&encoded1, &encoded2, false, state);
    let mut diffs = cleanup_semantic(pool.rehydrate(line_diffs));

    // Rediff each delete/insert run pair, now scalar by scalar.
    diffs.push(Diff::Equal(String::new()));
    let mut pointer = 0;
    let mut count_delete = 0;
    let mut count_insert = 0;
    let mut text_delete = String::new();
    let mut text_insert = String::new();
    while pointer < diffs.len() {
        match diffs[pointer].clone() {
            Diff::Insert(text) => {
                count_insert += 1;
                text_insert.push_str(&text);
            }
            Diff::Delete(text) => {
                count_delete += 1;
                text_delete.push_str(&text);
            }
            Diff::Equal(_) => {
                if count_delete >= 1 && count_insert >= 1 {
                    let start = pointer - count_delete - count_insert;
                    let sub1: Vec<char> = text_delete.chars().collect();
                    let sub2: Vec<char> = text_insert.chars().collect();
                    let sub_diffs = diff_slices(&sub1, &sub2, false, state);
                    let sub_len = sub_diffs.len();
                    diffs.splice(start..pointer, sub_diffs);
                    pointer = start + sub_len;
                }
                count_delete = 0;
                count_insert = 0;
                text_delete.clear();
                text_insert.clear();
            }
        }
        pointer += 1;
    }
    diffs.pop();

    Some(diffs)
}
