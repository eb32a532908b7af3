//! Merge normalization.
//!
//! Canonicalizes an edit script: coalesces same-kind runs, factors common
//! affixes out of delete/insert pairs into the neighboring equalities, fixes
//! the delete-before-insert ordering, drops empty ops, and slides lone edits
//! across an adjacent equality when their texts line up. The full two-phase
//! process re-runs at most once more after a slide; the bound is fixed at
//! two passes, not iterated to a fixpoint.

use crate::diff::Diff;
use crate::scalars::{common_prefix_bytes, common_suffix_bytes};

/// Canonicalize a diff sequence.
pub fn cleanup_merge(diffs: Vec<Diff>) -> Vec<Diff> {
    let mut diffs = diffs;
    for _ in 0..2 {
        let slid = merge_pass(&mut diffs);
        if !slid {
            break;
        }
    }
    diffs
}

/// One coalesce pass followed by one slide pass. Returns whether the slide
/// pass changed anything.
fn merge_pass(diffs: &mut Vec<Diff>) -> bool {
    coalesce(diffs);
    slide_single_edits(diffs)
}

/// Phase 1: gather consecutive deletes and inserts, factor their shared
/// affixes into the surrounding equalities, and emit the remainder as one
/// delete followed by one insert. Adjacent equalities merge; empty ops drop.
fn coalesce(diffs: &mut Vec<Diff>) {
    diffs.push(Diff::Equal(String::new())); // sentinel flushes the last run
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
                pointer += 1;
            }
            Diff::Delete(text) => {
                count_delete += 1;
                text_delete.push_str(&text);
                pointer += 1;
            }
            Diff::Equal(_) => {
                if count_delete + count_insert > 1 {
                    if count_delete != 0 && count_insert != 0 {
                        // Factor a shared prefix into the preceding equality
                        // (creating one if the run opened the script).
                        let prefix_bytes = common_prefix_bytes(&text_insert, &text_delete);
                        if prefix_bytes != 0 {
                            let run_start = pointer - count_delete - count_insert;
                            let prefix = text_insert[..prefix_bytes].to_string();
                            if run_start > 0 && diffs[run_start - 1].is_equal() {
                                diffs[run_start - 1].text_mut().push_str(&prefix);
                            } else {
                                diffs.insert(0, Diff::Equal(prefix));
                                pointer += 1;
                            }
                            text_insert.drain(..prefix_bytes);
                            text_delete.drain(..prefix_bytes);
                        }
                        // Factor a shared suffix into the following equality.
                        let suffix_bytes = common_suffix_bytes(&text_insert, &text_delete);
                        if suffix_bytes != 0 {
                            let suffix = text_insert[text_insert.len() - suffix_bytes..].to_string();
                            diffs[pointer]
                                .text_mut()
                                .insert_str(0, &suffix);
                            text_insert.truncate(text_insert.len() - suffix_bytes);
                            text_delete.truncate(text_delete.len() - suffix_bytes);
                        }
                    }
                    // Replace the run with the merged delete then insert.
                    let run_start = pointer - count_delete - count_insert;
                    let mut merged = Vec::with_capacity(2);
                    if !text_delete.is_empty() {
                        merged.push(Diff::Delete(text_delete.clone()));
                    }
                    if !text_insert.is_empty() {
                        merged.push(Diff::Insert(text_insert.clone()));
                    }
                    let merged_len = merged.len();
                    diffs.splice(run_start..pointer, merged);
                    pointer = run_start + merged_len + 1;
                } else if pointer != 0 && diffs[pointer - 1].is_equal() {
                    // Merge this equality into the previous one.
                    let text = diffs.remove(pointer);
                    if let Diff::Equal(prev) = &mut diffs[pointer - 1] {
                        prev.push_str(text.text());
                    }
                } else {
                    pointer += 1;
                }
                count_delete = 0;
                count_insert = 0;
                text_delete.clear();
                text_insert.clear();
            }
        }
    }

    if diffs.last().is_some_and(|diff| diff.text().is_empty()) {
        diffs.pop();
    }
}

/// Phase 2: an edit sandwiched between two equalities can sometimes slide
/// fully over one of them, eliminating that equality and opening further
/// merges for the next pass.
fn slide_single_edits(diffs: &mut Vec<Diff>) -> bool {
    let mut changes = false;
    let mut pointer = 1;
    while pointer + 1 < diffs.len() {
        if diffs[pointer - 1].is_equal() && diffs[pointer + 1].is_equal() {
            let previous = diffs[pointer - 1].text().to_string();
            let next = diffs[pointer + 1].text().to_string();
            if diffs[pointer].text().ends_with(&previous) {
                // Slide the edit left over the previous equality.
                let edit = diffs[pointer].text();
                let shifted = format!("{previous}{}", &edit[..edit.len() - previous.len()]);
                *diffs[pointer].text_mut() = shifted;
                *diffs[pointer + 1].text_mut() = format!("{previous}{next}");
                diffs.remove(pointer - 1);
                changes = true;
            } else if diffs[pointer].text().starts_with(&next) {
                // Slide the edit right over the following equality.
                diffs[pointer - 1].text_mut().push_str(&next);
                let edit = diffs[pointer].text();
                let shifted = format!("{}{next}", &edit[next.len()..]);
                *diffs[pointer].text_mut() = shifted;
                diffs.remove(pointer + 1);
                changes = true;
            }
        }
        pointer += 1;
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_script_is_untouched() {
        let diffs = vec![
            Diff::Equal("a".to_string()),
            Diff::Delete("b".to_string()),
            Diff::Insert("c".to_string()),
        ];
        assert_eq!(diffs.clone(), cleanup_merge(diffs));
    }
}
