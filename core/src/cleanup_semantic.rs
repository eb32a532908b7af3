//! Semantic cleanup passes.
//!
//! Two reshaping stages turn a minimal but noisy script into one a human
//! would write: a lossless realigner that slides edit boundaries to natural
//! break points, and a lossy cleaner that removes short equalities engulfed
//! by edits and factors overlapping delete/insert pairs.

use crate::affix::common_overlap_length;
use crate::cleanup_merge::cleanup_merge;
use crate::diff::Diff;
use crate::scalars::{common_suffix_bytes, scalar_len, split_at_scalar};

/// Rank a candidate split point by how natural it reads, from the scalar
/// ending `text1` and the scalar starting `text2`.
///
/// 6: edge of a text. 5: blank-line boundary. 4: line break. 3: sentence
/// terminal (punctuation then whitespace). 2: whitespace. 1: other
/// non-alphanumeric. 0: interior of a word.
pub fn cleanup_semantic_score(text1: &str, text2: &str) -> u32 {
    let (Some(char1), Some(char2)) = (text1.chars().next_back(), text2.chars().next()) else {
        // Edges are the best place to be.
        return 6;
    };

    let non_alnum1 = !char1.is_alphanumeric();
    let non_alnum2 = !char2.is_alphanumeric();
    let whitespace1 = non_alnum1 && char1.is_whitespace();
    let whitespace2 = non_alnum2 && char2.is_whitespace();
    let line_break1 = whitespace1 && matches!(char1, '\n' | '\r');
    let line_break2 = whitespace2 && matches!(char2, '\n' | '\r');
    let blank_line1 = line_break1 && (text1.ends_with("\n\n") || text1.ends_with("\n\r\n"));
    let blank_line2 = line_break2
        && (text2.starts_with("\n\n")
            || text2.starts_with("\n\r\n")
            || text2.starts_with("\r\n\n")
            || text2.starts_with("\r\n\r\n"));

    if blank_line1 || blank_line2 {
        5
    } else if line_break1 || line_break2 {
        4
    } else if non_alnum1 && !whitespace1 && whitespace2 {
        3
    } else if whitespace1 || whitespace2 {
        2
    } else if non_alnum1 || non_alnum2 {
        1
    } else {
        0
    }
}

/// Slide edit boundaries to the best-scoring split point reachable within
/// the overlap shared with the flanking equalities. Net content never
/// changes, only where the boundaries sit.
pub fn cleanup_semantic_lossless(diffs: Vec<Diff>) -> Vec<Diff> {
    let mut diffs = diffs;
    let mut pointer: isize = 1;
    while pointer + 1 < diffs.len() as isize {
        let at = pointer as usize;
        if pointer >= 1 && diffs[at - 1].is_equal() && diffs[at + 1].is_equal() {
            let mut equality1 = diffs[at - 1].text().to_string();
            let mut edit = diffs[at].text().to_string();
            let mut equality2 = diffs[at + 1].text().to_string();

            // Slide the whole window as far left as it goes.
            let offset = common_suffix_bytes(&equality1, &edit);
            if offset != 0 {
                let common = edit[edit.len() - offset..].to_string();
                equality1.truncate(equality1.len() - offset);
                edit = format!("{common}{}", &edit[..edit.len() - offset]);
                equality2 = format!("{common}{equality2}");
            }

            // Then step right one scalar at a time, keeping the best split.
            let mut best_equality1 = equality1.clone();
            let mut best_edit = edit.clone();
            let mut best_equality2 = equality2.clone();
            let mut best_score = cleanup_semantic_score(&equality1, &edit)
                + cleanup_semantic_score(&edit, &equality2);
            loop {
                let (Some(edit_first), Some(equality2_first)) =
                    (edit.chars().next(), equality2.chars().next())
                else {
                    break;
                };
                if edit_first != equality2_first {
                    break;
                }
                equality1.push(edit_first);
                edit = format!("{}{equality2_first}", &edit[edit_first.len_utf8()..]);
                equality2.drain(..equality2_first.len_utf8());
                let score = cleanup_semantic_score(&equality1, &edit)
                    + cleanup_semantic_score(&edit, &equality2);
                // On ties the later split wins, favoring trailing
                // whitespace on edits over leading whitespace.
                if score >= best_score {
                    best_score = score;
                    best_equality1 = equality1.clone();
                    best_edit = edit.clone();
                    best_equality2 = equality2.clone();
                }
            }

            if diffs[at - 1].text() != best_equality1 {
                if !best_equality1.is_empty() {
                    *diffs[at - 1].text_mut() = best_equality1;
                } else {
                    diffs.remove(at - 1);
                    pointer -= 1;
                }
                *diffs[pointer as usize].text_mut() = best_edit;
                if !best_equality2.is_empty() {
                    *diffs[(pointer + 1) as usize].text_mut() = best_equality2;
                } else {
                    diffs.remove((pointer + 1) as usize);
                    pointer -= 1;
                }
            }
        }
        pointer += 1;
    }
    diffs
}

/// Remove edits that read as churn: short equalities engulfed by larger
/// edits on both sides, and overlapping delete/insert pairs.
pub fn cleanup_semantic(diffs: Vec<Diff>) -> Vec<Diff> {
    let mut diffs = diffs;
    let mut changes = false;
    // Indices of equalities seen since the last elimination.
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<String> = None;
    // Edit sizes on each side of the tracked equality.
    let mut length_insertions1 = 0;
    let mut length_deletions1 = 0;
    let mut length_insertions2 = 0;
    let mut length_deletions2 = 0;

    let mut pointer = 0;
    while pointer < diffs.len() {
        if diffs[pointer].is_equal() {
            equalities.push(pointer);
            length_insertions1 = length_insertions2;
            length_deletions1 = length_deletions2;
            length_insertions2 = 0;
            length_deletions2 = 0;
            last_equality = Some(diffs[pointer].text().to_string());
            pointer += 1;
            continue;
        }

        let edit_len = scalar_len(diffs[pointer].text());
        if diffs[pointer].is_insert() {
            length_insertions2 += edit_len;
        } else {
            length_deletions2 += edit_len;
        }

        // An equality no longer than the edits on either side of it is
        // churn, not a real boundary.
        let engulfed = last_equality.as_ref().is_some_and(|equality| {
            let equality_len = scalar_len(equality);
            equality_len <= length_insertions1.max(length_deletions1)
                && equality_len <= length_insertions2.max(length_deletions2)
        });
        if engulfed {
            if let (Some(equality), Some(&at)) = (last_equality.clone(), equalities.last()) {
                // Duplicate the equality as a delete/insert pair.
                diffs[at] = Diff::Insert(equality.clone());
                diffs.insert(at, Diff::Delete(equality));
                // The equality before the replaced one needs re-evaluation;
                // resume the walk from there.
                equalities.pop();
                equalities.pop();
                pointer = match equalities.last() {
                    Some(&previous) => previous + 1,
                    None => 0,
                };
                length_insertions1 = 0;
                length_deletions1 = 0;
                length_insertions2 = 0;
                length_deletions2 = 0;
                last_equality = None;
                changes = true;
                continue;
            }
        }
        pointer += 1;
    }

    if changes {
        diffs = cleanup_merge(diffs);
    }
    diffs = cleanup_semantic_lossless(diffs);

    // Factor overlaps between adjacent delete/insert pairs:
    //   <del>abcxxx</del><ins>xxxdef</ins> -> <del>abc</del>xxx<ins>def</ins>
    //   <del>xxxabc</del><ins>defxxx</ins> -> <ins>def</ins>xxx<del>abc</del>
    // Only extract when the overlap covers at least half the shorter edit.
    let mut pointer = 1;
    while pointer < diffs.len() {
        if diffs[pointer - 1].is_delete() && diffs[pointer].is_insert() {
            let deletion = diffs[pointer - 1].text().to_string();
            let insertion = diffs[pointer].text().to_string();
            let overlap1 = common_overlap_length(&deletion, &insertion);
            let overlap2 = common_overlap_length(&insertion, &deletion);
            let deletion_len = scalar_len(&deletion);
            let insertion_len = scalar_len(&insertion);
            if overlap1 >= overlap2 {
                if overlap1 * 2 >= deletion_len || overlap1 * 2 >= insertion_len {
                    let (overlap, insertion_tail) = split_at_scalar(&insertion, overlap1);
                    let (deletion_head, _) = split_at_scalar(&deletion, deletion_len - overlap1);
                    let overlap = overlap.to_string();
                    *diffs[pointer - 1].text_mut() = deletion_head.to_string();
                    *diffs[pointer].text_mut() = insertion_tail.to_string();
                    diffs.insert(pointer, Diff::Equal(overlap));
                    pointer += 1;
                }
            } else if overlap2 * 2 >= deletion_len || overlap2 * 2 >= insertion_len {
                // Reverse overlap: the tail of the insertion matches the
                // head of the deletion, so the operations swap order.
                let (overlap, deletion_tail) = split_at_scalar(&deletion, overlap2);
                let (insertion_head, _) = split_at_scalar(&insertion, insertion_len - overlap2);
                let overlap = overlap.to_string();
                diffs[pointer - 1] = Diff::Insert(insertion_head.to_string());
                diffs[pointer] = Diff::Delete(deletion_tail.to_string());
                diffs.insert(pointer, Diff::Equal(overlap));
                pointer += 1;
            }
            pointer += 1;
        }
        pointer += 1;
    }

    cleanup_merge(diffs)
}
