//! Row diffing between consecutive snapshots.
//!
//! Rows are matched by identity with Myers' algorithm from the `similar`
//! crate. Identity matches whose content differs become [`RowEdit::Change`];
//! unmatched runs become removals and insertions. Edits are emitted in list
//! order so a surface can walk them once from the top.

use crate::ui::viewmodel::{RowIdentity, VerticalsListItem};
use similar::{capture_diff_slices, Algorithm, DiffOp};
use std::hash::Hash;

/// Identity and content contract for diffable rows.
///
/// Two rows with the same identity are the same logical row; `PartialEq`
/// decides whether its content changed.
pub trait Diffable: PartialEq {
    type Identity: Hash + Eq + Ord + Clone;

    fn identity(&self) -> Self::Identity;
}

impl Diffable for VerticalsListItem {
    type Identity = RowIdentity;

    fn identity(&self) -> RowIdentity {
        Self::identity(self)
    }
}

/// One step of an edit script turning an old row list into a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowEdit {
    /// `count` rows starting at `old_index` disappear.
    Remove { old_index: usize, count: usize },
    /// `count` rows from the new list, starting at `new_index`, appear.
    Insert { new_index: usize, count: usize },
    /// Same row, different content.
    Change { old_index: usize, new_index: usize },
}

/// Computes the edit script from `old` to `new`.
///
/// # Example
///
/// ```rust
/// use siteflow::ui::diff::{diff_rows, RowEdit};
/// use siteflow::ui::viewmodel::VerticalsListItem;
///
/// let row = |id: &str, divider: bool| VerticalsListItem::Suggestion {
///     id: id.to_string(),
///     title: id.to_uppercase(),
///     show_divider: divider,
/// };
/// let old = vec![row("a", false)];
/// let new = vec![row("a", true), row("b", false)];
///
/// assert_eq!(
///     diff_rows(&old, &new),
///     vec![
///         RowEdit::Change { old_index: 0, new_index: 0 },
///         RowEdit::Insert { new_index: 1, count: 1 },
///     ]
/// );
/// ```
#[must_use]
pub fn diff_rows<T: Diffable>(old: &[T], new: &[T]) -> Vec<RowEdit> {
    let old_ids: Vec<T::Identity> = old.iter().map(Diffable::identity).collect();
    let new_ids: Vec<T::Identity> = new.iter().map(Diffable::identity).collect();

    let mut edits = Vec::new();
    for op in capture_diff_slices(Algorithm::Myers, &old_ids, &new_ids) {
        match op {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => {
                edits.extend(
                    (0..len)
                        .filter(|offset| old[old_index + offset] != new[new_index + offset])
                        .map(|offset| RowEdit::Change {
                            old_index: old_index + offset,
                            new_index: new_index + offset,
                        }),
                );
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => edits.push(RowEdit::Remove {
                old_index,
                count: old_len,
            }),
            DiffOp::Insert {
                new_index, new_len, ..
            } => edits.push(RowEdit::Insert {
                new_index,
                count: new_len,
            }),
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                edits.push(RowEdit::Remove {
                    old_index,
                    count: old_len,
                });
                edits.push(RowEdit::Insert {
                    new_index,
                    count: new_len,
                });
            }
        }
    }

    tracing::trace!(
        old_rows = old.len(),
        new_rows = new.len(),
        edits = edits.len(),
        "rows diffed"
    );
    edits
}

/// Replays `edits` on `old`, taking inserted and changed rows from `new`.
///
/// Rows not touched by any edit are carried over from `old`. Replaying the
/// script produced by [`diff_rows`] yields a list equal to `new`.
#[must_use]
pub fn apply_edits<T: Clone>(old: &[T], new: &[T], edits: &[RowEdit]) -> Vec<T> {
    let mut out = Vec::with_capacity(new.len());
    let mut old_pos = 0;

    let carry_until_old = |out: &mut Vec<T>, old_pos: &mut usize, target: usize| {
        while *old_pos < target.min(old.len()) {
            out.push(old[*old_pos].clone());
            *old_pos += 1;
        }
    };

    for edit in edits {
        match *edit {
            RowEdit::Remove { old_index, count } => {
                carry_until_old(&mut out, &mut old_pos, old_index);
                old_pos = (old_index + count).min(old.len());
            }
            RowEdit::Insert { new_index, count } => {
                while out.len() < new_index && old_pos < old.len() {
                    out.push(old[old_pos].clone());
                    old_pos += 1;
                }
                let end = (new_index + count).min(new.len());
                out.extend_from_slice(&new[new_index.min(end)..end]);
            }
            RowEdit::Change {
                old_index,
                new_index,
            } => {
                carry_until_old(&mut out, &mut old_pos, old_index);
                if let Some(row) = new.get(new_index) {
                    out.push(row.clone());
                }
                old_pos = (old_index + 1).min(old.len());
            }
        }
    }

    out.extend_from_slice(&old[old_pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, u8);

    impl Diffable for Row {
        type Identity = &'static str;

        fn identity(&self) -> &'static str {
            self.0
        }
    }

    #[test]
    fn identical_lists_have_no_edits() {
        let rows = vec![Row("a", 1), Row("b", 2)];
        assert!(diff_rows(&rows, &rows).is_empty());
    }

    #[test]
    fn content_change_is_not_a_replacement() {
        let old = vec![Row("a", 1), Row("b", 2)];
        let new = vec![Row("a", 1), Row("b", 3)];
        assert_eq!(
            diff_rows(&old, &new),
            vec![RowEdit::Change {
                old_index: 1,
                new_index: 1
            }]
        );
    }

    #[test]
    fn replay_reconstructs_new_list() {
        let old = vec![Row("h", 0), Row("s", 0), Row("x", 1), Row("y", 1)];
        let new = vec![Row("s", 1), Row("y", 2), Row("z", 0)];
        let edits = diff_rows(&old, &new);
        assert_eq!(apply_edits(&old, &new, &edits), new);
    }

    #[test]
    fn replay_holds_for_reordered_and_emptied_lists() {
        let cases: [(&[Row], &[Row]); 4] = [
            (&[], &[Row("a", 0), Row("b", 0)]),
            (&[Row("a", 0), Row("b", 0)], &[]),
            (&[Row("a", 0), Row("b", 0), Row("c", 0)], &[Row("c", 1), Row("a", 0)]),
            (&[Row("x", 0)], &[Row("y", 0), Row("x", 2), Row("z", 0)]),
        ];
        for (old, new) in cases {
            let edits = diff_rows(old, new);
            assert_eq!(apply_edits(old, new, &edits), new, "{old:?} -> {new:?}");
        }
    }

    #[test]
    fn verticals_rows_diff_by_suggestion_id() {
        let suggestion = |id: &str| VerticalsListItem::Suggestion {
            id: id.to_string(),
            title: id.to_string(),
            show_divider: false,
        };
        let old = vec![suggestion("p1v1"), suggestion("p2v1")];
        let new = vec![suggestion("p2v1")];
        assert_eq!(
            diff_rows(&old, &new),
            vec![RowEdit::Remove {
                old_index: 0,
                count: 1
            }]
        );
    }
}
