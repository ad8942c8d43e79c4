use super::pairing::{PairedLine, pair_lines};
use super::types::{DiffResult, DiffRow};
use similar::{DiffOp, TextDiff};
use std::collections::BTreeMap;
use std::ops::Range;

/// A run of lines sharing one classification, as ranges into the split texts
#[derive(Debug, Clone, PartialEq, Eq)]
enum Group {
    /// Ranges on the left and right, always the same length
    Unchanged(Range<usize>, Range<usize>),
    Removed(Range<usize>),
    Added(Range<usize>),
}

/// Split text into lines, dropping the single empty segment a final `\n` leaves
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Append a group, extending the previous one when both are the same kind and adjacent
fn push_group(groups: &mut Vec<Group>, group: Group) {
    if let Some(last) = groups.last_mut() {
        match (last, &group) {
            (Group::Removed(prev), Group::Removed(next)) if prev.end == next.start => {
                prev.end = next.end;
                return;
            }
            (Group::Added(prev), Group::Added(next)) if prev.end == next.start => {
                prev.end = next.end;
                return;
            }
            (Group::Unchanged(prev_l, prev_r), Group::Unchanged(next_l, next_r))
                if prev_l.end == next_l.start && prev_r.end == next_r.start =>
            {
                prev_l.end = next_l.end;
                prev_r.end = next_r.end;
                return;
            }
            _ => {}
        }
    }
    groups.push(group);
}

/// Turn the raw diff ops into unchanged/removed/added groups
fn group_ops(ops: &[DiffOp]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();

    for op in ops {
        match *op {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => push_group(&mut groups, Group::Unchanged(
                old_index..old_index + len,
                new_index..new_index + len,
            )),
            DiffOp::Delete {
                old_index, old_len, ..
            } => push_group(&mut groups, Group::Removed(old_index..old_index + old_len)),
            DiffOp::Insert {
                new_index, new_len, ..
            } => push_group(&mut groups, Group::Added(new_index..new_index + new_len)),
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                push_group(&mut groups, Group::Removed(old_index..old_index + old_len));
                push_group(&mut groups, Group::Added(new_index..new_index + new_len));
            }
        }
    }

    groups
}

/// Collects rows and keeps both line maps in step with them
#[derive(Default)]
struct RowBuilder {
    rows: Vec<DiffRow>,
    left_line_map: BTreeMap<usize, usize>,
    right_line_map: BTreeMap<usize, usize>,
}

impl RowBuilder {
    fn next_index(&self) -> usize {
        self.rows.len()
    }

    fn unchanged(&mut self, content: &str, left_number: usize, right_number: usize) {
        let index = self.next_index();
        self.left_line_map.insert(left_number, index);
        self.right_line_map.insert(right_number, index);
        self.rows
            .push(DiffRow::unchanged(content, left_number, right_number, index));
    }

    fn modified(&mut self, left: &str, right: &str, left_number: usize, right_number: usize) {
        let index = self.next_index();
        self.left_line_map.insert(left_number, index);
        self.right_line_map.insert(right_number, index);
        self.rows
            .push(DiffRow::modified(left, right, left_number, right_number, index));
    }

    fn removed(&mut self, content: &str, left_number: usize) {
        let index = self.next_index();
        self.left_line_map.insert(left_number, index);
        self.rows.push(DiffRow::removed(content, left_number, index));
    }

    fn added(&mut self, content: &str, right_number: usize) {
        let index = self.next_index();
        self.right_line_map.insert(right_number, index);
        self.rows.push(DiffRow::added(content, right_number, index));
    }

    fn finish(self) -> DiffResult {
        DiffResult {
            rows: self.rows,
            left_line_map: self.left_line_map,
            right_line_map: self.right_line_map,
        }
    }
}

/// Compute the row-aligned line diff of two texts.
///
/// Line numbers are 1-based positions in the split source texts. A removed
/// block directly followed by an added block goes through [`pair_lines`] so
/// similar lines share one `modified` row; every other changed line gets a
/// placeholder on the opposite side.
pub fn compute_line_diff(left_text: &str, right_text: &str) -> DiffResult {
    let left_lines = split_lines(left_text);
    let right_lines = split_lines(right_text);

    let diff = TextDiff::from_slices(&left_lines, &right_lines);
    let groups = group_ops(diff.ops());

    let mut builder = RowBuilder::default();
    let mut i = 0;
    while i < groups.len() {
        match &groups[i] {
            Group::Unchanged(left, right) => {
                for (l, r) in left.clone().zip(right.clone()) {
                    builder.unchanged(left_lines[l], l + 1, r + 1);
                }
                i += 1;
            }
            Group::Removed(removed) => {
                if let Some(Group::Added(added)) = groups.get(i + 1) {
                    let paired =
                        pair_lines(&left_lines[removed.clone()], &right_lines[added.clone()]);
                    for line in paired {
                        match line {
                            PairedLine::Modified {
                                removed: ri,
                                added: ai,
                                left,
                                right,
                            } => builder.modified(
                                left,
                                right,
                                removed.start + ri + 1,
                                added.start + ai + 1,
                            ),
                            PairedLine::Removed { index, content } => {
                                builder.removed(content, removed.start + index + 1)
                            }
                            PairedLine::Added { index, content } => {
                                builder.added(content, added.start + index + 1)
                            }
                        }
                    }
                    i += 2;
                } else {
                    for l in removed.clone() {
                        builder.removed(left_lines[l], l + 1);
                    }
                    i += 1;
                }
            }
            Group::Added(added) => {
                for r in added.clone() {
                    builder.added(right_lines[r], r + 1);
                }
                i += 1;
            }
        }
    }

    builder.finish()
}
