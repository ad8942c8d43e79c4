use super::types::{DiffResult, SideLine};
use serde::Serialize;
use similar::{ChangeTag, TextDiff};
use std::fmt;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub added_lines: usize,
    pub removed_lines: usize,
    pub modified_lines: usize,
    pub added_chars: usize,
    pub removed_chars: usize,
}

impl DiffStats {
    pub fn is_empty(&self) -> bool {
        self.added_lines == 0 && self.removed_lines == 0 && self.modified_lines == 0
    }
}

impl fmt::Display for DiffStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} removed, {} modified (+{} / -{} chars)",
            self.added_lines,
            self.removed_lines,
            self.modified_lines,
            self.added_chars,
            self.removed_chars
        )
    }
}

/// Calculate line and character-level statistics from a diff result
pub fn calculate_stats(result: &DiffResult) -> DiffStats {
    let mut stats = DiffStats::default();

    for row in &result.rows {
        match (row.left(), row.right()) {
            (
                SideLine::Modified {
                    content: left,
                    ..
                },
                SideLine::Modified {
                    content: right,
                    ..
                },
            ) => {
                stats.modified_lines += 1;
                let diff = TextDiff::from_chars(left.as_str(), right.as_str());
                for change in diff.iter_all_changes() {
                    match change.tag() {
                        ChangeTag::Insert => stats.added_chars += change.value().chars().count(),
                        ChangeTag::Delete => stats.removed_chars += change.value().chars().count(),
                        ChangeTag::Equal => {}
                    }
                }
            }
            (SideLine::Removed { content, .. }, _) => {
                stats.removed_lines += 1;
                stats.removed_chars += content.chars().count();
            }
            (_, SideLine::Added { content, .. }) => {
                stats.added_lines += 1;
                stats.added_chars += content.chars().count();
            }
            _ => {}
        }
    }

    stats
}
