//! Per-pane view of the synchronized rows
//!
//! Each editor pane only holds its own document, so placeholders are not real
//! lines there: they are widgets inserted before `editor_line`.

use crate::diff::{DiffRow, InlineSpan, LineKind, Side, SideLine, compute_inline_diffs};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineBackground {
    Unchanged,
    Added,
    Removed,
    Modified,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaneLine {
    /// 0-based line in the pane's own document
    pub editor_line: usize,
    pub background: LineBackground,
    pub is_placeholder: bool,
    /// Only filled for modified lines
    pub inline_spans: Vec<InlineSpan>,
}

fn background(kind: LineKind) -> LineBackground {
    match kind {
        LineKind::Added => LineBackground::Added,
        LineKind::Removed => LineBackground::Removed,
        LineKind::Modified => LineBackground::Modified,
        LineKind::Unchanged | LineKind::Placeholder => LineBackground::Unchanged,
    }
}

/// Project the rows onto one pane, one entry per row
pub fn pane_lines(rows: &[DiffRow], side: Side) -> Vec<PaneLine> {
    let mut lines = Vec::with_capacity(rows.len());
    let mut editor_line = 0;

    for row in rows {
        let line = row.side(side);
        if line.is_placeholder() {
            lines.push(PaneLine {
                editor_line,
                background: LineBackground::Unchanged,
                is_placeholder: true,
                inline_spans: Vec::new(),
            });
            continue;
        }

        let inline_spans = match line {
            SideLine::Modified {
                content,
                pair_content,
                ..
            } => match side {
                Side::Left => compute_inline_diffs(content, pair_content, side),
                Side::Right => compute_inline_diffs(pair_content, content, side),
            },
            _ => Vec::new(),
        };

        lines.push(PaneLine {
            editor_line,
            background: background(line.kind()),
            is_placeholder: false,
            inline_spans,
        });
        editor_line += 1;
    }

    lines
}
