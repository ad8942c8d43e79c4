use serde::Serialize;
use std::collections::BTreeMap;

/// Which pane of the diff view a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Classification of one half of a row, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Unchanged,
    Added,
    Removed,
    Modified,
    Placeholder,
}

/// The left or right half of a [`DiffRow`].
///
/// Line numbers are 1-based and only exist on real lines; a placeholder is a
/// content-less filler that keeps the two panes aligned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SideLine {
    Unchanged {
        content: String,
        line_number: usize,
    },
    Added {
        content: String,
        line_number: usize,
    },
    Removed {
        content: String,
        line_number: usize,
    },
    Modified {
        content: String,
        line_number: usize,
        /// Content of the paired line on the opposite side
        pair_content: String,
    },
    Placeholder,
}

impl SideLine {
    pub fn kind(&self) -> LineKind {
        match self {
            SideLine::Unchanged { .. } => LineKind::Unchanged,
            SideLine::Added { .. } => LineKind::Added,
            SideLine::Removed { .. } => LineKind::Removed,
            SideLine::Modified { .. } => LineKind::Modified,
            SideLine::Placeholder => LineKind::Placeholder,
        }
    }

    /// Line text, empty for placeholders
    pub fn content(&self) -> &str {
        match self {
            SideLine::Unchanged { content, .. }
            | SideLine::Added { content, .. }
            | SideLine::Removed { content, .. }
            | SideLine::Modified { content, .. } => content,
            SideLine::Placeholder => "",
        }
    }

    pub fn line_number(&self) -> Option<usize> {
        match self {
            SideLine::Unchanged { line_number, .. }
            | SideLine::Added { line_number, .. }
            | SideLine::Removed { line_number, .. }
            | SideLine::Modified { line_number, .. } => Some(*line_number),
            SideLine::Placeholder => None,
        }
    }

    pub fn pair_content(&self) -> Option<&str> {
        match self {
            SideLine::Modified { pair_content, .. } => Some(pair_content),
            _ => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SideLine::Placeholder)
    }
}

/// One synchronized visual line spanning both panes.
///
/// Rows can only be built through the constructors below, none of which puts a
/// placeholder on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRow {
    left: SideLine,
    right: SideLine,
    visual_index: usize,
}

impl DiffRow {
    pub fn unchanged(
        content: &str,
        left_number: usize,
        right_number: usize,
        visual_index: usize,
    ) -> Self {
        Self {
            left: SideLine::Unchanged {
                content: content.to_string(),
                line_number: left_number,
            },
            right: SideLine::Unchanged {
                content: content.to_string(),
                line_number: right_number,
            },
            visual_index,
        }
    }

    pub fn modified(
        left: &str,
        right: &str,
        left_number: usize,
        right_number: usize,
        visual_index: usize,
    ) -> Self {
        Self {
            left: SideLine::Modified {
                content: left.to_string(),
                line_number: left_number,
                pair_content: right.to_string(),
            },
            right: SideLine::Modified {
                content: right.to_string(),
                line_number: right_number,
                pair_content: left.to_string(),
            },
            visual_index,
        }
    }

    /// A left-only row; the right side gets a placeholder
    pub fn removed(content: &str, left_number: usize, visual_index: usize) -> Self {
        Self {
            left: SideLine::Removed {
                content: content.to_string(),
                line_number: left_number,
            },
            right: SideLine::Placeholder,
            visual_index,
        }
    }

    /// A right-only row; the left side gets a placeholder
    pub fn added(content: &str, right_number: usize, visual_index: usize) -> Self {
        Self {
            left: SideLine::Placeholder,
            right: SideLine::Added {
                content: content.to_string(),
                line_number: right_number,
            },
            visual_index,
        }
    }

    pub fn left(&self) -> &SideLine {
        &self.left
    }

    pub fn right(&self) -> &SideLine {
        &self.right
    }

    pub fn side(&self, side: Side) -> &SideLine {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn visual_index(&self) -> usize {
        self.visual_index
    }
}

/// Immutable snapshot of one diff pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    pub rows: Vec<DiffRow>,
    /// Left line number -> visual index
    pub left_line_map: BTreeMap<usize, usize>,
    /// Right line number -> visual index
    pub right_line_map: BTreeMap<usize, usize>,
}

impl DiffResult {
    pub fn line_map(&self, side: Side) -> &BTreeMap<usize, usize> {
        match side {
            Side::Left => &self.left_line_map,
            Side::Right => &self.right_line_map,
        }
    }

    /// Resolve which synchronized row holds source line `line` on `side`
    pub fn visual_index_for_line(&self, side: Side, line: usize) -> Option<usize> {
        self.line_map(side).get(&line).copied()
    }

    /// Visual indices where `side` shows a placeholder
    pub fn placeholders(&self, side: Side) -> Vec<usize> {
        self.rows
            .iter()
            .filter(|row| row.side(side).is_placeholder())
            .map(|row| row.visual_index)
            .collect()
    }

    pub fn is_identical(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.left.kind() == LineKind::Unchanged)
    }
}
