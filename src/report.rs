//! Plain-text rendering of the synchronized rows

use crate::diff::{DiffResult, DiffStats, DiffRow, LineKind, Side, SideLine, calculate_stats};
use crate::pane::{PaneLine, pane_lines};
use serde::Serialize;

fn marker(kind: LineKind) -> char {
    match kind {
        LineKind::Unchanged | LineKind::Placeholder => ' ',
        LineKind::Added => '+',
        LineKind::Removed => '-',
        LineKind::Modified => '~',
    }
}

/// Wrap every inline span of a modified line in brackets
fn bracketed(line: &SideLine, pane: &PaneLine) -> String {
    let content = line.content();
    if pane.inline_spans.is_empty() {
        return content.to_string();
    }

    let mut out = String::with_capacity(content.len() + pane.inline_spans.len() * 2);
    let mut cursor = 0;
    for span in &pane.inline_spans {
        out.push_str(&content[cursor..span.from]);
        out.push('[');
        out.push_str(&content[span.from..span.to]);
        out.push(']');
        cursor = span.to;
    }
    out.push_str(&content[cursor..]);
    out
}

struct Cell {
    number: String,
    marker: char,
    text: String,
}

fn cells(rows: &[DiffRow], side: Side) -> Vec<Cell> {
    rows.iter()
        .zip(pane_lines(rows, side))
        .map(|(row, pane)| {
            let line = row.side(side);
            Cell {
                number: line
                    .line_number()
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                marker: marker(line.kind()),
                text: bracketed(line, &pane),
            }
        })
        .collect()
}

/// Render rows as two columns, one output line per visual row
pub fn render_side_by_side(rows: &[DiffRow]) -> String {
    let left = cells(rows, Side::Left);
    let right = cells(rows, Side::Right);

    let number_width = left
        .iter()
        .chain(right.iter())
        .map(|c| c.number.len())
        .max()
        .unwrap_or(1);
    let text_width = left.iter().map(|c| c.text.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (l, r) in left.iter().zip(right.iter()) {
        let pad = text_width - l.text.chars().count();
        out.push_str(&format!(
            "{:>nw$} {} {}{} | {:>nw$} {} {}\n",
            l.number,
            l.marker,
            l.text,
            " ".repeat(pad),
            r.number,
            r.marker,
            r.text,
            nw = number_width
        ));
    }
    out
}

#[derive(Serialize)]
pub struct Report<'a> {
    pub result: &'a DiffResult,
    pub stats: DiffStats,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a DiffResult) -> Self {
        Self {
            result,
            stats: calculate_stats(result),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = render_side_by_side(&self.result.rows);
        if self.stats.is_empty() {
            out.push_str("No differences\n");
        } else {
            out.push_str(&format!("{}\n", self.stats));
        }
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compute_line_diff;

    #[test]
    fn rows_render_as_aligned_columns() {
        let result = compute_line_diff("a\nb", "a\nX\nb");
        let text = render_side_by_side(&result.rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["1   a | 1   a", "      | 2 + X", "2   b | 3   b"]);
    }

    #[test]
    fn modified_spans_are_bracketed() {
        let result = compute_line_diff("hello world", "hello there");
        let text = render_side_by_side(&result.rows);
        assert!(text.starts_with("1 ~ hello "));
        assert!(text.contains('['));
        assert!(text.contains(" | 1 ~ hello "));
    }

    #[test]
    fn identical_texts_report_no_differences() {
        let result = compute_line_diff("same", "same");
        let report = Report::new(&result);
        assert!(report.to_text().ends_with("No differences\n"));
    }

    #[test]
    fn stats_line_follows_the_rows() {
        let result = compute_line_diff("a\nb", "a\nX\nb");
        let text = Report::new(&result).to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "1 added, 0 removed, 0 modified (+1 / -0 chars)");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn json_report_carries_rows_and_stats() {
        let result = compute_line_diff("a", "b");
        let json: serde_json::Value =
            serde_json::from_str(&Report::new(&result).to_json().unwrap()).unwrap();
        assert_eq!(json["stats"]["added_lines"], 1);
        assert_eq!(json["result"]["rows"].as_array().unwrap().len(), 2);
    }
}
