use super::types::Side;
use serde::Serialize;
use similar::{ChangeTag, TextDiff};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Added,
    Removed,
}

/// A highlighted byte range `from..to` inside one side's line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InlineSpan {
    pub from: usize,
    pub to: usize,
    #[serde(rename = "type")]
    pub kind: SpanKind,
}

/// Character-level highlight spans for one side of a modified line pair.
///
/// `left_line` and `right_line` are always passed in that order; `side`
/// selects whose offsets are reported. The left side only gets `Removed`
/// spans and the right side only `Added` spans. Offsets are byte offsets into
/// that side's own line, so `&line[span.from..span.to]` is the changed text.
pub fn compute_inline_diffs(left_line: &str, right_line: &str, side: Side) -> Vec<InlineSpan> {
    let diff = TextDiff::from_chars(left_line, right_line);
    let (wanted, skipped, kind) = match side {
        Side::Left => (ChangeTag::Delete, ChangeTag::Insert, SpanKind::Removed),
        Side::Right => (ChangeTag::Insert, ChangeTag::Delete, SpanKind::Added),
    };

    let mut spans: Vec<InlineSpan> = Vec::new();
    let mut offset = 0;

    for change in diff.iter_all_changes() {
        let tag = change.tag();
        if tag == skipped {
            continue;
        }

        let len = change.value().len();
        if tag == wanted {
            match spans.last_mut() {
                Some(last) if last.to == offset => last.to += len,
                _ => spans.push(InlineSpan {
                    from: offset,
                    to: offset + len,
                    kind,
                }),
            }
        }
        offset += len;
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(line: &'a str, spans: &[InlineSpan]) -> Vec<&'a str> {
        spans.iter().map(|s| &line[s.from..s.to]).collect()
    }

    #[test]
    fn left_side_highlights_removed_text() {
        let left = "hello cat";
        let spans = compute_inline_diffs(left, "hello dog", Side::Left);
        assert!(spans.iter().all(|s| s.kind == SpanKind::Removed));
        assert_eq!(texts(left, &spans).concat(), "cat");
    }

    #[test]
    fn right_side_highlights_added_text() {
        let right = "hello dog";
        let spans = compute_inline_diffs("hello cat", right, Side::Right);
        assert!(spans.iter().all(|s| s.kind == SpanKind::Added));
        assert_eq!(texts(right, &spans).concat(), "dog");
    }

    #[test]
    fn insertion_only_leaves_left_clean() {
        assert!(compute_inline_diffs("我爱你", "我不爱你", Side::Left).is_empty());

        let right = "我不爱你";
        let spans = compute_inline_diffs("我爱你", right, Side::Right);
        assert_eq!(spans.len(), 1);
        assert_eq!(&right[spans[0].from..spans[0].to], "不");
    }

    #[test]
    fn adjacent_changes_merge_into_one_span() {
        let right = "\"count\": 12345";
        let spans = compute_inline_diffs("\"count\": 0", right, Side::Right);
        assert_eq!(spans.len(), 1);
        assert_eq!(&right[spans[0].from..spans[0].to], "12345");
    }

    #[test]
    fn spans_are_disjoint_and_ascending() {
        let left = "a1b2c3d4";
        let spans = compute_inline_diffs(left, "aXbYcZd", Side::Left);
        for pair in spans.windows(2) {
            assert!(pair[0].to < pair[1].from);
        }
        assert_eq!(texts(left, &spans), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn identical_lines_have_no_spans() {
        assert!(compute_inline_diffs("same", "same", Side::Left).is_empty());
        assert!(compute_inline_diffs("same", "same", Side::Right).is_empty());
    }
}
