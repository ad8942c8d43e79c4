use super::similarity::similarity;
use crate::constant::SIMILARITY_THRESHOLD;

/// One entry of a reassembled removed/added block, in display order.
///
/// Indices point into the block's removed and added lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairedLine<'a> {
    Modified {
        removed: usize,
        added: usize,
        left: &'a str,
        right: &'a str,
    },
    Removed {
        index: usize,
        content: &'a str,
    },
    Added {
        index: usize,
        content: &'a str,
    },
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    removed: usize,
    added: usize,
    score: f64,
}

/// Decide which lines of one changed block are modifications of each other.
///
/// Every pair scoring at least [`SIMILARITY_THRESHOLD`] is a candidate.
/// Candidates are accepted greedily from the highest score down, ties in
/// generation order (removed index, then added index), skipping any whose
/// removed or added line is already claimed. The block is then walked top to
/// bottom: unclaimed removed lines before a match come first, then unclaimed
/// added lines before it, then the match itself; leftovers are flushed
/// removed-first.
pub fn pair_lines<'a>(removed: &[&'a str], added: &[&'a str]) -> Vec<PairedLine<'a>> {
    let mut candidates = Vec::new();
    for (ri, left) in removed.iter().enumerate() {
        for (ai, right) in added.iter().enumerate() {
            let score = similarity(left, right);
            if score >= SIMILARITY_THRESHOLD {
                candidates.push(Candidate {
                    removed: ri,
                    added: ai,
                    score,
                });
            }
        }
    }

    // stable: equal scores keep generation order
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut removed_claimed = vec![false; removed.len()];
    let mut added_claimed = vec![false; added.len()];
    let mut matches = Vec::new();
    for candidate in candidates {
        if removed_claimed[candidate.removed] || added_claimed[candidate.added] {
            continue;
        }
        removed_claimed[candidate.removed] = true;
        added_claimed[candidate.added] = true;
        matches.push((candidate.removed, candidate.added));
    }
    matches.sort_by_key(|&(ri, _)| ri);

    let mut result = Vec::with_capacity(removed.len() + added.len() - matches.len());
    let mut ri = 0;
    let mut ai = 0;

    for (match_ri, match_ai) in matches {
        while ri < match_ri {
            if !removed_claimed[ri] {
                result.push(PairedLine::Removed {
                    index: ri,
                    content: removed[ri],
                });
            }
            ri += 1;
        }
        while ai < match_ai {
            if !added_claimed[ai] {
                result.push(PairedLine::Added {
                    index: ai,
                    content: added[ai],
                });
            }
            ai += 1;
        }

        result.push(PairedLine::Modified {
            removed: match_ri,
            added: match_ai,
            left: removed[match_ri],
            right: added[match_ai],
        });
        ri = match_ri + 1;
        // a crossing match never moves the added cursor backwards
        ai = ai.max(match_ai + 1);
    }

    for (index, content) in removed.iter().enumerate().skip(ri) {
        if !removed_claimed[index] {
            result.push(PairedLine::Removed { index, content });
        }
    }
    for (index, content) in added.iter().enumerate().skip(ai) {
        if !added_claimed[index] {
            result.push(PairedLine::Added { index, content });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(lines: &[PairedLine<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| match line {
                PairedLine::Modified { left, right, .. } => format!("~{left}|{right}"),
                PairedLine::Removed { content, .. } => format!("-{content}"),
                PairedLine::Added { content, .. } => format!("+{content}"),
            })
            .collect()
    }

    #[test]
    fn similar_lines_become_modified() {
        let result = pair_lines(&["hello world"], &["hello there"]);
        assert_eq!(summary(&result), vec!["~hello world|hello there"]);
    }

    #[test]
    fn dissimilar_lines_stay_separate() {
        let result = pair_lines(&["abc"], &["xyz"]);
        assert_eq!(summary(&result), vec!["-abc", "+xyz"]);
    }

    #[test]
    fn empty_side_yields_no_pairing() {
        let result = pair_lines(&["a", "b"], &[]);
        assert_eq!(summary(&result), vec!["-a", "-b"]);

        let result = pair_lines(&[], &["a", "b"]);
        assert_eq!(summary(&result), vec!["+a", "+b"]);
    }

    #[test]
    fn threshold_is_inclusive() {
        // 3 of 10 characters shared -> exactly 0.3
        let result = pair_lines(&["abc"], &["abcxxxxxxx"]);
        assert!(matches!(result[0], PairedLine::Modified { .. }));

        // 2 of 10 -> below threshold
        let result = pair_lines(&["ab"], &["abxxxxxxxx"]);
        assert_eq!(summary(&result), vec!["-ab", "+abxxxxxxxx"]);
    }

    #[test]
    fn best_match_wins_over_position() {
        let result = pair_lines(&["let total = 1;"], &["fn main() {", "let total = 2;"]);
        assert_eq!(
            summary(&result),
            vec!["+fn main() {", "~let total = 1;|let total = 2;"]
        );
    }

    #[test]
    fn ties_resolve_in_generation_order() {
        // both added lines are identical to the removed one
        let result = pair_lines(&["same"], &["same", "same"]);
        assert_eq!(
            result[0],
            PairedLine::Modified {
                removed: 0,
                added: 0,
                left: "same",
                right: "same",
            }
        );
        assert_eq!(result[1], PairedLine::Added { index: 1, content: "same" });
    }

    #[test]
    fn unmatched_removed_lines_precede_the_next_match() {
        let result = pair_lines(&["zzz", "value: 1"], &["value: 2"]);
        assert_eq!(summary(&result), vec!["-zzz", "~value: 1|value: 2"]);
    }

    #[test]
    fn leftovers_flush_removed_before_added() {
        let result = pair_lines(&["name: a", "qqq", "www"], &["name: b", "kkk"]);
        assert_eq!(
            summary(&result),
            vec!["~name: a|name: b", "-qqq", "-www", "+kkk"]
        );
    }

    #[test]
    fn crossing_matches_emit_every_line_once() {
        let removed = ["alpha one", "beta two"];
        let added = ["beta 2", "gap", "alpha 1"];
        let result = pair_lines(&removed, &added);

        let added_seen: Vec<usize> = result
            .iter()
            .filter_map(|line| match line {
                PairedLine::Modified { added, .. } => Some(*added),
                PairedLine::Added { index, .. } => Some(*index),
                PairedLine::Removed { .. } => None,
            })
            .collect();
        let mut sorted = added_seen.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2]);

        let removed_seen = result
            .iter()
            .filter(|line| !matches!(line, PairedLine::Added { .. }))
            .count();
        assert_eq!(removed_seen, 2);
    }
}
