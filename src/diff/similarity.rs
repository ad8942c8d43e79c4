use std::collections::HashMap;

/// Score how alike two lines are, in `0.0..=1.0`.
///
/// Counts the characters the shorter line shares with the longer one (as a
/// multiset, ignoring order) and divides by the longer line's length. Only
/// meant as a ranking weight for pairing lines, not as an edit distance.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (longer, shorter, longer_len) = if a_len > b_len {
        (a, b, a_len)
    } else {
        (b, a, b_len)
    };

    let mut remaining: HashMap<char, usize> = HashMap::new();
    for ch in longer.chars() {
        *remaining.entry(ch).or_insert(0) += 1;
    }

    let mut matches = 0usize;
    for ch in shorter.chars() {
        if let Some(count) = remaining.get_mut(&ch)
            && *count > 0
        {
            *count -= 1;
            matches += 1;
        }
    }

    matches as f64 / longer_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_lines_score_one() {
        assert_eq!(similarity("abc", "abc"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn empty_side_scores_zero() {
        assert_eq!(similarity("", "abc"), 0.0);
        assert_eq!(similarity("abc", ""), 0.0);
    }

    #[test]
    fn shared_characters_over_longer_length() {
        // "hello " plus 'e','r' from "there" -> 8 of 11
        let score = similarity("hello world", "hello there");
        assert!((score - 8.0 / 11.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(similarity("abc", "cba"), 1.0);
        assert_eq!(similarity("ab", "ba"), 1.0);
    }

    #[test]
    fn each_character_is_consumed_once() {
        // only one 'a' in the longer line can be matched
        assert_eq!(similarity("aaaa", "ab"), 0.25);
    }

    #[test]
    fn is_symmetric() {
        let pairs = [("kitten", "sitting"), ("foo", "foobar"), ("x", "yz")];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(similarity("我爱你", "我不爱你"), 0.75);
    }
}
