use std::collections::BTreeSet;

/// Density value reported when a text has no dance/event matches at all.
pub const NO_MATCH_DENSITY: i32 = -100;

/// Number of distinct evidence terms backing a positive verdict; zero for
/// a negative one. Monotone non-decreasing in the size of the combined
/// match set.
pub fn match_score(
    is_dance_event: bool,
    dance_matches: &BTreeSet<String>,
    event_matches: &BTreeSet<String>,
) -> u32 {
    if is_dance_event {
        dance_matches.union(event_matches).count() as u32
    } else {
        0
    }
}

/// Coarse log-scaled relevance tier: `floor(log2(n / w))` for `n` combined
/// dance/event matches over `w` words of text, or the sentinel when
/// nothing matched.
///
/// Words are alphanumeric runs; scripts without whitespace word breaks
/// undercount here, skewing density high for CJK/Thai text. Accepted
/// approximation.
pub fn keyword_density(search_text: &str, combined_matches: usize) -> i32 {
    if combined_matches == 0 {
        return NO_MATCH_DENSITY;
    }
    let words = word_count(search_text).max(1);
    (combined_matches as f64 / words as f64).log2().floor() as i32
}

fn word_count(text: &str) -> usize {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_match_score_zero_for_negative_verdict() {
        let dance = set(&["breaking"]);
        let event = set(&["battle"]);
        assert_eq!(match_score(false, &dance, &event), 0);
    }

    #[test]
    fn test_match_score_counts_distinct_union() {
        let dance = set(&["breaking", "battle"]);
        let event = set(&["battle", "judges"]);
        // "battle" appears in both sets but counts once.
        assert_eq!(match_score(true, &dance, &event), 3);
    }

    #[test]
    fn test_match_score_monotone_in_match_set() {
        let smaller = set(&["breaking"]);
        let larger = set(&["breaking", "cypher"]);
        let event = set(&["battle"]);
        assert!(match_score(true, &larger, &event) >= match_score(true, &smaller, &event));
    }

    #[test]
    fn test_density_sentinel_for_no_matches() {
        assert_eq!(keyword_density("", 0), NO_MATCH_DENSITY);
        assert_eq!(keyword_density("a club night with djs", 0), NO_MATCH_DENSITY);
    }

    #[test]
    fn test_density_tiers() {
        // 1 match in 4 words: log2(1/4) = -2.
        assert_eq!(keyword_density("breaking battle this friday", 1), -2);
        // 4 matches in 4 words: log2(1) = 0.
        assert_eq!(keyword_density("breaking battle cypher judges", 4), 0);
        // 3 matches in 8 words: floor(log2(0.375)) = -2.
        assert_eq!(
            keyword_density("a big breaking battle with judges this friday", 3),
            -2
        );
    }

    #[test]
    fn test_word_count_splits_on_punctuation() {
        assert_eq!(word_count("salsa night, at-the club!"), 5);
        assert_eq!(word_count("  "), 0);
    }
}
