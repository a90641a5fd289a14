use crate::results::MovieEntry;

/// Fuzzy score of a title against a search phrase. Smaller distances rank
/// first; `NoMatch` ranks after every match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Relevance {
    /// Phrase is a subsequence of the title; edit distance between the two
    Match(usize),
    NoMatch,
}

/// True if every char of `needle` appears in `haystack`, in order
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut chars = haystack.chars();
    needle.chars().all(|n| chars.any(|h| h == n))
}

/// Levenshtein distance counted in chars
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Case-insensitive subsequence match, scored by edit distance
pub fn score(phrase: &str, title: &str) -> Relevance {
    let phrase = phrase.to_lowercase();
    let title = title.to_lowercase();

    if is_subsequence(&phrase, &title) {
        Relevance::Match(edit_distance(&phrase, &title))
    } else {
        Relevance::NoMatch
    }
}

/// Reorders search results by relevance to `phrase`.
///
/// The sort is stable, so equally scored titles keep the order the catalog
/// returned them in.
pub fn rank(phrase: &str, mut movies: Vec<MovieEntry>) -> Vec<MovieEntry> {
    movies.sort_by_cached_key(|m| score(phrase, &m.title));
    movies
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(titles: &[&str]) -> Vec<MovieEntry> {
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| MovieEntry {
                img_url: String::new(),
                page_url: format!("https://einthusan.tv/movie/{}", i),
                title: t.to_string(),
            })
            .collect()
    }

    fn titles(movies: &[MovieEntry]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_is_subsequence() {
        assert!(is_subsequence("api", "api"));
        assert!(is_subsequence("api", "a pink igloo"));
        assert!(is_subsequence("", "anything"));
        assert!(!is_subsequence("api", "apple"));
        assert!(!is_subsequence("ba", "ab"));
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("leo", "leo"), 0);
        assert_eq!(edit_distance("leo", ""), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("vikram", "vikram vedha"), 6);
    }

    #[test]
    fn test_score_is_case_insensitive() {
        assert_eq!(score("API", "api"), Relevance::Match(0));
        assert_eq!(score("api", "Api Story"), Relevance::Match(6));
        assert_eq!(score("api", "Grape"), Relevance::NoMatch);
        assert!(Relevance::Match(100) < Relevance::NoMatch);
    }

    #[test]
    fn test_exact_ranks_first_and_no_match_last() {
        let ranked = rank("api", entries(&["Apple", "Api", "Grape"]));
        let order = titles(&ranked);

        let pos = |t: &str| order.iter().position(|o| *o == t).unwrap();
        assert!(pos("Api") <= pos("Apple"));
        assert!(pos("Apple") < pos("Grape"));
        assert!(pos("Api") < pos("Grape"));
    }

    #[test]
    fn test_closer_match_ranks_higher() {
        let ranked = rank(
            "leo",
            entries(&["Leo Das Returns", "Mersal", "Leo", "Leon"]),
        );
        assert_eq!(titles(&ranked), vec!["Leo", "Leon", "Leo Das Returns", "Mersal"]);
    }

    #[test]
    fn test_ties_keep_document_order() {
        let ranked = rank("zzz", entries(&["C", "A", "B"]));
        assert_eq!(titles(&ranked), vec!["C", "A", "B"]);

        // Equal distances among matches keep their order too
        let ranked = rank("ab", entries(&["abx", "xab", "aby"]));
        assert_eq!(titles(&ranked), vec!["abx", "xab", "aby"]);
    }

    #[test]
    fn test_rank_is_permutation() {
        let input = entries(&["Kaala", "Kabali", "Petta", "Kaala", ""]);
        let mut expected: Vec<String> = input.iter().map(|m| m.page_url.clone()).collect();

        let ranked = rank("ka", input);
        let mut got: Vec<String> = ranked.iter().map(|m| m.page_url.clone()).collect();

        expected.sort();
        got.sort();
        assert_eq!(expected, got);
    }
}
