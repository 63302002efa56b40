use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

pub struct TemplateMatcher {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for TemplateMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateMatcher").finish_non_exhaustive()
    }
}

impl Default for TemplateMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Indices of `entries` matching every whitespace-separated term of
    /// `filter`, best score first. Ties keep catalog order.
    pub fn filter(&self, filter: &str, entries: &[String]) -> Vec<usize> {
        let terms: Vec<&str> = filter.split_whitespace().collect();
        if terms.is_empty() {
            return (0..entries.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                let mut total: i64 = 0;
                for term in &terms {
                    total += self.matcher.fuzzy_match(entry, term)?;
                }
                Some((idx, total))
            })
            .collect();

        // Stable sort keeps catalog order among equal scores
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<String> {
        vec![
            "Portrait / Studio portrait".to_string(),
            "Landscape / Mountain vista".to_string(),
            "Art / Watercolor painting".to_string(),
        ]
    }

    #[test]
    fn test_empty_filter_returns_all_in_order() {
        let matcher = TemplateMatcher::new();
        assert_eq!(matcher.filter("", &entries()), vec![0, 1, 2]);
        assert_eq!(matcher.filter("   ", &entries()), vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_matches_subsequence() {
        let matcher = TemplateMatcher::new();
        assert_eq!(matcher.filter("wtrclr", &entries()), vec![2]);
    }

    #[test]
    fn test_filter_requires_all_terms() {
        let matcher = TemplateMatcher::new();
        assert_eq!(matcher.filter("land vista", &entries()), vec![1]);
        assert!(matcher.filter("land studio", &entries()).is_empty());
    }

    #[test]
    fn test_filter_no_match() {
        let matcher = TemplateMatcher::new();
        assert!(matcher.filter("zzzz", &entries()).is_empty());
    }
}
