//! Keyword filtering of sentence fragments

use crate::constants::TOPIC_KEYWORD;
use crate::types::FragmentSequence;

/// Keeps fragments whose lower-cased text contains the keyword.
///
/// Matching uses a lower-cased copy of each fragment; the fragments that
/// survive are returned untouched and in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicFilter {
    keyword: String,
}

impl Default for TopicFilter {
    fn default() -> Self {
        Self::new(TOPIC_KEYWORD)
    }
}

impl TopicFilter {
    /// Create a filter for `keyword`, matched case-insensitively
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
        }
    }

    /// The lower-cased keyword this filter matches
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// True when `fragment` mentions the keyword in any casing
    pub fn matches(&self, fragment: &str) -> bool {
        fragment.to_lowercase().contains(&self.keyword)
    }

    /// Keep the matching fragments; an empty result is valid
    pub fn filter<'a>(&self, fragments: &[&'a str]) -> FragmentSequence<'a> {
        fragments
            .iter()
            .copied()
            .filter(|fragment| self.matches(fragment))
            .collect()
    }
}

/// Filter `fragments` by `keyword`
pub fn filter<'a>(fragments: &[&'a str], keyword: &str) -> FragmentSequence<'a> {
    TopicFilter::new(keyword).filter(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_case() {
        let fragments = ["Zeus reigns on Olympus", "a plain one"];
        assert_eq!(filter(&fragments, "olymp"), vec!["Zeus reigns on Olympus"]);
    }

    #[test]
    fn test_default_keyword_variants() {
        let topic = TopicFilter::default();
        assert_eq!(topic.keyword(), "olymp");
        assert!(topic.matches("the Olympian gods"));
        assert!(topic.matches("OLYMPOS"));
        assert!(topic.matches("high olympus"));
        assert!(!topic.matches("Olypmus misspelled"));
    }

    #[test]
    fn test_original_casing_is_retained() {
        let fragments = [" OLYMPUS shook ", "calm seas"];
        let kept = TopicFilter::default().filter(&fragments);
        assert_eq!(kept, vec![" OLYMPUS shook "]);
    }

    #[test]
    fn test_order_is_preserved() {
        let fragments = ["Olympus first", "skip", "then Olympian", "olymp last"];
        assert_eq!(
            filter(&fragments, "olymp"),
            vec!["Olympus first", "then Olympian", "olymp last"]
        );
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let fragments = ["Troy", "Achilles", ""];
        assert!(filter(&fragments, "olymp").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(filter(&[], "olymp").is_empty());
    }

    #[test]
    fn test_keyword_casing_is_normalized() {
        let fragments = ["on Olympus"];
        assert_eq!(filter(&fragments, "OLYMP"), vec!["on Olympus"]);
    }

    #[test]
    fn test_kept_fragments_borrow_the_input() {
        let text = String::from("Olympus.Troy");
        let fragments: Vec<&str> = text.split('.').collect();
        let kept = filter(&fragments, "olymp");
        assert!(std::ptr::eq(kept[0], fragments[0]));
    }
}
