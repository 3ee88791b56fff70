//! Archaic contraction rewriting

use crate::constants::{ARCHAIC_CONTRACTION, MODERN_SUFFIX};

/// Rewrites `’d` to `ed` and trims each fragment.
///
/// The replacement is a literal substring substitution that also fires
/// mid-word. Trimming runs afterwards. Fragment count and order never
/// change; a fragment may end up empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modernizer;

impl Modernizer {
    /// Create a new modernizer
    pub fn new() -> Self {
        Self
    }

    /// Modernize a single fragment
    pub fn modernize_fragment(&self, fragment: &str) -> String {
        fragment
            .replace(ARCHAIC_CONTRACTION, MODERN_SUFFIX)
            .trim()
            .to_string()
    }

    /// Modernize every fragment, preserving count and order
    pub fn modernize<S: AsRef<str>>(&self, fragments: &[S]) -> Vec<String> {
        fragments
            .iter()
            .map(|fragment| self.modernize_fragment(fragment.as_ref()))
            .collect()
    }
}

/// Modernize with the default modernizer
pub fn modernize<S: AsRef<str>>(fragments: &[S]) -> Vec<String> {
    Modernizer.modernize(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_case() {
        assert_eq!(modernize(&[" belov\u{2019}d friend "]), vec!["beloved friend"]);
    }

    #[test]
    fn test_replacement_fires_mid_word() {
        assert_eq!(Modernizer::new().modernize_fragment("a\u{2019}dz"), "aedz");
    }

    #[test]
    fn test_every_occurrence_replaced() {
        assert_eq!(
            Modernizer::new().modernize_fragment("arm\u{2019}d and crown\u{2019}d"),
            "armed and crowned"
        );
    }

    #[test]
    fn test_ascii_apostrophe_untouched() {
        assert_eq!(Modernizer::new().modernize_fragment("belov'd"), "belov'd");
    }

    #[test]
    fn test_uppercase_d_untouched() {
        assert_eq!(Modernizer::new().modernize_fragment("X\u{2019}D"), "X\u{2019}D");
    }

    #[test]
    fn test_trims_tabs_and_newlines() {
        assert_eq!(Modernizer::new().modernize_fragment("\t Olympus \n"), "Olympus");
    }

    #[test]
    fn test_whitespace_only_becomes_empty() {
        assert_eq!(modernize(&["   ", "Olympus"]), vec!["", "Olympus"]);
    }

    #[test]
    fn test_length_and_order_preserved() {
        let fragments = vec![
            " first ".to_string(),
            String::new(),
            "third\u{2019}d".to_string(),
        ];
        let modernized = modernize(&fragments);
        assert_eq!(modernized, vec!["first", "", "thirded"]);
    }
}
