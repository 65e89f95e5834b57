//! Word denylist filter.
//!
//! Whole-word, case-insensitive matching against a fixed list of offensive
//! words using pre-compiled word-boundary regexes.

use regex::{Regex, RegexSet};
use tracing::debug;

/// Lowercase word tokens that flag content as offensive.
///
/// Every entry is matched as a whole word only, so "cock" does not hit
/// inside "peacock" and "crap" does not hit inside "scrap".
const OFFENSIVE_WORDS: &[&str] = &[
    "fuck", "fucking", "fucker", "fucked", "motherfucker", "fuckyou",
    "shit", "shitty", "bullshit",
    "bitch", "bitches", "bitching",
    "asshole", "assholes",
    "bastard", "bastards",
    "crap", "crappy",
    "dick", "dickhead",
    "piss", "pissed", "pissing",
    "cock", "cocks",
    "pussy", "pussies",
    "slut", "sluts", "slutty",
    "whore", "whores",
    "fag", "faggot", "fags",
    "nigger", "nigga",
    "cunt", "cunts",
    "prick", "pricks",
];

/// Whole-word filter over the word denylist.
pub struct KeywordFilter {
    /// Regex set for the fast any-match pass.
    regex_set: RegexSet,
    /// Individual regexes, index-aligned with [`OFFENSIVE_WORDS`], for
    /// identifying which word matched.
    regexes: Vec<Regex>,
}

impl KeywordFilter {
    /// Creates a filter with word-boundary patterns compiled from the
    /// built-in denylist.
    pub fn new() -> Self {
        let patterns: Vec<String> = OFFENSIVE_WORDS
            .iter()
            .map(|word| format!(r"\b{}\b", regex::escape(word)))
            .collect();

        let regex_set = RegexSet::new(&patterns).expect("Invalid denylist patterns");
        let regexes = patterns
            .iter()
            .map(|p| Regex::new(p).expect("Invalid denylist pattern"))
            .collect();

        Self { regex_set, regexes }
    }

    /// Returns true iff a denylisted word appears as a standalone token.
    ///
    /// Input is trimmed and lowercased before matching; trimmed input
    /// shorter than 3 characters never matches.
    pub fn contains_offensive(&self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.chars().count() < 3 {
            return false;
        }
        let lowered = trimmed.to_lowercase();

        if !self.regex_set.is_match(&lowered) {
            return false;
        }

        for (i, regex) in self.regexes.iter().enumerate() {
            if regex.is_match(&lowered) {
                debug!(word = OFFENSIVE_WORDS[i], "Offensive word detected");
                return true;
            }
        }
        false
    }
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> KeywordFilter {
        KeywordFilter::new()
    }

    #[test]
    fn detects_standalone_word() {
        assert!(filter().contains_offensive("this is shit"));
    }

    #[test]
    fn detects_word_at_start() {
        assert!(filter().contains_offensive("fuck this"));
    }

    #[test]
    fn detects_word_at_end() {
        assert!(filter().contains_offensive("what the fuck"));
    }

    #[test]
    fn detects_word_against_punctuation() {
        assert!(filter().contains_offensive("what the fuck!"));
        assert!(filter().contains_offensive("(bullshit)"));
    }

    #[test]
    fn case_insensitive_uppercase() {
        assert!(filter().contains_offensive("THIS IS SHIT"));
    }

    #[test]
    fn case_insensitive_mixed() {
        assert!(filter().contains_offensive("This Is Shit"));
    }

    // === No false positives on substrings ===

    #[test]
    fn safe_peacock_not_cock() {
        assert!(!filter().contains_offensive("a peacock is a bird"));
    }

    #[test]
    fn safe_scrap_not_crap() {
        assert!(!filter().contains_offensive("scrap metal prices"));
    }

    #[test]
    fn safe_classic_sentence() {
        assert!(!filter().contains_offensive("this is classic"));
    }

    #[test]
    fn safe_mishit_not_shit() {
        assert!(!filter().contains_offensive("he mishit the ball"));
    }

    // === Short-input floor ===

    #[test]
    fn short_input_never_matches() {
        assert!(!filter().contains_offensive("sh"));
    }

    #[test]
    fn whitespace_padded_short_input_never_matches() {
        assert!(!filter().contains_offensive("   sh   "));
    }

    #[test]
    fn empty_text_is_clean() {
        assert!(!filter().contains_offensive(""));
    }

    #[test]
    fn safe_normal_sentence() {
        assert!(!filter().contains_offensive("have a great day"));
    }
}
