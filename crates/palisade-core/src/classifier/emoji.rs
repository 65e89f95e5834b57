//! Emoji denylist filter.
//!
//! Scans raw input for denylisted emoji sequences and produces the sanitized
//! copy of the text that the external moderation service receives.

use tracing::debug;

/// Emoji sequences that flag content as offensive.
///
/// Matched as exact substrings: multi-codepoint entries (ZWJ sequences,
/// variation selectors, skin-tone modifiers) only hit when the full sequence
/// is present. Sanitization removes entries in list order.
const OFFENSIVE_EMOJI: &[&str] = &[
    "🍆", "🍑", "🍌", "🌮", "🍒", "💦", "👅", "👄", "👙", "🩲", "🩳", "💋", "👠", "👢", "👗",
    "🤤", "😏", "😈", "😩", "🥵", "🥶", "🙈", "👁️‍🗨️",
    "🖕", "🤬", "😡", "🤢", "🤮", "😤", "💩", "🙄", "😒", "😠", "👎", "🤯", "😾", "😿", "👿",
    "🔪", "🩸", "⚰️", "⚱️", "💣", "🔫", "🧨", "🧠", "🪓", "🧷", "🧯", "🗡️", "💀", "☠️", "🦴",
    "🍺", "🍻", "🍷", "🍸", "🍹", "🥂", "🥃", "🚬", "💉", "💊", "🪩", "🧪", "🧴", "🍾", "🔞",
    "🙃", "😹", "🤡", "😼", "🐷", "🐽", "👹", "👺", "🤠", "🤪", "🫦",
    "🏴‍☠️", "🚫", "☢️", "☣️", "⚠️", "⛔", "🏴", "🪖", "🪆", "🏹", "🕋", "⛪", "🕍", "🕉️", "✡️",
    "☪️", "✝️", "🔯",
    "🧑‍🦽", "🧑‍🦯", "🧑‍🦼", "🧍‍♂️", "🧍‍♀️", "🤰", "🤱", "🧓", "👵", "👴",
    "🏻", "🏼", "🏽", "🏾", "🏿",
];

/// Substring filter over the emoji denylist.
///
/// Also produces the sanitized text: every denylisted sequence removed,
/// whitespace runs collapsed to single spaces, ends trimmed.
pub struct EmojiFilter {
    denylist: &'static [&'static str],
}

impl EmojiFilter {
    /// Creates a filter over the built-in denylist.
    pub fn new() -> Self {
        Self {
            denylist: OFFENSIVE_EMOJI,
        }
    }

    /// Returns true iff at least one denylisted emoji sequence occurs
    /// anywhere in `text`. Empty input never matches.
    pub fn contains_offensive(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        for emoji in self.denylist {
            if text.contains(emoji) {
                debug!(emoji = %emoji, "Offensive emoji detected");
                return true;
            }
        }
        false
    }

    /// Removes every occurrence of every denylisted sequence, then collapses
    /// consecutive whitespace into single spaces and trims the ends.
    pub fn sanitize(&self, text: &str) -> String {
        let mut sanitized = text.to_string();
        for emoji in self.denylist {
            if sanitized.contains(emoji) {
                sanitized = sanitized.replace(emoji, "");
            }
        }
        sanitized.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for EmojiFilter {
    fn default() -> Self {
        Self::new()
    }
}
