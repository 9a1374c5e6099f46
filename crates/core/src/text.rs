//! Query normalization shared by every matcher

/// Byte-order mark, stripped along with whitespace
const BOM: char = '\u{feff}';

/// Lower-case and trim a raw query.
///
/// No tokenization happens here; matchers work on plain substring
/// containment over the normalized text.
pub fn normalize(query: &str) -> String {
    query
        .trim_matches(|c: char| c.is_whitespace() || c == BOM)
        .to_lowercase()
}

/// Length of a trigger phrase as the scorer counts it (characters, not bytes).
pub fn phrase_len(phrase: &str) -> usize {
    phrase.chars().count()
}
