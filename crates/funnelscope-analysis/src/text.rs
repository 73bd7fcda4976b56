//! Small string helpers shared by the analyzers.

/// Number of non-overlapping occurrences of `needle` in `haystack`.
///
/// An empty needle never matches.
pub(crate) fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Whitespace-delimited token count.
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub(crate) fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
