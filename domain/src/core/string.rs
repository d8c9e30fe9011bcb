//! String utilities for the domain layer.

/// Keep at most `max_chars` characters of `s`.
///
/// Counts Unicode scalar values rather than bytes, so multi-byte input is
/// never split mid-character.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => s[..end].to_string(),
        None => s.to_string(),
    }
}

/// First candidate that is a non-empty string after trimming.
pub fn first_non_blank<'a>(
    candidates: impl IntoIterator<Item = Option<&'a str>>,
) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_ascii() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello world", 5), "hello");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("ラーメン屋さん", 4), "ラーメン");
        assert_eq!(truncate_chars("🍕🍣🌮", 2), "🍕🍣");
    }

    #[test]
    fn test_first_non_blank() {
        assert_eq!(first_non_blank([Some("  "), None, Some(" Tacos ")]), Some("Tacos"));
        assert_eq!(first_non_blank([None, Some("")]), None);
    }
}
