/// Parse a positional identifier from a path segment.
///
/// Identifiers are zero-based positions in the catalog sequence. Only plain
/// decimal non-negative integers are accepted (surrounding whitespace is
/// tolerated); bounds are checked by the store, not here.
pub fn parse_index(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<usize>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_integers() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("42"), Some(42));
        assert_eq!(parse_index(" 3 "), Some(3));
    }

    #[test]
    fn rejects_negative_and_fractional() {
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("2.5"), None);
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(parse_index("abc"), None);
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("1x"), None);
    }
}
