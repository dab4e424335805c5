use crate::types::{Path, PathSegment};
use crate::DotPathError;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Parse a dot-path into segments.
///
/// Empty paths and paths containing an empty segment (`"a..b"`, `".a"`,
/// `"a."`) are rejected.
pub fn parse_path(path: &str) -> Result<Path, DotPathError> {
    if path.is_empty() {
        return Err(DotPathError::InvalidArgument(
            "path must not be empty".to_string(),
        ));
    }
    let mut segments = Vec::new();
    for raw in path.split(SEPARATOR) {
        if raw.is_empty() {
            return Err(DotPathError::InvalidArgument(format!(
                "path '{path}' contains an empty segment"
            )));
        }
        segments.push(PathSegment::new(raw));
    }
    Ok(segments)
}

/// Format segments back into a dot-path.
pub fn format_path(path: &[PathSegment]) -> String {
    let mut out = String::new();
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(segment.key());
    }
    out
}

/// Check if a string consists only of ASCII digits.
pub fn is_integer(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path() {
        let path = parse_path("user.address.city").unwrap();
        let keys: Vec<&str> = path.iter().map(|s| s.key()).collect();
        assert_eq!(keys, vec!["user", "address", "city"]);
    }

    #[test]
    fn test_parse_path_with_index() {
        let path = parse_path("items.1.n").unwrap();
        assert_eq!(path[1].index(), Some(1));
        assert_eq!(path[2].index(), None);
    }

    #[test]
    fn test_parse_empty_path() {
        assert!(matches!(
            parse_path(""),
            Err(DotPathError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_empty_segments() {
        for path in ["a..b", ".a", "a.", "."] {
            assert!(parse_path(path).is_err(), "{path} should be rejected");
        }
    }

    #[test]
    fn test_format_roundtrip() {
        for path in ["a", "a.b", "items.0.name", "x.10.y.3"] {
            assert_eq!(format_path(&parse_path(path).unwrap()), path);
        }
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer("0"));
        assert!(is_integer("123"));
        assert!(is_integer("01"));
        assert!(!is_integer("-1"));
        assert!(!is_integer("+1"));
        assert!(!is_integer("1.5"));
        assert!(!is_integer(""));
        assert!(!is_integer("abc"));
    }
}
