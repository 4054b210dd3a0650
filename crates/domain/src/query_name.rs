use std::fmt;

/// Why label decoding stopped before reaching the root label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStop {
    /// A length byte outside `1..=63` (this includes compression pointers).
    InvalidLabelLength(u8),
    /// The buffer ended before the name did.
    Truncated,
}

impl fmt::Display for ParseStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStop::InvalidLabelLength(len) => write!(f, "invalid label length {}", len),
            ParseStop::Truncated => write!(f, "truncated"),
        }
    }
}

/// Name decoded from the first question of a query.
///
/// Parsing is best-effort: a malformed or truncated name still yields the
/// labels read so far as [`QueryName::Partial`]. Only [`QueryName::Empty`]
/// means there is nothing to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryName {
    Complete(String),
    Partial { name: String, stop: ParseStop },
    Empty,
}

impl QueryName {
    pub fn as_str(&self) -> &str {
        match self {
            QueryName::Complete(name) | QueryName::Partial { name, .. } => name,
            QueryName::Empty => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, QueryName::Empty)
    }

    pub fn stop_reason(&self) -> Option<ParseStop> {
        match self {
            QueryName::Partial { stop, .. } => Some(*stop),
            _ => None,
        }
    }

    /// Returns the decoded name, or `None` for [`QueryName::Empty`].
    pub fn into_name(self) -> Option<String> {
        match self {
            QueryName::Complete(name) | QueryName::Partial { name, .. } => Some(name),
            QueryName::Empty => None,
        }
    }
}

impl fmt::Display for QueryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_name() {
        assert_eq!(QueryName::Empty.as_str(), "");
        assert!(QueryName::Empty.is_empty());
        assert_eq!(QueryName::Empty.into_name(), None);
    }

    #[test]
    fn test_partial_keeps_fragment_and_reason() {
        let name = QueryName::Partial {
            name: "example".to_string(),
            stop: ParseStop::InvalidLabelLength(64),
        };
        assert_eq!(name.as_str(), "example");
        assert!(!name.is_empty());
        assert_eq!(name.stop_reason(), Some(ParseStop::InvalidLabelLength(64)));
    }

    #[test]
    fn test_display_matches_name() {
        let name = QueryName::Complete("example.com".to_string());
        assert_eq!(name.to_string(), "example.com");
    }
}
