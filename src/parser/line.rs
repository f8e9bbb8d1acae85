use crate::types::{Record, COMMENT_MARKER};

/// Classification of one trimmed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after trimming
    Blank,
    /// Starts with `#`
    Comment,
    /// Split into at least six fields
    Data(Record<'a>),
    /// Candidate line with fewer than six fields, dropped without error
    Short,
}

impl LineClass<'_> {
    /// Blank and comment lines are skipped before any splitting happens
    pub fn is_skip(&self) -> bool {
        matches!(self, LineClass::Blank | LineClass::Comment)
    }
}

/// Classify a line that has already been trimmed of surrounding whitespace
pub fn classify_line(line: &str) -> LineClass<'_> {
    if line.is_empty() {
        return LineClass::Blank;
    }
    if line.starts_with(COMMENT_MARKER) {
        return LineClass::Comment;
    }
    match Record::from_line(line) {
        Some(record) => LineClass::Data(record),
        None => LineClass::Short,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_are_skipped() {
        assert_eq!(classify_line(""), LineClass::Blank);
        assert_eq!(classify_line("# comment"), LineClass::Comment);
        assert_eq!(classify_line("#1;2;3;4;5;6"), LineClass::Comment);
        assert!(classify_line("").is_skip());
        assert!(classify_line("#").is_skip());
    }

    #[test]
    fn test_short_line_is_dropped() {
        assert_eq!(classify_line("1;2;3;4"), LineClass::Short);
        assert_eq!(classify_line("just text"), LineClass::Short);
        assert!(!classify_line("1;2;3;4").is_skip());
    }

    #[test]
    fn test_data_line() {
        match classify_line("100;012.340;-003.5;7.00;0;1") {
            LineClass::Data(record) => assert_eq!(record.len(), 6),
            other => panic!("expected data line, got {other:?}"),
        }
    }

    #[test]
    fn test_hash_inside_line_is_not_a_comment() {
        assert!(matches!(classify_line("1;2;3;4;5;#6"), LineClass::Data(_)));
    }
}
