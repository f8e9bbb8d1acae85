#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Column names written as the first row of every output file
pub const HEADER_FIELDS: [&str; 6] = ["Time_ms", "PITCH", "ROLL", "YAW", "Dizziness", "Nystagmus"];

/// Minimum number of `;`-separated parts a line needs to become a record
pub const MIN_FIELDS: usize = HEADER_FIELDS.len();

/// Field separator for both input and output
pub const FIELD_SEPARATOR: char = ';';

/// Marker that turns an input line into a comment
pub const COMMENT_MARKER: char = '#';

/// Which rewrite rule applies to a field, decided by its column index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColumnRole {
    /// Column 0, `Time_ms`: integer text
    Time,
    /// Columns 1-3, `PITCH`/`ROLL`/`YAW`: decimal text
    Angle,
    /// Columns 4 and up: flags and any trailing extras, copied verbatim
    Passthrough,
}

impl ColumnRole {
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => ColumnRole::Time,
            1..=3 => ColumnRole::Angle,
            _ => ColumnRole::Passthrough,
        }
    }
}

/// One accepted data line, split into its fields
///
/// Holds at least [`MIN_FIELDS`] fields. Fields past the sixth are kept so
/// they can be written back out untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    /// Split a trimmed line into a record, or `None` for short lines
    pub fn from_line(line: &'a str) -> Option<Self> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() < MIN_FIELDS {
            return None;
        }
        Some(Self { fields })
    }

    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields together with the role of their column
    pub fn iter_with_roles(&self) -> impl Iterator<Item = (ColumnRole, &'a str)> + '_ {
        self.fields
            .iter()
            .enumerate()
            .map(|(index, field)| (ColumnRole::for_index(index), *field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_roles() {
        assert_eq!(ColumnRole::for_index(0), ColumnRole::Time);
        assert_eq!(ColumnRole::for_index(1), ColumnRole::Angle);
        assert_eq!(ColumnRole::for_index(3), ColumnRole::Angle);
        assert_eq!(ColumnRole::for_index(4), ColumnRole::Passthrough);
        assert_eq!(ColumnRole::for_index(5), ColumnRole::Passthrough);
        assert_eq!(ColumnRole::for_index(42), ColumnRole::Passthrough);
    }

    #[test]
    fn test_record_requires_six_fields() {
        assert!(Record::from_line("1;2;3;4").is_none());
        assert!(Record::from_line("1;2;3;4;5").is_none());

        let record = Record::from_line("1;2;3;4;5;6").unwrap();
        assert_eq!(record.len(), 6);
        assert_eq!(record.fields(), &["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_record_keeps_extra_fields() {
        let record = Record::from_line("1;2;3;4;5;6;extra;;").unwrap();
        assert_eq!(record.len(), 9);
        assert_eq!(record.fields()[6], "extra");
        assert_eq!(record.fields()[8], "");
    }

    #[test]
    fn test_empty_fields_still_count() {
        // Five separators give six (empty) parts
        let record = Record::from_line(";;;;;").unwrap();
        assert_eq!(record.len(), 6);
        assert!(record.fields().iter().all(|f| f.is_empty()));
    }

    #[test]
    fn test_iter_with_roles() {
        let record = Record::from_line("10;1.5;2.5;3.5;0;1;x").unwrap();
        let roles: Vec<ColumnRole> = record.iter_with_roles().map(|(role, _)| role).collect();
        assert_eq!(
            roles,
            vec![
                ColumnRole::Time,
                ColumnRole::Angle,
                ColumnRole::Angle,
                ColumnRole::Angle,
                ColumnRole::Passthrough,
                ColumnRole::Passthrough,
                ColumnRole::Passthrough,
            ]
        );
    }
}
