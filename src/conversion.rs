//! Field rewrite rules for telemetry rows
//!
//! All rules work on the field text and never parse it into a number, so
//! long digit sequences survive unchanged and odd-looking tokens are passed
//! through instead of rejected.

use crate::types::{ColumnRole, Record};
use std::borrow::Cow;

/// Strip leading zeros from integer text
///
/// Removes one `'0'` at a time while more than one character remains and the
/// text does not start with `"0."`, so `"000"` becomes `"0"` and `"007"`
/// becomes `"7"`.
pub fn strip_leading_zeros_integer(text: &str) -> &str {
    let mut result = text;
    while result.len() > 1 && result.starts_with('0') && !result.starts_with("0.") {
        result = &result[1..];
    }
    result
}

/// Strip leading zeros from the integer part of decimal text
///
/// The sign and the whole fractional part (separator included) are kept:
/// `"-00,5"` becomes `"-0,5"`, `"001,23"` becomes `"1,23"`. Either `.` or `,`
/// is accepted as separator, `.` taking precedence.
pub fn strip_leading_zeros_decimal(text: &str) -> String {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let separator = body.find('.').or_else(|| body.find(','));
    let stripped = match separator {
        Some(sep) if sep > 0 => {
            let (mut integer_part, fraction) = body.split_at(sep);
            while integer_part.len() > 1 && integer_part.starts_with('0') {
                integer_part = &integer_part[1..];
            }
            format!("{integer_part}{fraction}")
        }
        // ",5" has no integer digits to strip
        Some(_) => body.to_string(),
        None => strip_leading_zeros_integer(body).to_string(),
    };

    if negative {
        format!("-{stripped}")
    } else {
        stripped
    }
}

/// Rewrite decimal text for a comma-decimal locale
///
/// Every `.` becomes `,`, then leading zeros of the integer part are removed.
/// Applying it to its own output changes nothing.
pub fn normalize_decimal(text: &str) -> String {
    strip_leading_zeros_decimal(&text.replace('.', ","))
}

/// Apply the rewrite rule for a column role to one field
pub fn transform_field(role: ColumnRole, field: &str) -> Cow<'_, str> {
    match role {
        ColumnRole::Time => Cow::Borrowed(strip_leading_zeros_integer(field)),
        ColumnRole::Angle => Cow::Owned(normalize_decimal(field)),
        ColumnRole::Passthrough => Cow::Borrowed(field),
    }
}

/// Transform every field of a record in column order
pub fn transform_record<'a>(record: &Record<'a>) -> Vec<Cow<'a, str>> {
    record
        .iter_with_roles()
        .map(|(role, field)| transform_field(role, field))
        .collect()
}
