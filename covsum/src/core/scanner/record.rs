// src/core/scanner/record.rs
use std::borrow::Cow;
use std::num::{IntErrorKind, ParseIntError};

/// LCOV line-data record marker.
pub const LINE_DATA_PREFIX: &str = "DA:";

/// How a single report line contributes to the tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRecord<'a> {
    /// Any record type other than `DA:`.
    Other,
    /// A `DA:` record with fewer than two comma-separated fields.
    Incomplete,
    /// The raw hit-count field of a `DA:` record.
    Hits(&'a str),
}

/// Classifies a raw report line.
///
/// The prefix is matched against the untrimmed line, so indented records are
/// not line data. Fields are split after trimming the line, and the hit-count
/// field itself is trimmed before it is handed back.
#[inline]
#[must_use]
pub fn classify_line(line: &str) -> LineRecord<'_> {
    if !line.starts_with(LINE_DATA_PREFIX) {
        return LineRecord::Other;
    }

    line.trim()
        .split(',')
        .nth(1)
        .map_or(LineRecord::Incomplete, |field| LineRecord::Hits(field.trim()))
}

/// Splits one `\n`-terminated chunk of a report into lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. The chunk's own terminator
/// does not produce an extra empty line.
#[inline]
pub fn split_lines(chunk: &str) -> impl Iterator<Item = &str> {
    let body = chunk
        .strip_suffix("\r\n")
        .or_else(|| chunk.strip_suffix('\n'))
        .or_else(|| chunk.strip_suffix('\r'))
        .unwrap_or(chunk);
    body.split('\r')
}

/// Parses a hit-count field as a base-10 integer.
///
/// Single underscores between digits are accepted as separators (`1_000`).
/// Counts beyond the `i128` range saturate, since only the sign matters.
///
/// # Errors
///
/// Returns the underlying parse error when the field is empty or not an integer.
#[inline]
pub fn parse_hit_count(field: &str) -> Result<i128, ParseIntError> {
    match strip_digit_separators(field).parse::<i128>() {
        Ok(hits) => Ok(hits),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i128::MAX),
            IntErrorKind::NegOverflow => Ok(i128::MIN),
            _ => Err(e),
        },
    }
}

/// Drops `_` separators when every one of them sits between two digits.
/// Anything else is left untouched so the parse rejects it.
fn strip_digit_separators(field: &str) -> Cow<'_, str> {
    if !field.contains('_') {
        return Cow::Borrowed(field);
    }

    let bytes = field.as_bytes();
    let well_placed = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i.checked_sub(1)
                .and_then(|prev| bytes.get(prev))
                .is_some_and(u8::is_ascii_digit)
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });

    if well_placed {
        Cow::Owned(field.replace('_', ""))
    } else {
        Cow::Borrowed(field)
    }
}
