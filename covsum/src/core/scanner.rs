// src/core/scanner.rs
pub mod record;
#[cfg(test)]
pub mod test_utils;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Result, ScanError};
use crate::models::{CoverageStats, Summary};
use self::record::{LineRecord, classify_line, parse_hit_count, split_lines};

/// Summarizes the LCOV report at `path`.
///
/// A missing path is not an error: it yields [`Summary::FileNotFound`]. A
/// report without any `DA:` records yields [`Summary::EmptyDataset`].
///
/// # Errors
///
/// This function may return an error if:
/// * A `DA:` record carries a hit count that is not an integer
/// * The file exists but cannot be opened or read as UTF-8 text
#[inline]
pub fn summarize(path: &Path) -> Result<Summary> {
    if !path.exists() {
        debug!(path = %path.display(), "coverage file missing");
        return Ok(Summary::FileNotFound);
    }

    let stats = scan_report(path)?;
    Ok(Summary::from_stats(stats))
}

/// Tallies the `DA:` records of the report at `path` in a single pass.
///
/// The file handle lives only for the duration of the scan.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened
/// * A read fails part way through the file
/// * A `DA:` record carries a hit count that is not an integer
#[inline]
pub fn scan_report(path: &Path) -> Result<CoverageStats> {
    let file = File::open(path).map_err(|e| ScanError::io(path, e))?;
    let stats = scan_reader(BufReader::new(file), path)?;

    debug!(
        path = %path.display(),
        total = stats.total_lines,
        covered = stats.covered_lines,
        "scanned coverage file"
    );
    Ok(stats)
}

/// Tallies `DA:` records from any buffered reader. `source` only labels errors.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`.
///
/// # Errors
///
/// Same as [`scan_report`], minus the open.
pub fn scan_reader<R: BufRead>(mut reader: R, source: &Path) -> Result<CoverageStats> {
    let mut stats = CoverageStats::new();
    let mut chunk = Vec::new();
    let mut line_number: usize = 0;

    loop {
        chunk.clear();
        let read = reader
            .read_until(b'\n', &mut chunk)
            .map_err(|e| ScanError::io(source, e))?;
        if read == 0 {
            break;
        }
        let text = std::str::from_utf8(&chunk)
            .map_err(|e| ScanError::io(source, io::Error::new(io::ErrorKind::InvalidData, e)))?;

        for line in split_lines(text) {
            line_number = line_number.saturating_add(1);

            match classify_line(line) {
                LineRecord::Other => {}
                LineRecord::Incomplete => {
                    trace!(line = line_number, "skipping DA record without hit count");
                }
                LineRecord::Hits(field) => {
                    let hits = parse_hit_count(field).map_err(|e| ScanError::MalformedRecord {
                        line: line_number,
                        field: field.to_owned(),
                        source: e,
                    })?;
                    stats.record(hits);
                }
            }
        }
    }

    Ok(stats)
}
