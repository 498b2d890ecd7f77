// src/models/summary.rs
use std::fmt;

use crate::models::CoverageStats;

/// Outcome of summarizing one report. Renders to the exact text printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// The report path does not exist.
    FileNotFound,
    /// The report exists but holds no `DA:` records.
    EmptyDataset,
    Coverage(CoverageStats),
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound => write!(f, "Coverage file not found."),
            Self::EmptyDataset => write!(f, "No lines to cover."),
            Self::Coverage(stats) => {
                writeln!(f, "Total Lines: {}", stats.total_lines)?;
                writeln!(f, "Covered Lines: {}", stats.covered_lines)?;
                write!(f, "Coverage: {:.2}%", stats.calculate_percentage())
            }
        }
    }
}

impl Summary {
    #[inline]
    #[must_use]
    pub const fn from_stats(stats: CoverageStats) -> Self {
        if stats.is_empty() {
            Self::EmptyDataset
        } else {
            Self::Coverage(stats)
        }
    }
}
