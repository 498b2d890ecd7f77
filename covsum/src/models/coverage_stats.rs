// src/models/coverage_stats.rs

/// Running line-coverage tally for one report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CoverageStats {
    pub total_lines: u64,
    pub covered_lines: u64,
}

impl CoverageStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_lines: 0,
            covered_lines: 0,
        }
    }

    /// Records one `DA:` hit count. Only strictly positive counts are covered.
    #[inline]
    pub fn record(&mut self, hits: i128) {
        self.total_lines = self.total_lines.saturating_add(1);
        if hits > 0 {
            self.covered_lines = self.covered_lines.saturating_add(1);
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_lines == 0
    }

    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn calculate_percentage(&self) -> f64 {
        if self.total_lines == 0 {
            return 0.0;
        }
        (self.covered_lines as f64 / self.total_lines as f64) * 100.0
    }
}
