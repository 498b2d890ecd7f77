// src/models.rs
pub mod coverage_stats;
pub mod summary;

pub use coverage_stats::CoverageStats;
pub use summary::Summary;
