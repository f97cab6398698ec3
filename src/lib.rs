//! Fairway-Scout: a directory scraper for the French golf federation's
//! course guide.
//!
//! This crate crawls the ffgolf "guide des golfs" to enumerate regions,
//! the courses listed in each region, and the contact details published on
//! each course page, then exports the aggregate as an XLSX workbook.

pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for Fairway-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("no regions found on the landing page at {url}")]
    NoRegions { url: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Fairway-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

// Re-export commonly used types
pub use config::{CrawlConfig, CrawlLimits};
pub use crawler::{crawl, CourseDetail, CourseRef, Region};
