//! Report output
//!
//! The crawl's only persistent artifact is a single-sheet XLSX workbook
//! with one row per course and a fixed column order.

pub mod xlsx;

pub use xlsx::{write_workbook, COLUMNS};
