//! Crawling pipeline
//!
//! The pipeline is strictly sequential: fetch the landing page, extract the
//! region links, then for each region extract the course links, then fetch
//! and parse each course page. Every fetch failure degrades to an empty
//! extraction; only a landing page with zero regions aborts the crawl.

pub mod coordinator;
pub mod detail;
pub mod fetcher;
pub mod links;

pub use coordinator::{crawl, Coordinator};
pub use detail::{parse_details, CourseDetail};
pub use fetcher::{build_http_client, fetch_page, USER_AGENT};
pub use links::{extract_links, Link};

/// A top-level geographic subdivision listed on the guide's landing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub url: String,
}

/// A link to one course's detail page, discovered on a region page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRef {
    pub name: String,
    pub url: String,
}
