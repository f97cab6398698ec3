//! Crawl coordinator - two-level traversal orchestration
//!
//! Drives landing page → regions → courses → details, sequentially and
//! with a fixed pause after every course-page fetch. The only crawl-level
//! failure is a landing page with zero regions; everything below that
//! degrades to empty extractions and keeps going.

use crate::config::{CrawlConfig, GUIDE_PATH};
use crate::crawler::detail::{parse_details, CourseDetail};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::links::extract_links;
use crate::crawler::{CourseRef, Region};
use crate::ScoutError;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use url::Url;

// Region pages sit exactly one path segment below the guide root; course
// pages sit below a region. Utility links (login, search) show up in the
// course listings and are excluded by raw-href substring.
static REGION_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("{}/[^/]+$", GUIDE_PATH)).unwrap());
static COURSE_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("{}/[^/]+", GUIDE_PATH)).unwrap());
const EXCLUDED_HREFS: &[&str] = &["login", "search"];

/// Main crawl coordinator
pub struct Coordinator {
    config: CrawlConfig,
    client: Client,
}

impl Coordinator {
    /// Creates a coordinator, building the shared HTTP client
    pub fn new(config: CrawlConfig) -> crate::Result<Self> {
        let client = build_http_client()?;
        Ok(Coordinator { config, client })
    }

    /// Runs the full crawl and returns the accumulated records
    ///
    /// Traversal order is document order at both levels, so the result is
    /// deterministic for a given site state. Truncation limits are
    /// "process at most N", checked after each item.
    pub async fn run(self) -> crate::Result<Vec<CourseDetail>> {
        let limits = &self.config.limits;
        let mut records: Vec<CourseDetail> = Vec::new();

        tracing::info!("fetching region list...");
        let regions = self.fetch_regions().await?;
        tracing::info!("{} regions found", regions.len());

        let region_total = regions.len();
        for (j, region) in regions.iter().enumerate() {
            tracing::info!("[{}/{}] crawling region: {}", j + 1, region_total, region.name);

            let courses = self.fetch_courses(&region.url).await;
            tracing::info!("{} courses found in {}", courses.len(), region.name);

            let course_total = courses.len();
            for (i, course) in courses.iter().enumerate() {
                let detail = self.fetch_detail(region, course).await;
                tracing::info!(
                    "[{}/{}] extracted: {}",
                    i + 1,
                    course_total,
                    detail.name.as_deref().unwrap_or(&course.name)
                );
                records.push(detail);

                tokio::time::sleep(limits.delay).await;

                if let Some(max) = limits.max_courses_per_region {
                    if i + 1 >= max {
                        break;
                    }
                }
            }

            if let Some(max) = limits.max_regions {
                if j + 1 >= max {
                    break;
                }
            }
        }

        tracing::info!("total: {} courses extracted", records.len());
        Ok(records)
    }

    /// Extracts the region list from the guide's landing page
    ///
    /// An empty region list is the one condition treated as a crawl-level
    /// failure: it means the landing page is gone or has changed shape,
    /// and nothing below it can be reached.
    async fn fetch_regions(&self) -> crate::Result<Vec<Region>> {
        let landing_url = self.config.landing_url();
        let base = Url::parse(&self.config.base_url)?;

        let regions = match fetch_page(&self.client, &landing_url).await {
            Some(body) => extract_links(&body, &REGION_PATH_RE, &base, &[])
                .into_iter()
                .map(|link| Region {
                    name: link.text,
                    url: link.url,
                })
                .collect(),
            None => Vec::new(),
        };

        if regions.is_empty() {
            tracing::warn!("no regions found; is the base URL correct?");
            return Err(ScoutError::NoRegions { url: landing_url });
        }
        Ok(regions)
    }

    /// Extracts the course listing from one region page
    ///
    /// A fetch failure or an empty listing both yield an empty vector; the
    /// crawl simply moves on to the next region.
    async fn fetch_courses(&self, region_url: &str) -> Vec<CourseRef> {
        let base = match Url::parse(&self.config.base_url) {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!("invalid base URL {}: {}", self.config.base_url, e);
                return Vec::new();
            }
        };

        match fetch_page(&self.client, region_url).await {
            Some(body) => extract_links(&body, &COURSE_PATH_RE, &base, EXCLUDED_HREFS)
                .into_iter()
                .map(|link| CourseRef {
                    name: link.text,
                    url: link.url,
                })
                .collect(),
            None => Vec::new(),
        }
    }

    /// Fetches and parses one course page
    ///
    /// A failed fetch still produces a record: the listing name and source
    /// URL are kept, every parsed field stays absent. This keeps output
    /// row counts stable across transient failures.
    async fn fetch_detail(&self, region: &Region, course: &CourseRef) -> CourseDetail {
        let mut detail = match fetch_page(&self.client, &course.url).await {
            Some(body) => {
                let (detail, missing) = parse_details(&body, &course.url);
                if !missing.is_empty() {
                    tracing::warn!("missing fields for {}: {}", course.url, missing.join(", "));
                }
                detail
            }
            None => CourseDetail::unfetched(&course.name, &course.url),
        };
        detail.region_name = region.name.clone();
        detail
    }
}

/// Runs a full crawl with the given configuration
pub async fn crawl(config: CrawlConfig) -> crate::Result<Vec<CourseDetail>> {
    Coordinator::new(config)?.run().await
}
