//! Crawl configuration
//!
//! All configuration comes from the command line; there is no config file.
//! `CrawlLimits::resolve` implements the mode precedence: `--all` beats
//! explicit caps, which beat the bounded test default.

use std::time::Duration;

/// Default landing page path under the base URL.
pub const GUIDE_PATH: &str = "/parcours-detours/guide-des-golfs";

/// Default delay between course-page requests, in seconds.
pub const DEFAULT_DELAY_SECS: f64 = 0.5;

/// Default output workbook path.
pub const DEFAULT_OUTPUT: &str = "golfs_france.xlsx";

/// Test-mode caps (the default when no mode flag is given).
const TEST_MAX_REGIONS: usize = 2;
const TEST_MAX_COURSES: usize = 5;

/// Per-run truncation limits and request pacing
#[derive(Debug, Clone)]
pub struct CrawlLimits {
    /// Maximum number of regions to visit; `None` means all of them
    pub max_regions: Option<usize>,

    /// Maximum number of courses to visit per region; `None` means all
    pub max_courses_per_region: Option<usize>,

    /// Pause inserted after every course-page fetch
    pub delay: Duration,
}

impl CrawlLimits {
    /// Resolves the CLI mode flags into concrete limits.
    ///
    /// Precedence: `--all` (unbounded) > explicit `--max-regions` /
    /// `--max-golfs` > the test default (2 regions, 5 courses per region).
    /// `--test` is an alias for passing no mode flag at all.
    pub fn resolve(
        all: bool,
        max_regions: Option<usize>,
        max_golfs: Option<usize>,
        delay_secs: f64,
    ) -> Self {
        let (max_regions, max_courses_per_region) = if all {
            (None, None)
        } else if max_regions.is_some() || max_golfs.is_some() {
            (max_regions, max_golfs)
        } else {
            (Some(TEST_MAX_REGIONS), Some(TEST_MAX_COURSES))
        };

        CrawlLimits {
            max_regions,
            max_courses_per_region,
            delay: Duration::from_secs_f64(delay_secs),
        }
    }

    /// True when neither cap is set (the `--all` mode).
    pub fn is_unbounded(&self) -> bool {
        self.max_regions.is_none() && self.max_courses_per_region.is_none()
    }
}

/// Full configuration for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Site root, e.g. `https://www.ffgolf.org`. Overridable so tests can
    /// point the crawler at a mock server.
    pub base_url: String,

    /// Truncation limits and request pacing
    pub limits: CrawlLimits,

    /// Output workbook path
    pub output_path: String,
}

impl CrawlConfig {
    pub fn new(base_url: impl Into<String>, limits: CrawlLimits, output_path: impl Into<String>) -> Self {
        CrawlConfig {
            base_url: base_url.into(),
            limits,
            output_path: output_path.into(),
        }
    }

    /// Absolute URL of the guide's landing page.
    pub fn landing_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), GUIDE_PATH)
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        CrawlConfig {
            base_url: "https://www.ffgolf.org".to_string(),
            limits: CrawlLimits::resolve(false, None, None, DEFAULT_DELAY_SECS),
            output_path: DEFAULT_OUTPUT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_mode_is_unbounded() {
        let limits = CrawlLimits::resolve(true, None, None, 0.5);
        assert_eq!(limits.max_regions, None);
        assert_eq!(limits.max_courses_per_region, None);
        assert!(limits.is_unbounded());
    }

    #[test]
    fn test_all_overrides_explicit_caps() {
        let limits = CrawlLimits::resolve(true, Some(3), Some(10), 0.5);
        assert!(limits.is_unbounded());
    }

    #[test]
    fn test_explicit_caps() {
        let limits = CrawlLimits::resolve(false, Some(3), Some(10), 0.5);
        assert_eq!(limits.max_regions, Some(3));
        assert_eq!(limits.max_courses_per_region, Some(10));
    }

    #[test]
    fn test_single_explicit_cap_leaves_other_unbounded() {
        let limits = CrawlLimits::resolve(false, Some(3), None, 0.5);
        assert_eq!(limits.max_regions, Some(3));
        assert_eq!(limits.max_courses_per_region, None);

        let limits = CrawlLimits::resolve(false, None, Some(10), 0.5);
        assert_eq!(limits.max_regions, None);
        assert_eq!(limits.max_courses_per_region, Some(10));
    }

    #[test]
    fn test_default_is_test_mode() {
        let limits = CrawlLimits::resolve(false, None, None, 0.5);
        assert_eq!(limits.max_regions, Some(2));
        assert_eq!(limits.max_courses_per_region, Some(5));
    }

    #[test]
    fn test_delay_is_carried() {
        let limits = CrawlLimits::resolve(false, None, None, 2.0);
        assert_eq!(limits.delay, Duration::from_secs(2));
    }

    #[test]
    fn test_landing_url() {
        let config = CrawlConfig::default();
        assert_eq!(
            config.landing_url(),
            "https://www.ffgolf.org/parcours-detours/guide-des-golfs"
        );
    }

    #[test]
    fn test_landing_url_trailing_slash() {
        let config = CrawlConfig::new(
            "http://127.0.0.1:9999/",
            CrawlLimits::resolve(true, None, None, 0.0),
            "out.xlsx",
        );
        assert_eq!(
            config.landing_url(),
            "http://127.0.0.1:9999/parcours-detours/guide-des-golfs"
        );
    }
}
