//! Course detail parsing
//!
//! Course pages publish their contact block as label-prefixed free text
//! ("adresse :", "téléphone :", "e-mail :", "site web :"). Extraction runs
//! four independent label-anchored scans over the flattened page text; a
//! field that fails to match is reported as missing, never as an error.
//!
//! The address block is the fiddly one: it spans several lines, so its
//! capture runs from the label up to the next known label (or end of text),
//! gets whitespace-collapsed, and is then decomposed into street / postal
//! code / city. When decomposition fails the whole collapsed string is kept
//! as the street address rather than losing it.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

// The regex crate has no lookahead, so the address terminator is a
// consumed non-capturing alternation instead of `(?=...)`.
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)adresse\s*:\s*(.+?)(?:téléphone|e-mail|site web|$)").unwrap()
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)téléphone\s*:\s*([^\n]+)").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)e-mail\s*:\s*([^\n]+)").unwrap());
static WEBSITE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)site web\s*:\s*([^\n]+)").unwrap());

// street, exactly-5-digit postal code, then an uppercase city name
// (accented uppercase, spaces and hyphens allowed) anchored to the end.
static STREET_POSTAL_CITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s+(\d{5})\s+([A-ZÀ-Ÿ][A-ZÀ-Ÿ\s\-]+)$").unwrap());

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Fully parsed contact record for one course
///
/// `None` means "not found on the page"; an absent field never blocks the
/// record. `source_url` is the page the record came from and is always
/// populated; `region_name` is attached by the coordinator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseDetail {
    pub region_name: String,
    pub name: Option<String>,
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub source_url: String,
}

impl CourseDetail {
    /// An all-absent record for a course whose page could not be fetched
    pub fn unfetched(listing_name: &str, source_url: &str) -> Self {
        CourseDetail {
            name: Some(listing_name.to_string()).filter(|n| !n.is_empty()),
            source_url: source_url.to_string(),
            ..Default::default()
        }
    }
}

/// Parses one course page into a detail record
///
/// Returns the record plus the labels of the fields that could not be
/// found, for diagnostics. All scans are independent; a page where every
/// scan fails still yields a valid record.
pub fn parse_details(html: &str, source_url: &str) -> (CourseDetail, Vec<&'static str>) {
    let document = Html::parse_document(html);

    let mut detail = CourseDetail {
        source_url: source_url.to_string(),
        ..Default::default()
    };
    let mut missing = Vec::new();

    detail.name = extract_heading(&document);

    let page_text: String = document.root_element().text().collect();

    match ADDRESS_RE.captures(&page_text) {
        Some(caps) => {
            let collapsed = collapse_whitespace(&caps[1]);
            match STREET_POSTAL_CITY_RE.captures(&collapsed) {
                Some(parts) => {
                    detail.street_address = Some(parts[1].trim().to_string());
                    detail.postal_code = Some(parts[2].to_string());
                    detail.city = Some(parts[3].trim().to_string());
                }
                None => {
                    // Partial structure beats a dropped field.
                    detail.street_address = Some(collapsed);
                }
            }
        }
        None => missing.push("adresse"),
    }

    detail.phone = capture_line(&PHONE_RE, &page_text);
    if detail.phone.is_none() {
        missing.push("téléphone");
    }

    detail.email = capture_line(&EMAIL_RE, &page_text);
    if detail.email.is_none() {
        missing.push("e-mail");
    }

    detail.website = capture_line(&WEBSITE_RE, &page_text);
    if detail.website.is_none() {
        missing.push("site web");
    }

    (detail, missing)
}

/// Text of the first `<h1>` on the page, trimmed
fn extract_heading(document: &Html) -> Option<String> {
    let selector = Selector::parse("h1").ok()?;
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Runs a single-line label scan and trims the capture
fn capture_line(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Collapses every run of whitespace (including newlines) to one space
fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> String {
        format!("<html><head><title>t</title></head><body>{}</body></html>", body)
    }

    #[test]
    fn test_full_contact_block() {
        let html = page(
            r#"<h1>Golf de Rennes</h1>
            <div>
              adresse : 12 rue du Golf
              75001 PARIS
              téléphone : 01 23 45 67 89
              e-mail : contact@golf-rennes.fr
              site web : www.golf-rennes.fr
            </div>"#,
        );
        let (detail, missing) = parse_details(&html, "https://example.com/golf");

        assert_eq!(detail.name.as_deref(), Some("Golf de Rennes"));
        assert_eq!(detail.street_address.as_deref(), Some("12 rue du Golf"));
        assert_eq!(detail.postal_code.as_deref(), Some("75001"));
        assert_eq!(detail.city.as_deref(), Some("PARIS"));
        assert_eq!(detail.phone.as_deref(), Some("01 23 45 67 89"));
        assert_eq!(detail.email.as_deref(), Some("contact@golf-rennes.fr"));
        assert_eq!(detail.website.as_deref(), Some("www.golf-rennes.fr"));
        assert_eq!(detail.source_url, "https://example.com/golf");
        assert!(missing.is_empty());
    }

    #[test]
    fn test_address_decomposition() {
        let html = page("adresse : 12 rue du Golf 75001 PARIS");
        let (detail, _) = parse_details(&html, "u");
        assert_eq!(detail.street_address.as_deref(), Some("12 rue du Golf"));
        assert_eq!(detail.postal_code.as_deref(), Some("75001"));
        assert_eq!(detail.city.as_deref(), Some("PARIS"));
    }

    #[test]
    fn test_address_without_postal_code_kept_verbatim() {
        let html = page("adresse : Lieu-dit Les Bois");
        let (detail, _) = parse_details(&html, "u");
        assert_eq!(detail.street_address.as_deref(), Some("Lieu-dit Les Bois"));
        assert_eq!(detail.postal_code, None);
        assert_eq!(detail.city, None);
    }

    #[test]
    fn test_address_whitespace_is_collapsed_before_decomposition() {
        let html = page("adresse :\n\t 12 rue\t du Golf\n   75001\n PARIS\n");
        let (detail, _) = parse_details(&html, "u");
        assert_eq!(detail.street_address.as_deref(), Some("12 rue du Golf"));
        assert_eq!(detail.postal_code.as_deref(), Some("75001"));
        assert_eq!(detail.city.as_deref(), Some("PARIS"));
    }

    #[test]
    fn test_accented_uppercase_city() {
        let html = page("adresse : 3 allée Verte 81000 CASTRES-MAZAMÈS");
        let (detail, _) = parse_details(&html, "u");
        assert_eq!(detail.city.as_deref(), Some("CASTRES-MAZAMÈS"));
    }

    #[test]
    fn test_address_stops_at_next_label() {
        let html = page("adresse : 12 rue du Golf 75001 PARIS\ntéléphone : 01 02 03 04 05");
        let (detail, _) = parse_details(&html, "u");
        assert_eq!(detail.street_address.as_deref(), Some("12 rue du Golf"));
        assert_eq!(detail.phone.as_deref(), Some("01 02 03 04 05"));
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let html = page("Adresse : 1 rue A 75001 PARIS\nTéléphone : 01\nE-mail : a@b.fr\nSite Web : b.fr");
        let (detail, missing) = parse_details(&html, "u");
        assert!(missing.is_empty());
        assert_eq!(detail.phone.as_deref(), Some("01"));
        assert_eq!(detail.email.as_deref(), Some("a@b.fr"));
        assert_eq!(detail.website.as_deref(), Some("b.fr"));
    }

    #[test]
    fn test_missing_fields_are_reported_independently() {
        let html = page("<h1>Golf Sans Infos</h1>\ntéléphone : 01 02 03 04 05");
        let (detail, missing) = parse_details(&html, "u");
        assert_eq!(detail.phone.as_deref(), Some("01 02 03 04 05"));
        assert_eq!(missing, vec!["adresse", "e-mail", "site web"]);
    }

    #[test]
    fn test_empty_page_is_still_a_valid_record() {
        let html = page("");
        let (detail, missing) = parse_details(&html, "https://example.com/x");
        assert_eq!(detail.name, None);
        assert_eq!(detail.street_address, None);
        assert_eq!(detail.source_url, "https://example.com/x");
        assert_eq!(missing, vec!["adresse", "téléphone", "e-mail", "site web"]);
    }

    #[test]
    fn test_unfetched_record() {
        let detail = CourseDetail::unfetched("Golf de Rennes", "https://example.com/golf");
        assert_eq!(detail.name.as_deref(), Some("Golf de Rennes"));
        assert_eq!(detail.source_url, "https://example.com/golf");
        assert_eq!(detail.phone, None);
        assert_eq!(detail.street_address, None);
    }

    #[test]
    fn test_heading_comes_from_first_h1() {
        let html = page("<h1>Premier</h1><h1>Second</h1>");
        let (detail, _) = parse_details(&html, "u");
        assert_eq!(detail.name.as_deref(), Some("Premier"));
    }
}
