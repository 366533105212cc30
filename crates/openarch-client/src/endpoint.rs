//! Request URL construction
//!
//! Search parameters are interpolated as given; callers pre-encode names
//! that need escaping.

use openarch_core::{ApiConfig, ArchiveError, Result};

/// URL of one search results page starting at `start`
pub fn search_url(
    config: &ApiConfig,
    person_name: &str,
    before: i32,
    after: i32,
    relation_type: &str,
    start: usize,
) -> String {
    format!(
        "{}name={}+{}-{}&relationtype={}&lang={}&number_show={}&start={}",
        config.search_endpoint(),
        person_name,
        after,
        before,
        relation_type,
        config.lang,
        config.page_size,
        start
    )
}

/// Document endpoint for a record URL
///
/// Landing pages (`.../show.php?archive=...&identifier=...`) keep their
/// query string and get the API base substituted. Anything else is read as
/// `<site>/<archive>:<identifier>`.
pub fn document_url(config: &ApiConfig, url: &str) -> Result<String> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ArchiveError::EmptyUrl);
    }

    if url.find("show.php").is_some_and(|pos| pos > 0) {
        return Ok(url.replace(&config.landing_page_prefix(), &config.show_endpoint()));
    }

    let pid = url.replace(&config.site_url, "");
    let mut parts = pid.split(':');
    let archive = parts.next().filter(|s| !s.is_empty());
    let identifier = parts.next().filter(|s| !s.is_empty());

    match (archive, identifier) {
        (Some(archive), Some(identifier)) => Ok(format!(
            "{}archive={}&identifier={}",
            config.show_endpoint(),
            archive,
            identifier
        )),
        _ => Err(ArchiveError::InvalidUrl(url.to_string())),
    }
}
