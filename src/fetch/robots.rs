//! Auxiliary resource probes.
//!
//! Independent checks for `/robots.txt` and the sitemap, each on the
//! short-timeout probe client. Absence is a valid, scoreable outcome, never
//! a pipeline error.

use reqwest::StatusCode;
use url::Url;

use crate::report::{RobotsTxtSignal, SitemapSignal};

/// Sitemap locations tried in order, stopping at the first HTTP 200.
const SITEMAP_PATHS: &[&str] = &["/sitemap.xml", "/sitemap_index.xml"];

/// Probes `{origin}/robots.txt`.
///
/// HTTP 200 means the file exists, regardless of body content. Every other
/// outcome (including transport errors) is a soft failure recorded as an
/// explanatory issue string.
pub async fn check_robots_txt(client: &reqwest::Client, base: &Url) -> RobotsTxtSignal {
    let robots_url = match base.join("/robots.txt") {
        Ok(robots_url) => robots_url,
        Err(error) => {
            log::debug!("Could not build robots.txt URL from {base}: {error}");
            return missing_robots("The robots.txt location could not be derived from the URL");
        }
    };

    match client.get(robots_url.as_str()).send().await {
        Ok(response) if response.status() == StatusCode::OK => RobotsTxtSignal {
            exists: true,
            score: 100,
            issue: None,
        },
        Ok(response) => {
            log::debug!("robots.txt probe got HTTP {} for {robots_url}", response.status());
            missing_robots("No robots.txt file was found for this site")
        }
        Err(error) => {
            log::debug!("robots.txt probe failed for {robots_url}: {error}");
            missing_robots("The robots.txt file could not be retrieved")
        }
    }
}

/// Probes the well-known sitemap locations, stopping at the first HTTP 200.
///
/// Counts `<url>` entries in the body as a coarse URL-count proxy. Soft-fails
/// like the robots probe.
pub async fn check_sitemap(client: &reqwest::Client, base: &Url) -> SitemapSignal {
    for path in SITEMAP_PATHS {
        let Ok(sitemap_url) = base.join(path) else {
            continue;
        };

        match client.get(sitemap_url.as_str()).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                let body = response.text().await.unwrap_or_default();
                let url_count = body.matches("<url>").count();
                return SitemapSignal {
                    exists: true,
                    url: Some(sitemap_url.to_string()),
                    url_count,
                    score: 100,
                    issue: None,
                };
            }
            Ok(response) => {
                log::debug!("Sitemap probe got HTTP {} for {sitemap_url}", response.status());
            }
            Err(error) => {
                log::debug!("Sitemap probe failed for {sitemap_url}: {error}");
            }
        }
    }

    SitemapSignal {
        exists: false,
        url: None,
        url_count: 0,
        score: 0,
        issue: Some("No sitemap.xml or sitemap_index.xml was found for this site".to_string()),
    }
}

fn missing_robots(issue: &str) -> RobotsTxtSignal {
    RobotsTxtSignal {
        exists: false,
        score: 0,
        issue: Some(issue.to_string()),
    }
}
