pub mod structures;

use const_format::formatcp;
use eyre::{bail, eyre, Result};
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use reqwest::header::USER_AGENT;
use reqwest::Url;
use std::time::Instant;

use self::structures::Release;

const DISCOGS_API: &str = "https://api.discogs.com";
const DISCOGS_HOST: &str = "discogs.com";
const DISCOGS_WWW_HOST: &str = formatcp!("www.{}", DISCOGS_HOST);
static DISCOGS_USER_AGENT: &str =
    formatcp!("{}/{} ({})", crate::CLI_NAME, crate::VERSION, crate::GITHUB);

lazy_static! {
    static ref RELEASE_PATH_REGEX: Regex = Regex::new(r"/release/(?P<id>[0-9]+)$").unwrap();
}

/// Extract the release id from a Discogs release URL.
///
/// Only `http(s)` URLs on the Discogs host with a path ending in
/// `/release/<id>` are accepted.
pub fn release_id_from_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url)?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        bail!("Unsupported URL scheme: {}", parsed.scheme());
    }
    match parsed.host_str() {
        Some(host) if host == DISCOGS_HOST || host == DISCOGS_WWW_HOST => {}
        _ => bail!("Not a Discogs URL: {}", url),
    }

    RELEASE_PATH_REGEX
        .captures(parsed.path())
        .and_then(|caps| caps.name("id"))
        .map(|id| id.as_str().to_string())
        .ok_or(eyre!("Discogs release id not found in the supplied URL"))
}

pub struct Discogs {
    client: reqwest::Client,
}

impl Discogs {
    pub fn new() -> Self {
        Discogs {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the full release details from the Discogs API.
    pub async fn get_release(&self, id: &str) -> Result<Release> {
        let start = Instant::now();
        let res = self
            .client
            .get(format!("{}/releases/{}", DISCOGS_API, id))
            .header(USER_AGENT, DISCOGS_USER_AGENT)
            .send()
            .await?;
        let req_time = start.elapsed();
        trace!("Discogs HTTP request took {:?}", req_time);
        if !res.status().is_success() {
            bail!(
                "Discogs request returned non-success error code: {} {}",
                res.status(),
                res.text().await?
            );
        }
        let release = res.json::<Release>().await?;
        let json_time = start.elapsed();
        trace!("Discogs JSON parse took {:?}", json_time - req_time);
        Ok(release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_release_urls_on_both_hosts() {
        let id = release_id_from_url("https://www.discogs.com/Orbital-The-Box/release/870");
        assert_eq!(id.unwrap(), "870");
        let id = release_id_from_url("http://discogs.com/release/1209459");
        assert_eq!(id.unwrap(), "1209459");
    }

    #[test]
    fn rejects_other_hosts() {
        assert!(release_id_from_url("https://musicbrainz.org/release/870").is_err());
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(release_id_from_url("ftp://www.discogs.com/release/870").is_err());
    }

    #[test]
    fn rejects_paths_without_a_release_id() {
        assert!(release_id_from_url("https://www.discogs.com/artist/1234").is_err());
        assert!(release_id_from_url("https://www.discogs.com/release/").is_err());
        assert!(release_id_from_url("https://www.discogs.com/release/870-Orbital").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(release_id_from_url("not a url").is_err());
    }
}
