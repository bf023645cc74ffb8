// src/walkscore.rs
//
// Walkability lookup. The score page renders the rating as the alt text
// of its second "Walk Score" badge image; the first is legend content.

use crate::fetch::FetchError;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use std::time::Duration;

const SCORE_URL_BASE: &str = "https://www.walkscore.com/score";

/// Normalizes an address into the URL-path slug the score site expects:
/// lowercase tokens, commas stripped, hyphen-joined. Idempotent.
pub fn address_slug(address: &str) -> String {
    address
        .split_whitespace()
        .map(|token| token.replace(',', "").to_lowercase())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Pulls the numeric score out of a rendered score page, if one exists.
/// A well-formed page with no determinable score is `None`, never an error.
pub fn parse_score(html: &str) -> Option<f64> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("img[alt]").ok()?;

    let alts: Vec<&str> = document
        .select(&selector)
        .filter_map(|el| el.value().attr("alt"))
        .filter(|alt| !alt.is_empty() && alt.contains("Walk Score"))
        .collect();

    // Fewer than two badge images means the page carries no actual score.
    let alt = alts.get(1)?;
    alt.split_whitespace()
        .find(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
        .and_then(|token| token.parse().ok())
}

/// Always fetches live; score pages are never cached.
pub struct WalkscoreClient {
    client: Client,
}

impl WalkscoreClient {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(WalkscoreClient { client })
    }

    /// `Ok(None)` when no score could be determined; `Err` only on
    /// transport failure, which the pipeline also treats as "no score".
    pub fn lookup(&self, address: &str) -> Result<Option<f64>, FetchError> {
        let url = format!("{SCORE_URL_BASE}/{}", address_slug(address));
        let body = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(parse_score(&body))
    }
}
