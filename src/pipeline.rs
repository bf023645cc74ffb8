// src/pipeline.rs
//
// Per-URL enrichment: fetch -> extract -> walkscore -> commute windows.
// Every failure is caught at the narrowest stage and degraded to a
// partial record; the batch always yields exactly one record per URL.

use crate::commute::{departure_tomorrow, CommuteError, CommuteOracle, DEFAULT_MODE};
use crate::domain::Listing;
use crate::fetch::{PageFetcher, RateLimiter};
use crate::extraction::extract_listing;
use crate::walkscore::WalkscoreClient;
use std::collections::HashMap;

/// One output row: field name to serialized value.
pub type Record = HashMap<String, String>;

/// Commute windows and their departure hours.
pub const TIME_WINDOWS: [(&str, u32); 2] = [("morning", 8), ("evening", 18)];

/// Marker written for every commute field of a window whose directions
/// call failed.
pub const UNKNOWN: &str = "unknown";

pub struct Pipeline {
    fetcher: PageFetcher,
    walkscore: Option<WalkscoreClient>,
    oracle: CommuteOracle,
    commute_addresses: Vec<String>,
    limiter: RateLimiter,
}

impl Pipeline {
    pub fn new(
        fetcher: PageFetcher,
        walkscore: Option<WalkscoreClient>,
        oracle: CommuteOracle,
        commute_addresses: Vec<String>,
        limiter: RateLimiter,
    ) -> Self {
        Pipeline {
            fetcher,
            walkscore,
            oracle,
            commute_addresses,
            limiter,
        }
    }

    /// Processes one URL to completion, then pays the rate-limit delay
    /// if the page came from a live fetch.
    pub fn process(&self, url: &str) -> Record {
        let (record, was_cache_hit) = self.record_for(url);
        self.limiter.after_fetch(was_cache_hit);
        record
    }

    fn record_for(&self, url: &str) -> (Record, bool) {
        let (body, was_cache_hit) = match self.fetcher.fetch(url) {
            Ok(fetched) => fetched,
            Err(e) => {
                eprintln!("⚠️ Fetch failed for {url}: {e}");
                return (url_only_record(url), false);
            }
        };

        let mut listing = match extract_listing(url, &body) {
            Ok(listing) => listing,
            Err(e) => {
                eprintln!("⚠️ Extraction failed for {url}: {e}");
                return (url_only_record(url), was_cache_hit);
            }
        };

        if let Some(walkscore) = &self.walkscore {
            listing.walkscore = match walkscore.lookup(&listing.address) {
                Ok(score) => score,
                Err(e) => {
                    eprintln!("⚠️ Walkscore lookup failed for {}: {e}", listing.address);
                    None
                }
            };
        }

        let mut record = listing_record(&listing);
        if !self.commute_addresses.is_empty() {
            for (label, hour) in TIME_WINDOWS {
                let outcome = self.oracle.durations(
                    &self.commute_addresses,
                    &listing.address,
                    departure_tomorrow(hour),
                    DEFAULT_MODE,
                );
                apply_window(&mut record, &self.commute_addresses, label, outcome);
            }
        }
        (record, was_cache_hit)
    }
}

/// The degenerate record for a URL whose page never became a listing.
pub fn url_only_record(url: &str) -> Record {
    let mut record = Record::new();
    record.insert("url".to_string(), url.to_string());
    record
}

pub fn listing_record(listing: &Listing) -> Record {
    let mut record = Record::new();
    record.insert("url".to_string(), listing.url.clone());
    record.insert("bedrooms".to_string(), listing.bedrooms.to_string());
    record.insert("bathrooms".to_string(), listing.bathrooms.to_string());
    record.insert("sqft".to_string(), listing.sqft.to_string());
    record.insert("rent".to_string(), listing.rent.to_string());
    record.insert("ppsf".to_string(), listing.ppsf.to_string());
    record.insert("address".to_string(), listing.address.clone());
    if let Some(score) = listing.walkscore {
        record.insert("walkscore".to_string(), score.to_string());
    }
    record
}

/// Fills in one time window's commute fields. A failed window call marks
/// every address of that window unknown; other windows and the listing
/// fields are untouched.
fn apply_window(
    record: &mut Record,
    addresses: &[String],
    label: &str,
    outcome: Result<Vec<f64>, CommuteError>,
) {
    match outcome {
        Ok(minutes) => {
            for (address, value) in addresses.iter().zip(minutes) {
                record.insert(format!("{address}_{label}"), value.to_string());
            }
        }
        Err(e) => {
            eprintln!("⚠️ Commute lookup failed for {label} window: {e}");
            for address in addresses {
                record.insert(format!("{address}_{label}"), UNKNOWN.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing_page(url_tag: &str) -> String {
        let cache = json!({
            "ForRentCache": {
                "property": {
                    "streetAddress": format!("{url_tag} Peachtree St"),
                    "city": "Atlanta",
                    "state": "GA",
                    "price": 1900,
                    "bedrooms": 1,
                    "bathrooms": 1,
                    "livingAreaValue": 760.0,
                }
            }
        })
        .to_string();
        let next_data = json!({
            "props": { "pageProps": { "componentProps": { "gdpClientCache": cache } } }
        });
        format!("<html><script id=\"__NEXT_DATA__\">{next_data}</script></html>")
    }

    fn sample_listing() -> Listing {
        extract_listing("https://x.test/l1", &listing_page("10")).unwrap()
    }

    #[test]
    fn failed_window_marks_every_address_unknown_leaving_the_rest_intact() {
        let addresses = vec!["1 Office Way".to_string(), "2 Gym St".to_string()];
        let mut record = listing_record(&sample_listing());

        apply_window(
            &mut record,
            &addresses,
            "morning",
            Err(CommuteError::NoRoute),
        );
        apply_window(&mut record, &addresses, "evening", Ok(vec![21.5, 8.0]));

        assert_eq!(record["1 Office Way_morning"], UNKNOWN);
        assert_eq!(record["2 Gym St_morning"], UNKNOWN);
        assert_eq!(record["1 Office Way_evening"], "21.5");
        assert_eq!(record["2 Gym St_evening"], "8");
        assert_eq!(record["rent"], "1900");
        assert_eq!(record["address"], "10 Peachtree St, Atlanta, GA");
    }

    #[test]
    fn walkscore_appears_only_when_present() {
        let mut listing = sample_listing();
        assert!(!listing_record(&listing).contains_key("walkscore"));

        listing.walkscore = Some(82.0);
        assert_eq!(listing_record(&listing)["walkscore"], "82");
    }

    // The batch contract: one record per URL, input order kept, a failing
    // middle page degrading to url-only without touching its neighbors.
    #[test]
    fn failing_middle_page_degrades_alone_and_order_is_kept() {
        let pages = [
            ("https://x.test/a", listing_page("1")),
            ("https://x.test/b", "<html>blocked</html>".to_string()),
            ("https://x.test/c", listing_page("3")),
        ];

        let records: Vec<Record> = pages
            .iter()
            .map(|(url, body)| match extract_listing(url, body) {
                Ok(listing) => listing_record(&listing),
                Err(_) => url_only_record(url),
            })
            .collect();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["url"], "https://x.test/a");
        assert_eq!(records[0]["address"], "1 Peachtree St, Atlanta, GA");
        assert_eq!(records[1]["url"], "https://x.test/b");
        assert_eq!(records[1].len(), 1);
        assert_eq!(records[2]["url"], "https://x.test/c");
        assert_eq!(records[2]["address"], "3 Peachtree St, Atlanta, GA");
    }
}
