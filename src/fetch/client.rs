// src/fetch/client.rs

use crate::fetch::{FetchError, PageCache};
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, DNT, REFERER, USER_AGENT};
use std::time::Duration;

/// Request-shaping knobs for live page fetches. The defaults mimic a
/// desktop Chrome session; sites rotate their bot heuristics, so these
/// are data rather than literals baked into the call site.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub referer: String,
    /// One of these is picked at random for every live request.
    pub user_agents: Vec<String>,
    /// Extra header pairs sent verbatim (sec-ch-ua and friends).
    pub extra_headers: Vec<(String, String)>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            timeout: Duration::from_secs(30),
            referer: "https://www.zillow.com/homedetails/795-Monroe-Dr-NE-Atlanta-GA-30308/35880144_zpid/".to_string(),
            user_agents: vec![
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36".to_string(),
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36".to_string(),
            ],
            extra_headers: vec![
                (
                    "sec-ch-ua".to_string(),
                    r#""Chromium";v="124", "Google Chrome";v="124", "Not-A.Brand";v="99""#.to_string(),
                ),
                ("sec-ch-ua-mobile".to_string(), "?0".to_string()),
                ("sec-ch-ua-platform".to_string(), r#""Windows""#.to_string()),
            ],
        }
    }
}

/// Fetches listing pages, consulting the cache first when one is
/// configured. Reports whether each body came from cache so the caller
/// can skip the rate-limit delay on hits.
pub struct PageFetcher {
    client: Client,
    config: FetchConfig,
    cache: Option<PageCache>,
}

impl PageFetcher {
    pub fn new(config: FetchConfig, cache: Option<PageCache>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(PageFetcher {
            client,
            config,
            cache,
        })
    }

    /// `(body, was_cache_hit)` for one URL.
    pub fn fetch(&self, url: &str) -> Result<(String, bool), FetchError> {
        if let Some(cache) = &self.cache {
            if let Some(body) = cache
                .read(url)
                .map_err(|e| FetchError::Io(e.to_string()))?
            {
                return Ok((body, true));
            }
        }

        let body = self.fetch_live(url)?;
        if let Some(cache) = &self.cache {
            cache
                .write(url, &body)
                .map_err(|e| FetchError::Io(e.to_string()))?;
        }
        Ok((body, false))
    }

    fn fetch_live(&self, url: &str) -> Result<String, FetchError> {
        let headers = self.request_headers()?;
        self.client
            .get(url)
            .headers(headers)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))
    }

    fn request_headers(&self) -> Result<HeaderMap, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            REFERER,
            HeaderValue::from_str(&self.config.referer)
                .map_err(|e| FetchError::BadHeader(e.to_string()))?,
        );
        headers.insert(DNT, HeaderValue::from_static("1"));

        if !self.config.user_agents.is_empty() {
            let pick = rand::thread_rng().gen_range(0..self.config.user_agents.len());
            headers.insert(
                USER_AGENT,
                HeaderValue::from_str(&self.config.user_agents[pick])
                    .map_err(|e| FetchError::BadHeader(e.to_string()))?,
            );
        }

        for (name, value) in &self.config.extra_headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| FetchError::BadHeader(e.to_string()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| FetchError::BadHeader(e.to_string()))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}
