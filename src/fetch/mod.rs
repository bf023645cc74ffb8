mod cache;
mod client;
mod fetch_error;
mod rate_limit;

pub use cache::{cache_key, PageCache};
pub use client::{FetchConfig, PageFetcher};
pub use fetch_error::FetchError;
pub use rate_limit::RateLimiter;
