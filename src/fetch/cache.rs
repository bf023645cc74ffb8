// src/fetch/cache.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use url::Url;

/// Derives the cache key for a listing URL: the last non-empty path
/// segment, ignoring the query string, falling back to the host when the
/// path is bare.
///
/// Distinct URLs whose last segment collides alias to the same cache
/// entry. That matches how the source site structures listing URLs
/// (the segment is a unique property id), so it is documented here
/// rather than worked around.
pub fn cache_key(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let last_segment = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.trim().is_empty()).last())
        .map(|s| s.to_string());
    last_segment.or_else(|| parsed.host_str().map(|h| h.to_string()))
}

/// On-disk store of raw page bodies, one `<key>.html` file per URL.
/// Entries are append-only: nothing here invalidates or refreshes them.
pub struct PageCache {
    dir: PathBuf,
}

impl PageCache {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        PageCache {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn entry_path(&self, url: &str) -> Option<PathBuf> {
        cache_key(url).map(|key| self.dir.join(format!("{key}.html")))
    }

    /// Returns the stored body for this URL, or `None` on a miss (or when
    /// no key can be derived at all).
    pub fn read(&self, url: &str) -> io::Result<Option<String>> {
        match self.entry_path(url) {
            Some(path) if path.exists() => fs::read_to_string(path).map(Some),
            _ => Ok(None),
        }
    }

    /// Stores the raw body. The write is a plain `fs::write`; a crash
    /// mid-write leaves a truncated entry that surfaces later as an
    /// extraction failure.
    pub fn write(&self, url: &str, body: &str) -> io::Result<()> {
        if let Some(path) = self.entry_path(url) {
            fs::write(path, body)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_last_nonempty_path_segment() {
        let url = "https://www.zillow.com/homedetails/795-Monroe-Dr-NE/35880144_zpid/";
        assert_eq!(cache_key(url).unwrap(), "35880144_zpid");
    }

    #[test]
    fn key_ignores_query_string() {
        let plain = cache_key("https://x.test/a/b/c").unwrap();
        let with_query = cache_key("https://x.test/a/b/c?utm=camp&x=1").unwrap();
        assert_eq!(plain, with_query);
        assert_eq!(plain, "c");
    }

    #[test]
    fn bare_host_falls_back_to_host() {
        assert_eq!(cache_key("https://example.com").unwrap(), "example.com");
        assert_eq!(cache_key("https://example.com/").unwrap(), "example.com");
    }

    #[test]
    fn round_trips_a_body_through_disk() {
        let dir = std::env::temp_dir().join(format!(
            "rentscout_cache_test_{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::create_dir_all(&dir).unwrap();
        let cache = PageCache::new(&dir);
        let url = "https://x.test/listings/42_zpid/";

        assert_eq!(cache.read(url).unwrap(), None);
        cache.write(url, "<html>body</html>").unwrap();
        assert_eq!(cache.read(url).unwrap().as_deref(), Some("<html>body</html>"));
        assert!(dir.join("42_zpid.html").exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
