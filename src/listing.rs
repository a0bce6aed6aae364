use crate::avito_scraper::{extract_listing, HttpFetcher, DEFAULT_USER_AGENT};
use crate::cache::{CacheStore, DEFAULT_CACHE_DIR};
use crate::error::FetchError;
use crate::{debug_eprintln, debug_println};
use std::path::PathBuf;
use std::time::Duration;

/// Source of raw listing markup.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

#[derive(Debug, Clone)]
pub struct ParserOptions {
    pub cache_dir: PathBuf,
    pub user_agent: String,
    /// Request timeout. `None` leaves the HTTP client's default in place.
    pub timeout: Option<Duration>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

/// Turns a listing URL into card text, memoized on disk by URL.
pub struct ListingParser<F: PageFetcher> {
    fetcher: F,
    cache: CacheStore,
}

impl ListingParser<HttpFetcher> {
    pub fn from_options(options: &ParserOptions) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(&options.user_agent, options.timeout)?;
        Ok(Self::new(fetcher, CacheStore::new(&options.cache_dir)))
    }
}

impl<F: PageFetcher> ListingParser<F> {
    pub fn new(fetcher: F, cache: CacheStore) -> Self {
        Self { fetcher, cache }
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Returns the cached card for `url` if there is one, without touching the
    /// network. Otherwise fetches, extracts, renders and caches it.
    pub fn parse(&self, url: &str) -> Result<String, FetchError> {
        if let Some(cached) = self.cache.get(url) {
            return Ok(cached);
        }
        self.parse_fresh(url)
    }

    /// Fetches and renders `url` regardless of the cache, replacing any entry.
    pub fn parse_fresh(&self, url: &str) -> Result<String, FetchError> {
        let html = self.fetcher.fetch(url)?;

        let listing = extract_listing(&html);
        if crate::debug::is_debug_enabled() {
            match serde_json::to_string_pretty(&listing) {
                Ok(json) => debug_println!("Extracted listing for {}:\n{}", url, json),
                Err(e) => debug_eprintln!("Failed to dump extracted listing: {}", e),
            }
        }

        let rendered = listing.render();
        if let Err(e) = self.cache.put(url, &rendered) {
            debug_eprintln!("Error caching {}: {:#}", url, e);
        }

        Ok(rendered)
    }
}
