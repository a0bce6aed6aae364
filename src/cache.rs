use crate::debug_println;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CACHE_DIR: &str = "cache";
const CACHE_FILE_EXTENSION: &str = "json";

/// Rendered listings on disk, one JSON-encoded string per URL.
///
/// Entries never expire. The key is derived from the URL text alone, so a
/// listing that changes on the site keeps being served from its old entry
/// until the file is removed.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Hex MD5 digest of the raw URL.
    pub fn key_for(url: &str) -> String {
        format!("{:x}", md5::compute(url.as_bytes()))
    }

    pub fn path_for(&self, url: &str) -> PathBuf {
        self.root
            .join(Self::key_for(url))
            .with_extension(CACHE_FILE_EXTENSION)
    }

    /// Returns the stored text, or `None` if the entry is missing or unreadable.
    pub fn get(&self, url: &str) -> Option<String> {
        let path = self.path_for(url);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => {
                debug_println!("Cache miss for {}", url);
                return None;
            }
        };

        match serde_json::from_str::<String>(&raw) {
            Ok(value) => {
                debug_println!("Cache hit for {} ({})", url, path.display());
                Some(value)
            }
            Err(e) => {
                debug_println!("Ignoring corrupt cache entry {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Writes (or overwrites) the entry for `url`, creating the cache root if needed.
    pub fn put(&self, url: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root).context(format!(
            "Failed to create cache directory: {}",
            self.root.display()
        ))?;

        let path = self.path_for(url);
        let payload = serde_json::to_string(value).context("Failed to encode cache entry")?;
        fs::write(&path, payload)
            .context(format!("Failed to write cache entry: {}", path.display()))?;

        debug_println!("Cached {} as {}", url, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const URL: &str = "https://www.avito.ru/ekaterinburg/kvartiry/1-k._kvartira_40_m_59_et._4574477371";

    #[test]
    fn key_is_deterministic_and_url_specific() {
        assert_eq!(CacheStore::key_for(URL), CacheStore::key_for(URL));
        assert_ne!(CacheStore::key_for(URL), CacheStore::key_for(&format!("{URL}?p=2")));
        assert_eq!(CacheStore::key_for(URL).len(), 32);
    }

    #[test]
    fn key_matches_md5_hex_digest() {
        assert_eq!(
            CacheStore::key_for("hello"),
            "5d41402abc4b2a76b9719d911017c592"
        );
    }

    #[test]
    fn entry_file_is_named_by_key() {
        let store = CacheStore::new("cache");
        assert_eq!(
            store.path_for("hello"),
            PathBuf::from("cache/5d41402abc4b2a76b9719d911017c592.json")
        );
    }

    #[test]
    fn missing_entry_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join("not-created-yet"));
        assert_eq!(store.get(URL), None);
    }

    #[test]
    fn put_creates_root_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join("nested").join("cache"));
        let text = "🌟 <b>Квартира</b>\n💵 5 000 000₽\n";

        store.put(URL, text).unwrap();

        assert!(store.root().is_dir());
        assert_eq!(store.get(URL).as_deref(), Some(text));
    }

    #[test]
    fn payload_is_a_single_json_string() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());

        store.put(URL, "line\nwith \"quotes\"").unwrap();

        let raw = fs::read_to_string(store.path_for(URL)).unwrap();
        assert_eq!(raw, r#""line\nwith \"quotes\"""#);
    }

    #[test]
    fn overwrite_replaces_value() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());

        store.put(URL, "first").unwrap();
        store.put(URL, "second").unwrap();
        store.put(URL, "second").unwrap();

        assert_eq!(store.get(URL).as_deref(), Some("second"));
    }

    #[test]
    fn corrupt_entry_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());
        fs::write(store.path_for(URL), "{not json").unwrap();

        assert_eq!(store.get(URL), None);
    }

    #[test]
    fn non_string_json_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());
        fs::write(store.path_for(URL), r#"{"price": 1}"#).unwrap();

        assert_eq!(store.get(URL), None);
    }
}
