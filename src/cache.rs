use crate::analysis::records::ItemCatalog;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Converted item catalog for one data version and locale, stored as JSON.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCache {
    pub version: String,
    pub locale: String,
    pub fetched_at: DateTime<Utc>,
    pub items: ItemCatalog,
}

impl CatalogCache {
    pub fn new(version: &str, locale: &str, items: ItemCatalog) -> Self {
        CatalogCache {
            version: version.to_string(),
            locale: locale.to_string(),
            fetched_at: Utc::now(),
            items,
        }
    }

    pub fn cache_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".league_builds")
    }

    pub fn get_cache_path(dir: &Path, version: &str, locale: &str) -> PathBuf {
        dir.join(format!("items-{}-{}.json", version, locale))
    }

    /// `Ok(None)` when nothing is cached yet for this version and locale.
    pub fn load(dir: &Path, version: &str, locale: &str) -> Result<Option<Self>, AppError> {
        let path = Self::get_cache_path(dir, version, locale);

        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map(Some)
                .map_err(|e| AppError::CacheError(format!("Failed to parse cache: {}", e))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::CacheError(format!("Failed to read cache: {}", e))),
        }
    }

    pub fn save(&self, dir: &Path) -> Result<PathBuf, AppError> {
        fs::create_dir_all(dir)
            .map_err(|e| AppError::CacheError(format!("Failed to create cache dir: {}", e)))?;

        let path = Self::get_cache_path(dir, &self.version, &self.locale);
        let json = serde_json::to_string(self)
            .map_err(|e| AppError::CacheError(format!("Failed to serialize cache: {}", e)))?;

        fs::write(&path, json)
            .map_err(|e| AppError::CacheError(format!("Failed to write cache: {}", e)))?;

        Ok(path)
    }

    pub fn is_stale(&self, max_age_mins: u64) -> bool {
        let age = Utc::now().signed_duration_since(self.fetched_at);
        age.num_minutes() > max_age_mins as i64
    }
}
