use crate::error::AppError;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";
pub const DEFAULT_VERSION: &str = "14.25.1";
pub const DEFAULT_LOCALE: &str = "en_US";

#[derive(Debug, Clone)]
pub struct Config {
    pub cdn_base: String,
    pub version: String,
    pub locale: String,
    pub requests_per_second: u32,
    pub cache_ttl_minutes: u64,
    pub fallback_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cdn_base: DEFAULT_CDN.to_string(),
            version: DEFAULT_VERSION.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            requests_per_second: 20,
            cache_ttl_minutes: 24 * 60,
            fallback_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let cdn_base = env::var("DDRAGON_CDN")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or(defaults.cdn_base);
        let version = env::var("DDRAGON_VERSION").unwrap_or(defaults.version);
        let locale = env::var("DDRAGON_LOCALE").unwrap_or(defaults.locale);

        let requests_per_second =
            parse_var("DDRAGON_REQUESTS_PER_SECOND", defaults.requests_per_second)?;
        let cache_ttl_minutes = parse_var("BUILDS_CACHE_TTL_MINUTES", defaults.cache_ttl_minutes)?;

        let fallback_file = env::var("BUILDS_FALLBACK_FILE").ok().map(PathBuf::from);

        Ok(Config {
            cdn_base,
            version,
            locale,
            requests_per_second,
            cache_ttl_minutes,
            fallback_file,
        })
    }

    /// CDN root including the data version segment, e.g. `.../cdn/14.25.1`.
    pub fn versioned_cdn(&self) -> String {
        format!("{}/{}", self.cdn_base, self.version)
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            AppError::ConfigError(format!("{} must be a number, got '{}'", name, raw))
        }),
        Err(_) => Ok(default),
    }
}
