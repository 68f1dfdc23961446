use crate::analysis::records::{ChampionRecord, ItemCatalog};
use crate::config::Config;
use crate::error::AppError;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

use super::endpoints;
use super::models::*;

const MAX_RETRIES: u32 = 3;
const USER_AGENT: &str = concat!("league_builds/", env!("CARGO_PKG_VERSION"));

pub struct DataDragonClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    clock: DefaultClock,
}

impl DataDragonClient {
    pub fn new(config: Config) -> Self {
        let per_second = NonZeroU32::new(config.requests_per_second).unwrap_or(NonZeroU32::MIN);
        DataDragonClient {
            config,
            rate_limiter: RateLimiter::direct(Quota::per_second(per_second)),
            clock: DefaultClock::default(),
        }
    }

    pub fn cdn(&self) -> String {
        self.config.versioned_cdn()
    }

    fn throttle(&self) {
        while let Err(not_until) = self.rate_limiter.check() {
            thread::sleep(not_until.wait_time_from(self.clock.now()));
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let mut retry_count = 0;

        loop {
            self.throttle();
            debug!(url, "GET");

            let response = ureq::get(url).set("User-Agent", USER_AGENT).call();

            match response {
                Ok(resp) => {
                    return resp
                        .into_string()
                        .map_err(|e| AppError::HttpError(e.to_string()));
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 2000 * (retry_count + 1) as u64;
                    warn!(wait_ms, "rate limited, retrying");
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(ureq::Error::Status(403 | 404, _)) => {
                    return Err(AppError::NotFound(url.to_string()));
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }

    pub fn get_champion(&self, champion_id: &str) -> Result<ChampionRecord, AppError> {
        let id = endpoints::normalize_champion_id(champion_id);
        let url = endpoints::champion_url(&self.cdn(), &self.config.locale, &id);

        // Data Dragon answers unknown champions with 403 from its bucket.
        let body = match self.execute_request(&url) {
            Err(AppError::NotFound(_)) => return Err(AppError::ChampionNotFound(id)),
            other => other?,
        };

        let detail: ChampionDetailResponse =
            serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))?;
        detail.into_record().ok_or(AppError::ChampionNotFound(id))
    }

    pub fn get_item_catalog(&self) -> Result<ItemCatalog, AppError> {
        let url = endpoints::item_catalog_url(&self.cdn(), &self.config.locale);

        let body = self.execute_request(&url)?;
        let response: ItemCatalogResponse =
            serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))?;
        Ok(response.into_catalog())
    }
}
