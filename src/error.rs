use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Rate limited by the game-data service, please try again later")]
    RateLimited,

    #[error("Champion not found: {0}")]
    ChampionNotFound(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Fallback build table error: {0}")]
    FallbackError(String),
}
