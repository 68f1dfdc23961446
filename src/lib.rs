//! Build and skill-order recommendations for League of Legends champions.
//!
//! `analysis` holds the pure recommendation engine; `api` and `cache` fetch
//! and store the Data Dragon records it consumes.

pub mod analysis;
pub mod api;
pub mod cache;
pub mod config;
pub mod display;
pub mod error;
