//! Domain types and static data for the PCMAP store directory.
//!
//! Holds the [`StoreRecord`] model with its field coercion rules, the fixed
//! two-level region taxonomy, the built-in seed dataset, the legal text
//! documents, and environment-backed application configuration. No I/O
//! beyond reading env vars; feed parsing and fetching live in `pcmap-feed`.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod legal;
pub mod regions;
pub mod seed;
pub mod stores;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use legal::{legal_doc, LegalDoc, LegalKey};
pub use regions::{find_region, Region, REGIONS};
pub use seed::seed_stores;
pub use stores::{
    is_placeholder_thumbnail, parse_premium_flag, split_tags, StoreRecord, PLACEHOLDER_IMAGE_URL,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
