//! External store feed acquisition for PCMAP.
//!
//! Parses the comma-separated store feed into [`pcmap_core::StoreRecord`]s
//! and performs the single startup fetch. The parser is deliberately
//! forgiving: malformed fields fall back to documented defaults and never
//! abort a load. Whether a failed or empty fetch matters at all is the
//! caller's policy (`pcmap-app` keeps the seed data and moves on).

pub mod client;
pub mod decode;
pub mod error;
pub mod tabular;

pub use client::FeedClient;
pub use decode::{decode_stores, parse_stores};
pub use error::FeedError;
pub use tabular::{parse_table, Table};
