//! Store records and the coercion rules applied to raw feed fields.

use serde::{Deserialize, Serialize};

/// Placeholder image shown when a record has no usable thumbnail, or when the
/// real image fails to load at render time.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/600x400?text=PC+MAP";

/// A repair-shop listing in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    /// Feed-assigned numeric id. Unique by convention only; duplicate ids are
    /// tolerated and never deduplicated.
    pub id: i64,
    pub name: String,
    /// Premium listings sort before non-premium ones; no other behavior.
    pub is_premium: bool,
    /// Top-level region name, e.g. `"서울"`. Must match a taxonomy entry for
    /// the record to ever be visible; mismatches are kept but never surface.
    pub region: String,
    /// Sub-region name, e.g. `"강남구"`.
    pub sub_region: String,
    pub address: String,
    /// Raw thumbnail value exactly as the feed supplied it.
    /// See [`StoreRecord::thumbnail`] for the render-safe accessor.
    pub thumbnail_url: String,
    pub description: String,
    /// Display tags, already split and trimmed.
    pub tags: Vec<String>,
    /// Link to the store's Naver Place page.
    /// See [`StoreRecord::external_link`] for the click-safe accessor.
    pub naver_link: String,
}

impl StoreRecord {
    /// Returns the thumbnail URL to render, substituting
    /// [`PLACEHOLDER_IMAGE_URL`] when the feed value classifies as "no image".
    #[must_use]
    pub fn thumbnail(&self) -> &str {
        if is_placeholder_thumbnail(&self.thumbnail_url) {
            PLACEHOLDER_IMAGE_URL
        } else {
            self.thumbnail_url.trim()
        }
    }

    /// Returns a clickable external link: `"#"` when the feed had none, with
    /// an `https://` scheme prepended when the feed value carries no scheme.
    #[must_use]
    pub fn external_link(&self) -> String {
        let trimmed = self.naver_link.trim();
        if trimmed.is_empty() {
            return "#".to_string();
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        }
    }
}

/// Returns `true` if a raw thumbnail value should render as the placeholder.
///
/// Empty or whitespace-only values and the literal tokens `NULL` and
/// `UNDEFINED` (case-insensitive, after trim) all classify as "no image".
/// Any other non-empty string is a candidate image URL; a load failure at
/// render time is the presenter's fallback, not a data-validity check here.
#[must_use]
pub fn is_placeholder_thumbnail(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("undefined")
}

/// Parses the feed's premium flag: case-insensitive `"TRUE"` after trimming.
/// Everything else — empty, `"1"`, `"false"`, garbage — is `false`.
#[must_use]
pub fn parse_premium_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

/// Splits a raw tag field on `/` or `,`, trimming each piece and dropping
/// empties. Order is preserved.
#[must_use]
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(['/', ','])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
