//! Render-first, fetch-once startup sequence.

use pcmap_feed::FeedClient;

use crate::controller::{Directory, Presenter};

/// Runs the startup load sequence.
///
/// Renders navigation and listing immediately from the current (seed)
/// repository so the user never waits on the network, then makes exactly one
/// feed fetch. A successful, non-empty result replaces the repository
/// wholesale and re-renders the listing. A transport failure, bad status, or
/// empty feed keeps the current data and logs a diagnostic — nothing is ever
/// surfaced to the user (zero-downtime fallback). No retry, no polling.
pub async fn load<P: Presenter>(directory: &mut Directory<P>, client: &FeedClient, url: &str) {
    directory.render();

    match client.fetch_stores(url).await {
        Ok(stores) if !stores.is_empty() => {
            tracing::info!(url, rows = stores.len(), "store feed loaded, replacing seed data");
            directory.replace_stores(stores);
            directory.render_listing();
        }
        Ok(_) => {
            tracing::warn!(url, "store feed parsed to zero rows, keeping current data");
        }
        Err(err) => {
            tracing::warn!(url, error = %err, "store feed unavailable, keeping current data");
        }
    }
}
