use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;

/// Upstream answer keyed by the provider's concatenated pair code, e.g. `USDBRL`.
/// Entries stay raw until a requested code picks them out.
pub type UpstreamQuotes = HashMap<String, Value>;

#[rocket::async_trait]
pub trait QuoteProvider: Send + Sync {
    fn name(&self) -> String;

    /// Issues one request for every code in `query` (comma separated).
    /// Returns `Ok(None)` when the provider reports the whole batch as unknown.
    async fn fetch(&self, query: &str) -> Result<Option<UpstreamQuotes>>;
}
