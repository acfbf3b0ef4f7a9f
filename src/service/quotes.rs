use crate::{
    model::{QuoteError, QuoteRecord, QuoteResponse},
    provider::QuoteProvider,
};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, error, warn};

/// Separator between the base and quote currency in a requested pair code.
pub const SEPARATOR: char = '-';

pub struct QuoteService {
    provider: Box<dyn QuoteProvider>,
}

impl QuoteService {
    pub fn new(provider: Box<dyn QuoteProvider>) -> QuoteService {
        QuoteService { provider }
    }

    /// Fetches the requested codes with a single upstream call. Codes the
    /// provider doesn't know are skipped; only a batch where nothing matched
    /// is an error.
    pub async fn fetch(&self, codes: &[String]) -> Result<Vec<QuoteRecord>, QuoteError> {
        if codes.is_empty() {
            return Ok(vec![]);
        }

        let codes = dedup(codes);
        let query = codes.join(",");

        let quotes = match self.provider.fetch(&query).await {
            Ok(Some(quotes)) => quotes,
            Ok(None) => {
                warn!(provider = %self.provider.name(), %query, "Provider doesn't know any of the requested quotes");
                return Err(QuoteError::NotFound { query });
            }
            Err(e) => {
                error!(provider = %self.provider.name(), %query, error = ?e, "Failed to fetch quotes");
                return Err(QuoteError::Transport(e));
            }
        };

        let records: Vec<QuoteRecord> = codes
            .iter()
            .filter_map(|code| {
                let key = upstream_key(code);
                let value = match quotes.get(&key) {
                    Some(value) => value,
                    None => {
                        debug!(%code, %key, "Quote is missing from provider response");
                        return None;
                    }
                };
                match QuoteRecord::deserialize(value) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        warn!(%code, %key, %e, "Skipping malformed quote from provider response");
                        None
                    }
                }
            })
            .collect();

        if records.is_empty() {
            warn!(provider = %self.provider.name(), %query, "None of the requested quotes were found");
            return Err(QuoteError::FullMiss { query });
        }

        Ok(records)
    }

    pub async fn fetch_quotes(&self, codes: &[String]) -> QuoteResponse {
        self.fetch(codes).await.into()
    }
}

/// Maps a requested code to the key the provider uses in its response:
/// `USD-BRL` becomes `USDBRL`.
pub fn upstream_key(code: &str) -> String {
    code.replace(SEPARATOR, "")
}

pub fn dedup(codes: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    codes
        .iter()
        .filter(|code| seen.insert(code.as_str()))
        .cloned()
        .collect()
}

/// Splits a comma separated list of codes, dropping blanks.
pub fn parse_codes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(String::from)
        .collect()
}
