use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single upstream quote. Every field is passed through exactly as the
/// provider sent it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
    /// Fields the provider sends beyond the ones above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
