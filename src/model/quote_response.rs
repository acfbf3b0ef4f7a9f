use super::{QuoteError, QuoteRecord};
use serde::{Deserialize, Serialize};

/// The `{ data, error }` envelope handed to callers. Exactly one of the two
/// fields is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    data: Option<Vec<QuoteRecord>>,
    error: Option<String>,
}

impl QuoteResponse {
    pub fn ok(data: Vec<QuoteRecord>) -> QuoteResponse {
        QuoteResponse {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> QuoteResponse {
        QuoteResponse {
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn data(&self) -> Option<&[QuoteRecord]> {
        self.data.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl From<Result<Vec<QuoteRecord>, QuoteError>> for QuoteResponse {
    fn from(result: Result<Vec<QuoteRecord>, QuoteError>) -> QuoteResponse {
        match result {
            Ok(records) => QuoteResponse::ok(records),
            Err(e) => QuoteResponse::err(e.to_string()),
        }
    }
}
