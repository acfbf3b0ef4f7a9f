use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    /// The provider could not be reached or answered with garbage. The
    /// message stays generic; the cause is only logged.
    #[error("failed to reach the quote provider")]
    Transport(#[source] anyhow::Error),
    /// The provider rejected the whole batch as unknown.
    #[error("quotes not found: {query}")]
    NotFound { query: String },
    #[error("none of the requested quotes were found: {query}")]
    FullMiss { query: String },
}
