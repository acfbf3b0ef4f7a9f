mod provider;
pub use provider::{QuoteProvider, UpstreamQuotes};
mod awesome_api;
pub use awesome_api::AwesomeApi;
