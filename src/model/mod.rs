mod api_result;
pub use api_result::ApiResult;
mod error;
pub use error::QuoteError;
mod quote;
pub use quote::QuoteRecord;
mod quote_response;
pub use quote_response::QuoteResponse;
