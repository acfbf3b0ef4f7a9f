pub mod quotes;
pub use quotes::QuoteService;
