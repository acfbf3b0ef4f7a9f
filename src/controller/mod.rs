pub mod catcher;
pub mod quotes;
