pub mod portfolio_source;

pub use portfolio_source::{decode_portfolio, DataLoadError, PortfolioSource};
