mod http_source;
mod static_source;

pub use http_source::HttpPortfolioSource;
pub use static_source::StaticPortfolioSource;
