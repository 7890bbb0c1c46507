use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::modules::portfolio::application::ports::outgoing::{
    decode_portfolio, DataLoadError, PortfolioSource,
};
use crate::modules::portfolio::domain::entities::PortfolioData;

/// Fetches `GET {base}/api/portfolio`. One request per call, no retry and no
/// timeout.
pub struct HttpPortfolioSource {
    client: Client,
    endpoint: String,
}

impl HttpPortfolioSource {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/api/portfolio", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PortfolioSource for HttpPortfolioSource {
    async fn fetch(&self) -> Result<PortfolioData, DataLoadError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| DataLoadError::Network(e.to_string()))?;

        let status = response.status();
        debug!(endpoint = %self.endpoint, status = status.as_u16(), "Portfolio response received");

        if !status.is_success() {
            return Err(DataLoadError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DataLoadError::Network(e.to_string()))?;

        decode_portfolio(&body)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
