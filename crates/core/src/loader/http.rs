use super::{DocumentLoader, LoadError};
use crate::config::LoaderConfig;
use async_trait::async_trait;

/// GET loader backed by a shared `reqwest` client.
pub struct HttpLoader {
    client: reqwest::Client,
}

impl HttpLoader {
    pub fn new(config: &LoaderConfig) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(LoadError::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentLoader for HttpLoader {
    async fn load(&self, url: &str) -> Result<String, LoadError> {
        tracing::debug!("GET {}", url);

        let request_error = |source: reqwest::Error| LoadError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(request_error)
    }
}
