use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use tokio::time::timeout;

use crate::config::SourceConfig;
use crate::model::UserRecord;
use crate::source::error::FetchError;
use crate::source::UserSource;

/// Fetches the current user with a single `GET` against a fixed URL.
pub struct HttpUserSource {
    client: Client,
    url: Url,
    request_timeout: Duration,
}

impl HttpUserSource {
    pub fn new(url: Url, request_timeout: Duration, connect_timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| FetchError::Request {
                url: url.to_string(),
                source: e,
            })?;

        Ok(Self {
            client,
            url,
            request_timeout,
        })
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, FetchError> {
        let url = config.user_url().map_err(|e| FetchError::InvalidUrl {
            url: format!("{}{}", config.base_url, config.user_path),
            reason: e.to_string(),
        })?;
        Self::new(url, config.request_timeout(), config.connect_timeout())
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn do_fetch(&self) -> Result<UserRecord, FetchError> {
        let url = self.url.to_string();
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Request {
            url: url.clone(),
            source: e,
        })?;
        tracing::debug!("{} answered {} ({} bytes)", url, status, body.len());

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode { url, source: e })
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_current_user(&self) -> Result<UserRecord, FetchError> {
        match timeout(self.request_timeout, self.do_fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                url: self.url.to_string(),
                duration_secs: self.request_timeout.as_secs(),
            }),
        }
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
