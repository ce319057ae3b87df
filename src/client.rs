use crate::config::ClientConfig;
use crate::errors::ApiClientError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, trace};
use url::Url;

pub const ACCOUNT_ID_HEADER: &str = "Forecast-Account-ID";
const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Client for the forecastapp.com API.
///
/// The underlying HTTP transport (connection pool and cookie jar) is created
/// on first use and shared by every later call on the same client.
#[derive(Debug)]
pub struct ForecastClient {
    config: ClientConfig,
    transport: OnceCell<reqwest::Client>,
}

impl ForecastClient {
    pub fn new(base_url: &str, account_id: &str, access_token: &str) -> Self {
        Self::from_config(ClientConfig::new(base_url, account_id, access_token, None))
    }

    /// Same as [`ForecastClient::new`]; a zero `timeout` disables the timeout.
    pub fn with_timeout(
        base_url: &str,
        account_id: &str,
        access_token: &str,
        timeout: Duration,
    ) -> Self {
        Self::from_config(ClientConfig::new(
            base_url,
            account_id,
            access_token,
            Some(timeout),
        ))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        ForecastClient {
            config,
            transport: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.transport.initialized()
    }

    /// Builds the HTTP transport if it does not exist yet. Safe to call more
    /// than once, and concurrently.
    pub async fn connect(&self) -> Result<&reqwest::Client, ApiClientError> {
        self.transport
            .get_or_try_init(|| async {
                let mut builder = reqwest::Client::builder().cookie_store(true);
                if let Some(timeout) = self.config.timeout() {
                    builder = builder.timeout(timeout);
                }
                debug!(timeout = ?self.config.timeout(), "initializing forecast transport");
                builder.build().map_err(ApiClientError::HttpClientBuildFailed)
            })
            .await
    }

    /// Joins `path` onto the base URL with a single `/`.
    pub fn full_path(&self, path: &str) -> Result<Url, ApiClientError> {
        let joined = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&joined)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        let builder = self.new_request(Method::GET, path).await?;
        self.send_request(builder).await
    }

    /// Sends `body` verbatim as the request payload.
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: impl Into<Vec<u8>>,
    ) -> Result<T, ApiClientError> {
        let builder = self.new_request(Method::PUT, path).await?;
        self.send_request(builder.body(body.into())).await
    }

    async fn new_request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, ApiClientError> {
        let url = self.full_path(path)?;
        let transport = self.connect().await?;
        debug!(%method, %url, "building forecast request");
        Ok(self.add_headers(transport.request(method, url)))
    }

    fn add_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(AUTHORIZATION, format!("Bearer {}", self.config.access_token()))
            .header(ACCOUNT_ID_HEADER, self.config.account_id.as_str())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
    }

    async fn send_request<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiClientError> {
        let response = builder.send().await.map_err(ApiClientError::RequestFailed)?;
        debug!(status = %response.status(), url = %response.url(), "received forecast response");
        decode_response(response).await
    }
}

async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiClientError> {
    let status = response.status();

    if status.as_u16() >= 400 {
        let body = response.text().await.map_err(ApiClientError::RequestFailed)?;
        return Err(ApiClientError::Http { status, body });
    }

    let bytes = response.bytes().await.map_err(ApiClientError::RequestFailed)?;
    trace!(bytes = bytes.len(), "decoding forecast response body");
    Ok(serde_json::from_slice(&bytes)?)
}
