//! [`NodeClient`]: the reqwest-backed [`NodeApi`] implementation.

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::http::build_client;
use crate::types::{FileDescriptor, Message, OutgoingMessage};
use crate::NodeApi;
use serde::de::DeserializeOwned;
use url::Url;

/// HTTP client for one node's REST surface.
#[derive(Debug, Clone)]
pub struct NodeClient {
    base_url: Url,
    client: reqwest::Client,
}

impl NodeClient {
    /// Validate `config` and build a client for it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for an invalid address or timeout and
    /// [`ApiError::Http`] if the underlying client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            base_url: config.parsed_base_url()?,
            client: build_client(config)?,
        })
    }

    /// The resolved node address.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Config(format!("cannot build URL for {path}: {e}")))
    }

    /// GET `path` and return the body as text, enforcing a success status.
    async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.endpoint(path)?;
        tracing::trace!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Http(format!("GET {path} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_owned(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::Http(format!("reading {path} body failed: {e}")))
    }

    /// GET `path` and decode the body as JSON.
    ///
    /// The body is read as text first so a malformed document surfaces as
    /// [`ApiError::Parse`] rather than a transport error.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.get_text(path).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(format!("{path}: {e}")))
    }

    async fn post(&self, path: &str, request: reqwest::RequestBuilder) -> Result<()> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Http(format!("POST {path} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_owned(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

impl NodeApi for NodeClient {
    async fn node_id(&self) -> Result<String> {
        let id = self.get_text("/id").await?;
        Ok(id.trim().to_owned())
    }

    async fn peers(&self) -> Result<Vec<String>> {
        self.get_json("/node").await
    }

    async fn add_peer(&self, address: &str) -> Result<()> {
        let url = self.endpoint("/node")?;
        let request = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(address.to_owned());
        self.post("/node", request).await
    }

    async fn messages(&self) -> Result<Vec<Message>> {
        self.get_json("/message").await
    }

    async fn send(&self, message: &OutgoingMessage) -> Result<()> {
        let url = self.endpoint("/message")?;
        let request = self.client.post(url).json(message);
        self.post("/message", request).await
    }

    async fn destinations(&self) -> Result<Vec<String>> {
        self.get_json("/destination").await
    }

    async fn files(&self) -> Result<Vec<FileDescriptor>> {
        self.get_json("/file").await
    }
}
