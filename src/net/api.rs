//! HTTP implementation of the resource traits.
//!
//! Endpoints follow the server's REST layout:
//! - `GET {base}/account/{id}`
//! - `DELETE {base}/account` (form: `id`)
//! - `GET {base}/transaction?account_id=..` plus any request filters
//! - `DELETE {base}/transaction` (form: `id`, `account_id`)
//!
//! ERROR HANDLING
//! ==============
//! Every endpoint answers with an [`ApiResponse`] envelope. A `success: false`
//! body is surfaced as [`RemoteError::Rejected`] even on a non-2xx status so
//! the server's message is not lost; other non-2xx answers become
//! [`RemoteError::Status`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{AccountId, AccountSummary, ApiResponse, RenderRequest, TransactionId, TransactionRecord};
use super::{AccountResource, TransactionResource};
use crate::config::ViewConfig;
use crate::error::RemoteError;

fn account_endpoint(base: &str, account_id: &AccountId) -> String {
    format!("{base}/account/{account_id}")
}

fn account_collection_endpoint(base: &str) -> String {
    format!("{base}/account")
}

fn transaction_collection_endpoint(base: &str) -> String {
    format!("{base}/transaction")
}

fn transport_error(err: &reqwest::Error) -> RemoteError {
    RemoteError::Transport(err.to_string())
}

/// Interpret a response body against its HTTP status.
fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<ApiResponse<T>, RemoteError> {
    let ok_status = (200..300).contains(&status);
    match serde_json::from_slice::<ApiResponse<T>>(body) {
        Ok(parsed) if ok_status || !parsed.success => Ok(parsed),
        Ok(_) => Err(RemoteError::Status(status)),
        Err(e) if ok_status => Err(RemoteError::Decode(e.to_string())),
        Err(_) => Err(RemoteError::Status(status)),
    }
}

/// Resolve the configured base URL into an absolute prefix.
///
/// Root-relative bases are only meaningful inside a browser, where they are
/// resolved against the page origin.
fn absolute_base(configured: &str) -> Result<String, RemoteError> {
    if configured.starts_with("http://") || configured.starts_with("https://") {
        return Ok(configured.trim_end_matches('/').to_owned());
    }
    #[cfg(feature = "hydrate")]
    {
        let origin = web_sys::window()
            .ok_or_else(|| RemoteError::Transport("no browser window".to_owned()))?
            .location()
            .origin()
            .map_err(|e| RemoteError::Transport(format!("page origin unavailable: {e:?}")))?;
        Ok(format!("{origin}{}", configured.trim_end_matches('/')))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(RemoteError::Transport(format!("base url `{configured}` is not absolute")))
    }
}

/// Account and transaction resources backed by `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpResources {
    client: reqwest::Client,
    base_url: String,
}

impl HttpResources {
    /// Build the client from view configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Transport`] if the base URL cannot be made
    /// absolute or the HTTP client fails to build.
    pub fn from_config(config: &ViewConfig) -> Result<Self, RemoteError> {
        let base_url = absolute_base(&config.api_base_url)?;
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.request_timeout_secs));
        let client = builder.build().map_err(|e| transport_error(&e))?;
        tracing::debug!(%base_url, "resource client ready");
        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<ApiResponse<T>, RemoteError> {
        let resp = request.send().await.map_err(|e| transport_error(&e))?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(|e| transport_error(&e))?;
        decode_response(status, &body)
    }
}

#[async_trait::async_trait(?Send)]
impl AccountResource for HttpResources {
    async fn get(&self, account_id: &AccountId) -> Result<AccountSummary, RemoteError> {
        let url = account_endpoint(&self.base_url, account_id);
        self.send::<AccountSummary>(self.client.get(url)).await?.into_data()
    }

    async fn remove(&self, account_id: &AccountId) -> Result<(), RemoteError> {
        let url = account_collection_endpoint(&self.base_url);
        let form = [("id", account_id.as_str())];
        self.send::<serde_json::Value>(self.client.delete(url).form(&form))
            .await?
            .into_unit()
    }
}

#[async_trait::async_trait(?Send)]
impl TransactionResource for HttpResources {
    async fn list(&self, request: &RenderRequest) -> Result<Vec<TransactionRecord>, RemoteError> {
        let url = transaction_collection_endpoint(&self.base_url);
        let query = request.query_pairs();
        self.send::<Vec<TransactionRecord>>(self.client.get(url).query(&query))
            .await?
            .into_data()
    }

    async fn remove(&self, account_id: &AccountId, transaction_id: &TransactionId) -> Result<(), RemoteError> {
        let url = transaction_collection_endpoint(&self.base_url);
        let form = [("id", transaction_id.as_str()), ("account_id", account_id.as_str())];
        self.send::<serde_json::Value>(self.client.delete(url).form(&form))
            .await?
            .into_unit()
    }
}
