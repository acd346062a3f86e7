//! Thin abstraction over the four HTTP operations of the item backend.

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{Item, ItemId},
    protocol::SaveItemRequest,
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ItemStoreError {
    /// Non-2xx response; the message is the raw response body, surfaced
    /// verbatim to the user.
    #[error("{body}")]
    Remote { status: u16, body: String },
    /// The request itself could not complete (connectivity, DNS, ...).
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for ItemStoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn list_items(&self) -> Result<Vec<Item>, ItemStoreError>;
    async fn create_item(&self, name: &str, price: f64) -> Result<Item, ItemStoreError>;
    async fn update_item(&self, id: ItemId, name: &str, price: f64)
        -> Result<(), ItemStoreError>;
    async fn delete_item(&self, id: ItemId) -> Result<(), ItemStoreError>;
}

/// [`ItemStore`] backed by the HTTP backend at a configured base URL.
///
/// Each operation is a single request run to completion or failure exactly
/// once: no retries, no timeouts beyond the transport default, no
/// cancellation.
pub struct HttpItemStore {
    http: Client,
    base_url: String,
}

impl HttpItemStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: ItemId) -> String {
        format!("{}/items/{}", self.base_url, id)
    }
}

/// Checks the status, then decodes the body as `T`. Shape mismatches on a
/// 2xx response are reported as `Remote` errors carrying the decode failure.
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ItemStoreError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ItemStoreError::Remote {
            status: status.as_u16(),
            body,
        });
    }
    serde_json::from_str(&body).map_err(|err| ItemStoreError::Remote {
        status: status.as_u16(),
        body: format!("unexpected response shape: {err}"),
    })
}

/// Checks the status and discards the body. 204 is just another 2xx here.
async fn read_empty(response: reqwest::Response) -> Result<(), ItemStoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await?;
    Err(ItemStoreError::Remote {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl ItemStore for HttpItemStore {
    async fn list_items(&self) -> Result<Vec<Item>, ItemStoreError> {
        debug!(url = %self.items_url(), "items: list");
        let response = self.http.get(self.items_url()).send().await?;
        read_json(response).await
    }

    async fn create_item(&self, name: &str, price: f64) -> Result<Item, ItemStoreError> {
        debug!(name, price, "items: create");
        let response = self
            .http
            .post(self.items_url())
            .json(&SaveItemRequest {
                name: name.to_string(),
                price,
            })
            .send()
            .await?;
        read_json(response).await
    }

    async fn update_item(
        &self,
        id: ItemId,
        name: &str,
        price: f64,
    ) -> Result<(), ItemStoreError> {
        debug!(item_id = id.0, name, price, "items: update");
        let response = self
            .http
            .put(self.item_url(id))
            .json(&SaveItemRequest {
                name: name.to_string(),
                price,
            })
            .send()
            .await?;
        read_empty(response).await
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), ItemStoreError> {
        debug!(item_id = id.0, "items: delete");
        let response = self.http.delete(self.item_url(id)).send().await?;
        read_empty(response).await
    }
}

#[cfg(test)]
#[path = "tests/remote_tests.rs"]
mod tests;
