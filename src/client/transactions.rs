//! # Transactions API
//!
//! The `/transactions` group of the node's REST API: fetching a single
//! transaction by id and querying the unconfirmed pool size. The response
//! body for `info` is buffered in full before decoding, because the tagged
//! decoder reads it twice (discriminator probe, then the full decode).

use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use super::errors::{ClientError, ClientResult};
use super::options::Options;
use crate::proto::{self, Transaction};

/// Header carrying the node API key.
const API_KEY_HEADER: &str = "X-API-Key";

/// Client for the `/transactions` endpoints of one node.
pub struct Transactions {
    options: Options,
}

/// Response envelope of `/transactions/unconfirmed/size`.
#[derive(Debug, Deserialize)]
struct UtxSize {
    size: u64,
}

impl Transactions {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Returns the number of unconfirmed transactions in the node's UTX pool.
    pub async fn unconfirmed_size(&self) -> ClientResult<u64> {
        let url = self.options.endpoint("transactions/unconfirmed/size")?;
        let response = self.get(url).await?;
        let out: UtxSize = response.json().await?;
        Ok(out.size)
    }

    /// Fetches a transaction by id and decodes it into its concrete variant.
    ///
    /// Decode failures are wrapped with the requested id; the underlying
    /// [`proto::DecodeError`] kind is preserved for diagnostics.
    pub async fn info(&self, id: &str) -> ClientResult<Transaction> {
        let url = self.options.endpoint(&format!("transactions/info/{id}"))?;
        let response = self.get(url).await?;
        let body = response.bytes().await?;

        let tx = proto::from_json_bytes(&body).map_err(|source| ClientError::Parse {
            id: id.to_string(),
            source,
        })?;
        debug!(id, tx_type = %tx.tx_type(), "decoded transaction");
        Ok(tx)
    }

    async fn get(&self, url: Url) -> ClientResult<reqwest::Response> {
        debug!(%url, "GET");
        let mut request = self.options.client.get(url);
        if let Some(key) = &self.options.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "node returned error status");
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
