//! Async wrapper around the synchronous CountyLookupClient.
//!
//! HTTP calls run on tokio's blocking pool via `tokio::task::spawn_blocking`
//! so a slow lookup service never stalls the async runtime.

use crate::client::CountyLookupClient;
use crate::domain::ZipCode;
use crate::error::{LookupError, LookupResult};
use crate::models::CountyLookup;
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the county lookup service.
#[async_trait]
pub trait AsyncCountyLookupClient: Send + Sync {
    async fn lookup_county(&self, zip: &ZipCode) -> LookupResult<CountyLookup>;
}

/// Async wrapper around synchronous CountyLookupClient.
#[derive(Clone)]
pub struct AsyncCountyLookupClientImpl {
    client: Arc<CountyLookupClient>,
}

impl AsyncCountyLookupClientImpl {
    pub fn new(client: CountyLookupClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncCountyLookupClient for AsyncCountyLookupClientImpl {
    async fn lookup_county(&self, zip: &ZipCode) -> LookupResult<CountyLookup> {
        let client = self.client.clone();
        let zip = zip.clone();

        tokio::task::spawn_blocking(move || client.lookup_county(&zip))
            .await
            .map_err(|e| LookupError::Network(format!("Task join error: {}", e)))?
    }
}
