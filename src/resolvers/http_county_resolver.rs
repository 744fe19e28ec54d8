use crate::client::AsyncCountyLookupClient;
use crate::domain::ZipCode;
use crate::error::LookupResult;
use crate::models::CountyLookup;
use crate::resolvers::traits::CountyResolver;
use async_trait::async_trait;
use std::sync::Arc;

/// County resolver backed by the HTTP lookup service.
///
/// Delegates to the [`AsyncCountyLookupClient`], keeping services unaware of
/// the transport.
pub struct HttpCountyResolver {
    client: Arc<dyn AsyncCountyLookupClient>,
}

impl HttpCountyResolver {
    pub fn new(client: Arc<dyn AsyncCountyLookupClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CountyResolver for HttpCountyResolver {
    async fn resolve_county(&self, zip: &ZipCode) -> LookupResult<CountyLookup> {
        self.client.lookup_county(zip).await
    }
}
