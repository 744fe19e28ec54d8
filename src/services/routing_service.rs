//! Routing service layer.
//!
//! Turns county names or ZIP codes into a [`ContactRouting`], resolving ZIPs
//! through the injected [`CountyResolver`] under a timeout.

use crate::domain::ZipCode;
use crate::error::LookupError;
use crate::metrics::{LookupTimer, Metrics};
use crate::models::{ContactRouting, CountyLookup};
use crate::resolvers::CountyResolver;
use crate::routing::{CountyPhoneMapping, PhoneRouter, Region};
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;

/// Number of near-miss county names reported with a fallback.
const MAX_SUGGESTIONS: usize = 3;

/// Routing service trait for business operations.
#[async_trait]
pub trait RoutingService: Send + Sync {
    /// Route a county name. Never fails.
    fn route_county(&self, county: Option<&str>) -> ContactRouting;

    /// Resolve a ZIP code to its county, then route it.
    ///
    /// Lookup failures and timeouts fall back to the default number and are
    /// reported in `lookup_error`.
    async fn route_zip(&self, zip: &str) -> ContactRouting;

    /// Route several ZIP codes concurrently, preserving input order.
    async fn route_zips(&self, zips: &[String]) -> Vec<ContactRouting>;

    /// Routed counties, optionally restricted to one region.
    fn list_mappings(&self, region: Option<Region>) -> Vec<CountyPhoneMapping>;
}

/// Default implementation of RoutingService.
pub struct RoutingServiceImpl {
    router: PhoneRouter,
    resolver: Arc<dyn CountyResolver>,
    lookup_timeout: Duration,
    metrics: Metrics,
}

impl RoutingServiceImpl {
    /// Create a new routing service.
    pub fn new(
        router: PhoneRouter,
        resolver: Arc<dyn CountyResolver>,
        lookup_timeout: Duration,
        metrics: Metrics,
    ) -> Self {
        Self {
            router,
            resolver,
            lookup_timeout,
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Resolve a ZIP under the configured timeout.
    async fn lookup(&self, zip: &ZipCode) -> Result<CountyLookup, LookupError> {
        let timer = LookupTimer::new(self.metrics.clone());

        match tokio::time::timeout(self.lookup_timeout, self.resolver.resolve_county(zip)).await {
            Ok(Ok(lookup)) => {
                timer.complete();
                Ok(lookup)
            }
            Ok(Err(e)) => {
                timer.complete_with_error();
                Err(e)
            }
            Err(_) => {
                timer.complete_with_error();
                self.metrics.record_lookup_timeout();
                Err(LookupError::Timeout(self.lookup_timeout.as_millis() as u64))
            }
        }
    }

    /// Routing answer for a failed ZIP lookup.
    fn fallback(&self, zip: &str, error: LookupError) -> ContactRouting {
        tracing::warn!("County lookup for ZIP {} failed, using default number: {}", zip, error);
        self.metrics.record_route(None);

        ContactRouting::from_route(self.router.resolve(None))
            .with_zip(zip)
            .with_lookup_error(error)
    }
}

#[async_trait]
impl RoutingService for RoutingServiceImpl {
    fn route_county(&self, county: Option<&str>) -> ContactRouting {
        let route = self.router.resolve(county);
        self.metrics.record_route(route.region);

        let suggestions = match (&route.county, route.is_fallback()) {
            (Some(name), true) => {
                tracing::warn!("County {:?} is not routed, using default number", name);
                self.router.table().suggest_counties(name, MAX_SUGGESTIONS)
            }
            _ => Vec::new(),
        };

        ContactRouting::from_route(route).with_suggestions(suggestions)
    }

    async fn route_zip(&self, zip: &str) -> ContactRouting {
        let zip_code = match ZipCode::new(zip) {
            Ok(z) => z,
            Err(_) => {
                return self.fallback(zip.trim(), LookupError::InvalidFormat(zip.to_string()));
            }
        };

        match self.lookup(&zip_code).await {
            Ok(lookup) => {
                tracing::debug!("ZIP {} is in {:?}", zip_code, lookup.county);
                self.route_county(Some(lookup.county.as_str()))
                    .with_zip(zip_code.as_str())
            }
            Err(e) => self.fallback(zip_code.as_str(), e),
        }
    }

    async fn route_zips(&self, zips: &[String]) -> Vec<ContactRouting> {
        join_all(zips.iter().map(|zip| self.route_zip(zip))).await
    }

    fn list_mappings(&self, region: Option<Region>) -> Vec<CountyPhoneMapping> {
        let mappings = self.router.list_all_mappings();
        match region {
            Some(region) => mappings
                .into_iter()
                .filter(|m| m.region == region)
                .collect(),
            None => mappings,
        }
    }
}
