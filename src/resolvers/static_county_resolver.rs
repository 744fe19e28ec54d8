use crate::domain::ZipCode;
use crate::error::{LookupError, LookupResult};
use crate::models::CountyLookup;
use crate::resolvers::traits::CountyResolver;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// ZIP codes known to the sample resolver, one per routing band plus a few
/// that fall through to the default number.
const SAMPLE_ZIPS: &[(&str, &str)] = &[
    ("95814", "Sacramento"),
    ("96001", "Shasta"),
    ("93721", "Fresno"),
    ("94103", "San Francisco"),
    ("94612", "Alameda"),
    ("95060", "Santa Cruz"),
    ("93940", "Monterey"),
    ("95437", "Mendocino"),
    ("94801", "Contra Costa"),
    ("90012", "Los Angeles"),
];

/// In-memory county resolver used when no lookup service is configured.
///
/// Answers after a fixed delay to behave like a remote backend.
#[derive(Debug, Clone)]
pub struct StaticCountyResolver {
    entries: HashMap<String, String>,
    latency: Duration,
}

impl StaticCountyResolver {
    /// Empty resolver with the given simulated latency.
    pub fn new(latency: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            latency,
        }
    }

    /// Resolver preloaded with the sample ZIP table.
    pub fn sample(latency: Duration) -> Self {
        SAMPLE_ZIPS
            .iter()
            .fold(Self::new(latency), |resolver, &(zip, county)| {
                resolver.with_entry(zip, county)
            })
    }

    /// Add or replace one ZIP→county entry.
    pub fn with_entry(mut self, zip: impl Into<String>, county: impl Into<String>) -> Self {
        self.entries.insert(zip.into(), county.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CountyResolver for StaticCountyResolver {
    async fn resolve_county(&self, zip: &ZipCode) -> LookupResult<CountyLookup> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        self.entries
            .get(zip.as_str())
            .map(|county| CountyLookup::new(zip.clone(), county.clone()))
            .ok_or_else(|| LookupError::NotFound(zip.to_string()))
    }
}
