use async_trait::async_trait;
use clean_truck_check::domain::ZipCode;
use clean_truck_check::error::{LookupError, LookupResult};
use clean_truck_check::models::CountyLookup;
use clean_truck_check::resolvers::CountyResolver;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock county resolver for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockCountyResolver {
    counties: Arc<Mutex<HashMap<String, String>>>,
    failures: Arc<Mutex<HashMap<String, LookupError>>>,
    delay: Arc<Mutex<Duration>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockCountyResolver {
    pub fn new() -> Self {
        Self {
            counties: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(HashMap::new())),
            delay: Arc::new(Mutex::new(Duration::ZERO)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn add_county(&self, zip: &str, county: &str) {
        let mut counties = self.counties.lock().unwrap();
        counties.insert(zip.to_string(), county.to_string());
    }

    pub fn fail_with(&self, zip: &str, error: LookupError) {
        let mut failures = self.failures.lock().unwrap();
        failures.insert(zip.to_string(), error);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }

    pub fn get_call_count(&self, zip: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(zip).unwrap_or(&0)
    }

    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    fn track_call(&self, zip: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(zip.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockCountyResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CountyResolver for MockCountyResolver {
    async fn resolve_county(&self, zip: &ZipCode) -> LookupResult<CountyLookup> {
        self.track_call(zip.as_str());

        let delay = *self.delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.failures.lock().unwrap().get(zip.as_str()) {
            return Err(error.clone());
        }

        let counties = self.counties.lock().unwrap();
        counties
            .get(zip.as_str())
            .map(|county| CountyLookup::new(zip.clone(), county.clone()))
            .ok_or_else(|| LookupError::NotFound(zip.to_string()))
    }
}
