//! Clean Truck Check MCP Server - Main entry point
//!
//! Serves VIN validation, vehicle lookup, and county contact routing as MCP
//! tools over stdio.

use anyhow::{Context, Result};
use clean_truck_check::client::{AsyncCountyLookupClientImpl, CountyLookupClient};
use clean_truck_check::resolvers::{
    CountyResolver, HttpCountyResolver, MockVehicleLookup, StaticCountyResolver, VehicleLookup,
};
use clean_truck_check::services::{
    RoutingService, RoutingServiceImpl, VehicleService, VehicleServiceImpl,
};
use clean_truck_check::{
    CleanTruckCheckServer, Config, Metrics, PhoneRouter, RoutingTable, VinValidator,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Routing table: file override or built-in sets
    let table = match &config.routing_table_path {
        Some(path) => {
            info!("Loading routing table from {}", path.display());
            Arc::new(
                RoutingTable::from_json_file(path)
                    .with_context(|| format!("Invalid routing table {}", path.display()))?,
            )
        }
        None => RoutingTable::builtin(),
    };

    let gaps = table.coverage_gaps();
    if !gaps.is_empty() {
        warn!(
            "{} California counties use the default number: {}",
            gaps.len(),
            gaps.join(", ")
        );
    }

    let latency = Duration::from_millis(config.simulated_latency_ms);
    let lookup_timeout = Duration::from_millis(config.lookup_timeout_ms);

    // County resolver: HTTP service when configured, sample table otherwise
    let resolver: Arc<dyn CountyResolver> = match CountyLookupClient::from_config(&config) {
        Some(client) => {
            info!(
                "Using county lookup service at {}",
                config.county_lookup_url.as_deref().unwrap_or_default()
            );
            Arc::new(HttpCountyResolver::new(Arc::new(
                AsyncCountyLookupClientImpl::new(client),
            )))
        }
        None => {
            info!("No COUNTY_LOOKUP_URL set, using the sample ZIP table");
            Arc::new(StaticCountyResolver::sample(latency))
        }
    };
    let vehicle_lookup = Arc::new(MockVehicleLookup::new(latency)) as Arc<dyn VehicleLookup>;

    let metrics = Metrics::new();
    let routing_service = Arc::new(RoutingServiceImpl::new(
        PhoneRouter::new(table),
        resolver,
        lookup_timeout,
        metrics.clone(),
    )) as Arc<dyn RoutingService>;
    let vehicle_service = Arc::new(VehicleServiceImpl::new(
        VinValidator::new(config.vin_rule),
        vehicle_lookup,
        lookup_timeout,
        metrics.clone(),
    )) as Arc<dyn VehicleService>;

    let server = CleanTruckCheckServer::new(routing_service, vehicle_service, metrics.clone());

    info!(
        "Clean Truck Check server initialized (VIN rule: {}, lookup timeout: {} ms)",
        config.vin_rule, config.lookup_timeout_ms
    );

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    clean_truck_check::server::run_server(server).await?;

    info!("Shutdown complete: {:?}", metrics.summary());
    Ok(())
}
