//! MCP tool handlers for the Clean Truck Check server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::domain::{format_for_display, to_tel_link};
use crate::error::VehicleLookupError;
use crate::metrics::Metrics;
use crate::routing::Region;
use crate::services::{RoutingService, VehicleService};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// Upper bound on ZIP codes accepted by one `route_zips` call.
const MAX_BATCH_ZIPS: usize = 50;

/// The MCP server exposing VIN validation and contact routing tools.
#[derive(Clone)]
pub struct CleanTruckCheckServer {
    routing_service: Arc<dyn RoutingService>,
    vehicle_service: Arc<dyn VehicleService>,
    metrics: Metrics,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for CleanTruckCheckServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "clean-truck-check".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for CARB Clean Truck Check - validates VINs, looks up vehicle compliance, and routes California counties and ZIP codes to the right contact number.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct VinParams {
    vin: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RouteCountyParams {
    #[serde(default)]
    county: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RouteZipParams {
    zip: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RouteZipsParams {
    zips: Vec<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ListCountyMappingsParams {
    /// "Coastal", "Coastal (Inland to Richmond)" or "Inland North"
    #[serde(default)]
    region: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FormatPhoneParams {
    phone: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn invalid_params(message: impl Into<String>) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(message.into()),
        data: None,
    }
}

fn vehicle_error(e: VehicleLookupError) -> McpError {
    match e {
        VehicleLookupError::InvalidVin(message) => invalid_params(message),
        other => to_mcp_error(other),
    }
}

/// Parse a region label, ignoring case and surrounding whitespace.
fn parse_region(label: &str) -> Result<Region, McpError> {
    let wanted = label.trim();
    Region::ALL
        .iter()
        .copied()
        .find(|r| r.label().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| {
            let known: Vec<&str> = Region::ALL.iter().map(|r| r.label()).collect();
            invalid_params(format!(
                "Unknown region '{}', expected one of: {}",
                wanted,
                known.join(", ")
            ))
        })
}

/// Display and dial forms of an arbitrary phone string.
fn phone_formats(phone: &str) -> serde_json::Value {
    let tel_link = to_tel_link(phone);
    serde_json::json!({
        "input": phone,
        "display": format_for_display(phone),
        "tel_link": tel_link,
        "tel_uri": format!("tel:{}", tel_link),
    })
}

fn json_result(value: &impl serde::Serialize) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

// Tool router implementation
#[tool_router]
impl CleanTruckCheckServer {
    /// Create a new server over the given services.
    pub fn new(
        routing_service: Arc<dyn RoutingService>,
        vehicle_service: Arc<dyn VehicleService>,
        metrics: Metrics,
    ) -> Self {
        Self {
            routing_service,
            vehicle_service,
            metrics,
            tool_router: Self::tool_router(),
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn log_metrics(&self) {
        tracing::debug!("Metrics: {:?}", self.metrics.summary());
    }

    /// Check the format of a VIN.
    #[tool(
        description = "Validate a vehicle identification number. Returns the normalized (trimmed, uppercased) VIN, whether it is valid, and a short message such as '12/17 characters' or 'Valid VIN format ✓'."
    )]
    async fn validate_vin(&self, params: Parameters<VinParams>) -> Result<CallToolResult, McpError> {
        let result = self.vehicle_service.validate(&params.0.vin);
        self.log_metrics();
        json_result(&result)
    }

    /// Validate a VIN and look up the vehicle's compliance record.
    #[tool(
        description = "Validate a VIN and look up the vehicle's CARB registration and compliance record (year, make, model, GVWR, fuel type, engine, compliance status and date, certification number)."
    )]
    async fn check_vehicle(
        &self,
        params: Parameters<VinParams>,
    ) -> Result<CallToolResult, McpError> {
        let vin = params.0.vin;
        tracing::info!("MCP Handler: check_vehicle called");

        let record = self
            .vehicle_service
            .check_vehicle(&vin)
            .await
            .map_err(|e| {
                tracing::warn!("check_vehicle failed: {}", e);
                vehicle_error(e)
            })?;

        let items: Vec<serde_json::Value> = record
            .display_items()
            .into_iter()
            .map(|(label, value)| serde_json::json!({ "label": label, "value": value }))
            .collect();

        json_result(&serde_json::json!({
            "vehicle": record,
            "display": items,
        }))
    }

    /// Route a county name to its contact number.
    #[tool(
        description = "Get the Clean Truck Check contact number for a California county name (exact, case-sensitive, e.g. 'Sacramento'). Unknown or missing counties get the default number, with suggestions for near misses."
    )]
    async fn route_county(
        &self,
        params: Parameters<RouteCountyParams>,
    ) -> Result<CallToolResult, McpError> {
        let routing = self.routing_service.route_county(params.0.county.as_deref());
        self.log_metrics();
        json_result(&routing)
    }

    /// Resolve a ZIP code to its county and route it.
    #[tool(
        description = "Get the contact number for a 5-digit California ZIP code. The ZIP is resolved to a county first; if that fails the default number is returned together with the lookup error."
    )]
    async fn route_zip(
        &self,
        params: Parameters<RouteZipParams>,
    ) -> Result<CallToolResult, McpError> {
        let routing = self.routing_service.route_zip(&params.0.zip).await;
        self.log_metrics();
        json_result(&routing)
    }

    /// Route several ZIP codes at once.
    #[tool(
        description = "Get contact numbers for several ZIP codes at once (up to 50). Lookups run concurrently and results keep the input order."
    )]
    async fn route_zips(
        &self,
        params: Parameters<RouteZipsParams>,
    ) -> Result<CallToolResult, McpError> {
        let zips = params.0.zips;
        if zips.len() > MAX_BATCH_ZIPS {
            return Err(invalid_params(format!(
                "Too many ZIP codes: {} (max {})",
                zips.len(),
                MAX_BATCH_ZIPS
            )));
        }

        let routings = self.routing_service.route_zips(&zips).await;
        self.log_metrics();
        json_result(&serde_json::json!({
            "count": routings.len(),
            "results": routings,
        }))
    }

    /// List every routed county with its number and region.
    #[tool(
        description = "List every California county with a dedicated contact number, sorted by name, optionally filtered by region ('Coastal', 'Coastal (Inland to Richmond)', 'Inland North'). Counties not listed use the default number."
    )]
    async fn list_county_mappings(
        &self,
        params: Parameters<ListCountyMappingsParams>,
    ) -> Result<CallToolResult, McpError> {
        let region = params.0.region.as_deref().map(parse_region).transpose()?;
        let mappings = self.routing_service.list_mappings(region);

        json_result(&serde_json::json!({
            "count": mappings.len(),
            "mappings": mappings,
        }))
    }

    /// Format a phone number for display and dialing.
    #[tool(
        description = "Format a phone number for display as '(AAA) BBB-CCCC' (10-digit numbers only; anything else is returned unchanged) and as a tel: link."
    )]
    async fn format_phone(
        &self,
        params: Parameters<FormatPhoneParams>,
    ) -> Result<CallToolResult, McpError> {
        json_result(&phone_formats(&params.0.phone))
    }
}
