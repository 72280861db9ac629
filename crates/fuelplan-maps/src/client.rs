//! Google Maps HTTP client: Routes API for route computation, Places
//! API for nearby fuel stations.

use anyhow::{Context, Result};
use fuelplan_core::models::{Coordinate, StationCandidate, StationStatus};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const ROUTES_URL: &str = "https://routes.googleapis.com/directions/v2:computeRoutes";
const PLACES_URL: &str = "https://places.googleapis.com/v1/places:searchNearby";

const ROUTE_FIELD_MASK: &str =
    "routes.distanceMeters,routes.duration,routes.polyline.encodedPolyline";
const PLACES_FIELD_MASK: &str = "places.displayName,places.formattedAddress,places.location,\
     places.businessStatus,routingSummaries";

/// A computed route before polyline decoding.
#[derive(Debug, Clone)]
pub struct ComputedRoute {
    pub distance_meters: f64,
    pub encoded_polyline: String,
}

/// HTTP client for the Google Maps Routes and Places APIs.
///
/// Owns one connection pool for the process lifetime; construct it once
/// and share it.
pub struct MapsClient {
    client: Client,
    api_key: String,
    routes_url: String,
    places_url: String,
}

impl MapsClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .pool_max_idle_per_host(5)
                .build()
                .expect("Failed to create HTTP client"),
            api_key: api_key.into(),
            routes_url: ROUTES_URL.to_string(),
            places_url: PLACES_URL.to_string(),
        }
    }

    /// Compute a two-wheeler route between two free-text addresses.
    ///
    /// `Ok(None)` means the provider answered but found no route; that
    /// is a valid response, not an error.
    pub async fn compute_motorcycle_route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Option<ComputedRoute>> {
        let payload = json!({
            "origin": { "address": origin },
            "destination": { "address": destination },
            "travelMode": "TWO_WHEELER",
            "routingPreference": "TRAFFIC_UNAWARE"
        });

        let response = self
            .client
            .post(&self.routes_url)
            .header("Content-Type", "application/json")
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", ROUTE_FIELD_MASK)
            .json(&payload)
            .send()
            .await
            .context("Failed to send route computation request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Route computation failed: {} {}",
                status,
                body
            ));
        }

        let payload: RoutesResponse = response
            .json()
            .await
            .context("Failed to parse route computation response")?;

        let route = payload.routes.into_iter().next();
        if route.is_none() {
            tracing::debug!("Route computation returned no routes for {origin} -> {destination}");
        }
        Ok(route.map(|route| ComputedRoute {
            distance_meters: route.distance_meters,
            encoded_polyline: route.polyline.encoded_polyline,
        }))
    }

    /// Search for fuel stations around a point, two-wheeler travel mode.
    ///
    /// Places without a routing-summary leg are dropped; the remaining
    /// candidates carry the first leg's travel distance when present.
    pub async fn find_nearby_fuel_stations(
        &self,
        center: Coordinate,
        radius_meters: f64,
        max_count: u32,
    ) -> Result<Vec<StationCandidate>> {
        let payload = json!({
            "includedTypes": ["gas_station"],
            "maxResultCount": max_count,
            "locationRestriction": {
                "circle": {
                    "center": { "latitude": center.lat, "longitude": center.lng },
                    "radius": radius_meters
                }
            },
            "routingParameters": {
                "origin": { "latitude": center.lat, "longitude": center.lng },
                "travelMode": "TWO_WHEELER"
            }
        });

        let response = self
            .client
            .post(&self.places_url)
            .header("Content-Type", "application/json")
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", PLACES_FIELD_MASK)
            .json(&payload)
            .send()
            .await
            .context("Failed to send station search request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Station search failed: {} {}", status, body));
        }

        let payload: SearchNearbyResponse = response
            .json()
            .await
            .context("Failed to parse station search response")?;

        let candidates = pair_places_with_routing(payload);
        tracing::debug!(
            "Station search at ({}, {}) returned {} candidate(s)",
            center.lat,
            center.lng,
            candidates.len()
        );
        Ok(candidates)
    }
}

/// Zip places with their routing summaries, keeping only entries whose
/// summary has at least one leg.
fn pair_places_with_routing(response: SearchNearbyResponse) -> Vec<StationCandidate> {
    let mut summaries = response.routing_summaries.into_iter();
    response
        .places
        .into_iter()
        .filter_map(|place| {
            let summary = summaries.next()?;
            let leg = summary.legs.into_iter().next()?;
            Some(StationCandidate {
                name: place.display_name.text,
                address: place.formatted_address.unwrap_or_default(),
                location: Coordinate::new(place.location.latitude, place.location.longitude),
                status: place.business_status,
                distance_meters: leg.distance_meters,
            })
        })
        .collect()
}

// === Wire DTOs ===

#[derive(Debug, Deserialize)]
struct RoutesResponse {
    #[serde(default)]
    routes: Vec<RouteDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteDto {
    distance_meters: f64,
    polyline: PolylineDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PolylineDto {
    encoded_polyline: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchNearbyResponse {
    #[serde(default)]
    places: Vec<PlaceDto>,
    #[serde(default)]
    routing_summaries: Vec<RoutingSummaryDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceDto {
    display_name: DisplayNameDto,
    formatted_address: Option<String>,
    location: LocationDto,
    #[serde(default)]
    business_status: StationStatus,
}

#[derive(Debug, Deserialize)]
struct DisplayNameDto {
    text: String,
}

#[derive(Debug, Deserialize)]
struct LocationDto {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct RoutingSummaryDto {
    #[serde(default)]
    legs: Vec<RoutingLegDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoutingLegDto {
    distance_meters: Option<f64>,
}
