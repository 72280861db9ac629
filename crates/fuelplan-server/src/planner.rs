//! Route-plan orchestration: one route computation, checkpoint
//! extraction, fanned-out station lookups, and timeline assembly.

use std::future::Future;

use anyhow::Result;
use futures::future::join_all;
use serde::Deserialize;

use fuelplan_core::models::{Coordinate, FuelProfile, RouteGeometry, RoutePlan, StationCandidate};
use fuelplan_core::{
    assemble, decode_polyline, extract_checkpoints, navigation_url, resolve_checkpoint,
    search_radius_meters,
};
use fuelplan_maps::{ComputedRoute, MapsClient};

use crate::config::Config;
use crate::error::PlanError;

#[derive(Debug, Clone, Deserialize)]
pub struct RoutePlanRequest {
    pub origin: String,
    pub destination: String,
    pub motorcycle: MotorcycleProfile,
}

/// Fuel profile as it appears on the wire, both fields in kilometers.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MotorcycleProfile {
    pub fuel_autonomy: f64,
    pub fuel_safety_margin: f64,
}

/// Route computation collaborator.
pub trait RouteProvider {
    fn motorcycle_route(
        &self,
        origin: &str,
        destination: &str,
    ) -> impl Future<Output = Result<Option<ComputedRoute>>> + Send;
}

/// Station search collaborator.
pub trait StationProvider {
    fn fuel_stations_near(
        &self,
        center: Coordinate,
        radius_meters: f64,
        max_count: u32,
    ) -> impl Future<Output = Result<Vec<StationCandidate>>> + Send;
}

impl RouteProvider for MapsClient {
    async fn motorcycle_route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Option<ComputedRoute>> {
        self.compute_motorcycle_route(origin, destination).await
    }
}

impl StationProvider for MapsClient {
    async fn fuel_stations_near(
        &self,
        center: Coordinate,
        radius_meters: f64,
        max_count: u32,
    ) -> Result<Vec<StationCandidate>> {
        self.find_nearby_fuel_stations(center, radius_meters, max_count)
            .await
    }
}

/// Plan one route.
///
/// The initial route computation is the only fatal step: a transport
/// failure there is logged and reported as "route not found", matching
/// the provider's own "no routes" answer. Everything after it degrades
/// per checkpoint instead of failing the request.
pub async fn plan_route<R, S>(
    routes: &R,
    stations: &S,
    config: &Config,
    request: RoutePlanRequest,
) -> Result<RoutePlan, PlanError>
where
    R: RouteProvider + Sync,
    S: StationProvider + Sync,
{
    let profile = FuelProfile::new(
        request.motorcycle.fuel_autonomy,
        request.motorcycle.fuel_safety_margin,
    )?;

    let route = match routes
        .motorcycle_route(&request.origin, &request.destination)
        .await
    {
        Ok(Some(route)) => route,
        Ok(None) => return Err(PlanError::RouteNotFound),
        Err(err) => {
            tracing::error!("Route computation failed: {err:#}");
            return Err(PlanError::RouteNotFound);
        }
    };

    let geometry = RouteGeometry {
        distance_meters: route.distance_meters,
        points: decode_polyline(&route.encoded_polyline),
    };
    let checkpoints = extract_checkpoints(&geometry.points, profile.effective_range_km());
    let radius_meters = search_radius_meters(profile.fuel_safety_margin_km);
    let result_cap = config.station_result_cap;

    // Checkpoint windows derive from the checkpoint index, not from
    // prior station choices, so the lookups can run concurrently
    // without changing outcomes. join_all keeps route order.
    let events = join_all(checkpoints.iter().enumerate().map(|(index, &checkpoint)| {
        let profile = profile;
        async move {
            let candidates = match stations
                .fuel_stations_near(checkpoint, radius_meters, result_cap)
                .await
            {
                Ok(candidates) => candidates,
                Err(err) => {
                    tracing::warn!(
                        "Station lookup failed at checkpoint {index}, degrading to warning: {err:#}"
                    );
                    Vec::new()
                }
            };
            resolve_checkpoint(index, checkpoint, &profile, candidates)
        }
    }))
    .await;

    let timeline = assemble(events);
    let navigation_url = navigation_url(&request.origin, &request.destination, &timeline);

    Ok(RoutePlan {
        total_distance_km: geometry.total_km(),
        navigation_url,
        timeline,
    })
}
