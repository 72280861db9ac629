//! Core data models for the refuel stop planner.

use serde::{Deserialize, Serialize};

/// A WGS-84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A decoded route: total distance plus the ordered path from origin
/// to destination. An absent route is `Option::None` at the gateway
/// boundary, never an empty point list.
#[derive(Debug, Clone)]
pub struct RouteGeometry {
    pub distance_meters: f64,
    pub points: Vec<Coordinate>,
}

impl RouteGeometry {
    /// Total route distance in kilometers, rounded to two decimals.
    pub fn total_km(&self) -> f64 {
        round2(self.distance_meters / 1000.0)
    }
}

/// The motorcycle's fuel characteristics, both in kilometers.
///
/// `fuel_safety_margin_km` is the reserve the rider keeps: it bounds
/// both the station search radius and the maximum acceptable station
/// distance from a checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelProfile {
    pub fuel_autonomy_km: f64,
    pub fuel_safety_margin_km: f64,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("fuel autonomy must be a positive number of kilometers")]
    InvalidAutonomy,
    #[error("fuel safety margin must be a positive number of kilometers")]
    InvalidMargin,
    #[error("fuel safety margin must be smaller than fuel autonomy")]
    NoEffectiveRange,
}

impl FuelProfile {
    /// Validate a profile. A non-positive effective range is a
    /// configuration error, rejected here rather than discovered
    /// mid-route.
    pub fn new(fuel_autonomy_km: f64, fuel_safety_margin_km: f64) -> Result<Self, ProfileError> {
        if !fuel_autonomy_km.is_finite() || fuel_autonomy_km <= 0.0 {
            return Err(ProfileError::InvalidAutonomy);
        }
        if !fuel_safety_margin_km.is_finite() || fuel_safety_margin_km <= 0.0 {
            return Err(ProfileError::InvalidMargin);
        }
        if fuel_autonomy_km <= fuel_safety_margin_km {
            return Err(ProfileError::NoEffectiveRange);
        }
        Ok(Self {
            fuel_autonomy_km,
            fuel_safety_margin_km,
        })
    }

    /// Distance the vehicle can travel before it must start seeking fuel.
    pub fn effective_range_km(&self) -> f64 {
        self.fuel_autonomy_km - self.fuel_safety_margin_km
    }
}

/// Operational status reported by the station provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StationStatus {
    Operational,
    ClosedTemporarily,
    ClosedPermanently,
    /// Anything the provider reports that we do not model.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A fuel station returned by the station provider for one checkpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationCandidate {
    pub name: String,
    pub address: String,
    pub location: Coordinate,
    pub status: StationStatus,
    /// Travel distance from the checkpoint, when the provider paired
    /// the place with a routing summary leg.
    pub distance_meters: Option<f64>,
}

/// One entry of the planned timeline: either a resolved refuel stop or
/// a warning that no qualifying station was found near a checkpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimelineEvent {
    Stop {
        start_km: f64,
        end_km: f64,
        data: StopDetails,
    },
    Warning {
        start_km: f64,
        end_km: f64,
        data: WarningDetails,
    },
}

impl TimelineEvent {
    pub fn start_km(&self) -> f64 {
        match self {
            TimelineEvent::Stop { start_km, .. } | TimelineEvent::Warning { start_km, .. } => {
                *start_km
            }
        }
    }

    pub fn end_km(&self) -> f64 {
        match self {
            TimelineEvent::Stop { end_km, .. } | TimelineEvent::Warning { end_km, .. } => *end_km,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopDetails {
    pub name: String,
    pub address: String,
    pub coordinates: Coordinate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningDetails {
    pub message: String,
    pub coordinates: Coordinate,
}

/// The planner's sole externally visible artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlan {
    pub total_distance_km: f64,
    pub navigation_url: String,
    pub timeline: Vec<TimelineEvent>,
}

/// Round to two decimal places (kilometer values in API responses).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
