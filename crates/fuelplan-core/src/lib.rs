pub mod checkpoints;
pub mod geo;
pub mod models;
pub mod navigation;
pub mod resolver;
pub mod timeline;

pub use checkpoints::extract_checkpoints;
pub use geo::{decode_polyline, encode_polyline, haversine_km, path_length_km};
pub use models::{
    Coordinate, FuelProfile, ProfileError, RouteGeometry, RoutePlan, StationCandidate,
    StationStatus, StopDetails, TimelineEvent, WarningDetails,
};
pub use navigation::navigation_url;
pub use resolver::{resolve_checkpoint, search_radius_meters};
pub use timeline::assemble;
