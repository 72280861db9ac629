//! Per-checkpoint stop selection: pick the best candidate station or
//! fall back to a warning.

use std::cmp::Ordering;

use crate::models::{
    round2, Coordinate, FuelProfile, StationCandidate, StationStatus, StopDetails, TimelineEvent,
    WarningDetails,
};

/// Station searches never look further than 50 km out.
pub const MAX_SEARCH_RADIUS_M: f64 = 50_000.0;

/// Search radius for one checkpoint: the safety margin, capped at
/// [`MAX_SEARCH_RADIUS_M`].
pub fn search_radius_meters(fuel_safety_margin_km: f64) -> f64 {
    MAX_SEARCH_RADIUS_M.min(fuel_safety_margin_km * 1000.0)
}

/// Decide between a STOP and a WARNING for one checkpoint.
///
/// Candidates are ranked by distance from the checkpoint (missing
/// distance sorts last) and scanned first-fit: the first operational
/// candidate within the safety margin wins. Ties keep the provider's
/// order; the sort is stable.
///
/// Window anchoring differs between the branches on purpose: a STOP
/// covers `[index * range, (index + 1) * range]`, while a WARNING
/// covers `[(index + 1) * range, (index + 1) * range + margin]` -- the
/// rider has to stretch into the safety margin with no confirmed
/// station, so the warning window sits one range increment further.
pub fn resolve_checkpoint(
    index: usize,
    checkpoint: Coordinate,
    profile: &FuelProfile,
    mut candidates: Vec<StationCandidate>,
) -> TimelineEvent {
    let range_km = profile.effective_range_km();

    candidates.sort_by(|a, b| {
        let da = a.distance_meters.unwrap_or(f64::INFINITY);
        let db = b.distance_meters.unwrap_or(f64::INFINITY);
        da.partial_cmp(&db).unwrap_or(Ordering::Equal)
    });

    for candidate in candidates {
        if candidate.status != StationStatus::Operational {
            continue;
        }
        let distance_km = candidate
            .distance_meters
            .map(|m| m / 1000.0)
            .unwrap_or(f64::INFINITY);
        if distance_km <= profile.fuel_safety_margin_km {
            let start_km = round2(index as f64 * range_km);
            return TimelineEvent::Stop {
                start_km,
                end_km: round2(start_km + range_km),
                data: StopDetails {
                    name: candidate.name,
                    address: candidate.address,
                    coordinates: candidate.location,
                },
            };
        }
    }

    let start_km = (index as f64 + 1.0) * range_km;
    TimelineEvent::Warning {
        start_km,
        end_km: start_km + profile.fuel_safety_margin_km,
        data: WarningDetails {
            message: format!("No operational fuel station found near km {start_km:.2}."),
            coordinates: checkpoint,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> FuelProfile {
        FuelProfile::new(250.0, 50.0).unwrap()
    }

    fn station(name: &str, status: StationStatus, distance_meters: Option<f64>) -> StationCandidate {
        StationCandidate {
            name: name.to_string(),
            address: format!("{name} address"),
            location: Coordinate::new(-23.0, -46.0),
            status,
            distance_meters,
        }
    }

    #[test]
    fn search_radius_is_margin_capped_at_50km() {
        assert_eq!(search_radius_meters(30.0), 30_000.0);
        assert_eq!(search_radius_meters(50.0), 50_000.0);
        assert_eq!(search_radius_meters(80.0), 50_000.0);
    }

    #[test]
    fn picks_nearest_qualifying_candidate_not_nearest_candidate() {
        let candidates = vec![
            station("closed-near", StationStatus::ClosedTemporarily, Some(1_000.0)),
            station("open-far", StationStatus::Operational, Some(8_000.0)),
            station("open-near", StationStatus::Operational, Some(3_000.0)),
        ];
        let event = resolve_checkpoint(0, Coordinate::new(0.0, 0.0), &profile(), candidates);
        match event {
            TimelineEvent::Stop { start_km, end_km, data } => {
                assert_eq!(data.name, "open-near");
                assert_eq!(start_km, 0.0);
                assert_eq!(end_km, 200.0);
            }
            TimelineEvent::Warning { .. } => panic!("expected STOP"),
        }
    }

    #[test]
    fn no_candidates_yields_warning() {
        let event = resolve_checkpoint(0, Coordinate::new(1.0, 2.0), &profile(), Vec::new());
        match event {
            TimelineEvent::Warning { start_km, end_km, data } => {
                assert_eq!(start_km, 200.0);
                assert_eq!(end_km, 250.0);
                assert!(data.message.contains("200.00"), "message: {}", data.message);
                assert_eq!(data.coordinates, Coordinate::new(1.0, 2.0));
            }
            TimelineEvent::Stop { .. } => panic!("expected WARNING"),
        }
    }

    #[test]
    fn only_closed_or_distant_candidates_yield_warning() {
        let candidates = vec![
            station("closed", StationStatus::ClosedPermanently, Some(500.0)),
            // Operational but 60 km out, beyond the 50 km margin.
            station("too-far", StationStatus::Operational, Some(60_000.0)),
        ];
        let event = resolve_checkpoint(1, Coordinate::new(0.0, 0.0), &profile(), candidates);
        assert!(matches!(event, TimelineEvent::Warning { .. }));
    }

    #[test]
    fn missing_distance_sorts_last_and_never_qualifies() {
        let candidates = vec![
            station("no-distance", StationStatus::Operational, None),
            station("ranked", StationStatus::Operational, Some(4_000.0)),
        ];
        let event = resolve_checkpoint(0, Coordinate::new(0.0, 0.0), &profile(), candidates);
        match event {
            TimelineEvent::Stop { data, .. } => assert_eq!(data.name, "ranked"),
            TimelineEvent::Warning { .. } => panic!("expected STOP"),
        }

        let only_unranked = vec![station("no-distance", StationStatus::Operational, None)];
        let event = resolve_checkpoint(0, Coordinate::new(0.0, 0.0), &profile(), only_unranked);
        assert!(matches!(event, TimelineEvent::Warning { .. }));
    }

    #[test]
    fn equal_distances_keep_provider_order() {
        let candidates = vec![
            station("first", StationStatus::Operational, Some(2_000.0)),
            station("second", StationStatus::Operational, Some(2_000.0)),
        ];
        let event = resolve_checkpoint(0, Coordinate::new(0.0, 0.0), &profile(), candidates);
        match event {
            TimelineEvent::Stop { data, .. } => assert_eq!(data.name, "first"),
            TimelineEvent::Warning { .. } => panic!("expected STOP"),
        }
    }

    #[test]
    fn stop_windows_advance_with_checkpoint_index() {
        let candidates = vec![station("open", StationStatus::Operational, Some(1_000.0))];
        let event = resolve_checkpoint(2, Coordinate::new(0.0, 0.0), &profile(), candidates);
        match event {
            TimelineEvent::Stop { start_km, end_km, .. } => {
                assert_eq!(start_km, 400.0);
                assert_eq!(end_km, 600.0);
            }
            TimelineEvent::Warning { .. } => panic!("expected STOP"),
        }
    }

    /// Pins the deliberate asymmetry: for the same checkpoint index, a
    /// STOP window starts at `index * range` while a WARNING window
    /// starts at `(index + 1) * range`.
    #[test]
    fn warning_window_is_anchored_one_range_step_past_the_stop_window() {
        let p = profile();
        let at = Coordinate::new(0.0, 0.0);

        let stop = resolve_checkpoint(
            1,
            at,
            &p,
            vec![station("open", StationStatus::Operational, Some(1_000.0))],
        );
        let warning = resolve_checkpoint(1, at, &p, Vec::new());

        assert_eq!(stop.start_km(), 200.0);
        assert_eq!(stop.end_km(), 400.0);
        assert_eq!(warning.start_km(), 400.0);
        assert_eq!(warning.end_km(), 450.0);
    }
}
