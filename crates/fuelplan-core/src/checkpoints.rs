//! Converts a continuous route path into discrete refuel checkpoints.

use crate::geo::haversine_km;
use crate::models::Coordinate;

/// Walk the path accumulating segment distances and emit a checkpoint
/// every time the accumulator reaches the effective range.
///
/// The accumulator resets to zero on emission; overshoot beyond the
/// range is discarded. Each checkpoint is the far end of the segment
/// in which the range ran out, which approximates "range exhausted
/// somewhere in this segment". A route shorter than the range yields
/// no checkpoints.
pub fn extract_checkpoints(points: &[Coordinate], effective_range_km: f64) -> Vec<Coordinate> {
    let mut checkpoints = Vec::new();
    let mut travelled_km = 0.0;

    for pair in points.windows(2) {
        travelled_km += haversine_km(pair[0], pair[1]);
        if travelled_km >= effective_range_km {
            checkpoints.push(pair[1]);
            travelled_km = 0.0;
        }
    }

    checkpoints
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Straight path along the equator; each step is ~111.19 km.
    fn equator_path(steps: usize) -> Vec<Coordinate> {
        (0..=steps)
            .map(|i| Coordinate::new(0.0, i as f64))
            .collect()
    }

    #[test]
    fn short_route_yields_no_checkpoints() {
        let path = equator_path(1); // ~111 km
        assert!(extract_checkpoints(&path, 200.0).is_empty());
    }

    #[test]
    fn emits_checkpoint_when_range_exhausted() {
        let path = equator_path(3); // ~334 km
        let checkpoints = extract_checkpoints(&path, 200.0);
        assert_eq!(checkpoints.len(), 1);
        // Range runs out in the second segment; its far end is emitted.
        assert_eq!(checkpoints[0], Coordinate::new(0.0, 2.0));
    }

    #[test]
    fn accumulator_resets_after_emission() {
        let path = equator_path(8); // ~890 km
        let checkpoints = extract_checkpoints(&path, 200.0);
        // 200 km is exhausted every 2 segments: checkpoints at lon 2, 4, 6, 8.
        assert_eq!(checkpoints.len(), 4);
        assert_eq!(checkpoints[1], Coordinate::new(0.0, 4.0));
        assert_eq!(checkpoints[3], Coordinate::new(0.0, 8.0));
    }

    #[test]
    fn checkpoint_count_is_monotone_in_route_length() {
        let mut previous = 0;
        for steps in 1..=12 {
            let count = extract_checkpoints(&equator_path(steps), 250.0).len();
            assert!(count >= previous, "count dropped at {steps} steps");
            previous = count;
        }
    }

    #[test]
    fn two_point_route_longer_than_range_emits_endpoint() {
        let path = vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 3.0)];
        let checkpoints = extract_checkpoints(&path, 200.0);
        assert_eq!(checkpoints, vec![Coordinate::new(0.0, 3.0)]);
    }
}
