//! Final ordering of timeline events.

use std::cmp::Ordering;

use crate::models::TimelineEvent;

/// Order events ascending by `end_km`. The sort is stable, so events
/// with equal `end_km` keep their checkpoint-processing order. No
/// dedup and no merging of adjacent same-type events.
pub fn assemble(mut events: Vec<TimelineEvent>) -> Vec<TimelineEvent> {
    events.sort_by(|a, b| {
        a.end_km()
            .partial_cmp(&b.end_km())
            .unwrap_or(Ordering::Equal)
    });
    events
}
