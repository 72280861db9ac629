//! Google Maps directions deep-link rendering.

use crate::models::TimelineEvent;

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1";
// `|` is a reserved character; the deep link wants it percent-encoded.
const WAYPOINT_SEPARATOR: &str = "%7C";

/// Render a directions deep link with every STOP as a waypoint, in
/// timeline (post-sort) order. WARNING events contribute nothing.
/// Pure function of its inputs.
pub fn navigation_url(origin: &str, destination: &str, timeline: &[TimelineEvent]) -> String {
    let waypoints: Vec<String> = timeline
        .iter()
        .filter_map(|event| match event {
            TimelineEvent::Stop { data, .. } => Some(format!(
                "{},{}",
                data.coordinates.lat, data.coordinates.lng
            )),
            TimelineEvent::Warning { .. } => None,
        })
        .collect();

    let mut url = format!(
        "{DIRECTIONS_BASE}&origin={}&destination={}",
        url_token(origin),
        url_token(destination)
    );
    if !waypoints.is_empty() {
        url.push_str("&waypoints=");
        url.push_str(&waypoints.join(WAYPOINT_SEPARATOR));
    }
    url
}

/// Trim, collapse inner whitespace to `+`, and percent-encode anything
/// outside the URL-safe set so a free-text address cannot break the
/// query string.
fn url_token(text: &str) -> String {
    let mut token = String::with_capacity(text.len());
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            token.push('+');
        }
        for byte in word.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b',' => {
                    token.push(byte as char)
                }
                _ => token.push_str(&format!("%{byte:02X}")),
            }
        }
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, StopDetails, WarningDetails};

    fn stop(lat: f64, lng: f64) -> TimelineEvent {
        TimelineEvent::Stop {
            start_km: 0.0,
            end_km: 200.0,
            data: StopDetails {
                name: "stop".to_string(),
                address: "addr".to_string(),
                coordinates: Coordinate::new(lat, lng),
            },
        }
    }

    fn warning() -> TimelineEvent {
        TimelineEvent::Warning {
            start_km: 200.0,
            end_km: 250.0,
            data: WarningDetails {
                message: "none".to_string(),
                coordinates: Coordinate::new(9.0, 9.0),
            },
        }
    }

    #[test]
    fn one_waypoint_per_stop_in_timeline_order() {
        let timeline = vec![stop(-23.5, -46.6), warning(), stop(-25.4, -49.2)];
        let url = navigation_url("Sao Paulo", "Porto Alegre", &timeline);
        assert!(url.contains("origin=Sao+Paulo"));
        assert!(url.contains("destination=Porto+Alegre"));
        assert!(url.contains("waypoints=-23.5,-46.6%7C-25.4,-49.2"));
    }

    #[test]
    fn no_stops_means_no_waypoints_parameter() {
        let url = navigation_url("A", "B", &[warning()]);
        assert!(!url.contains("waypoints"));
    }

    #[test]
    fn origin_and_destination_are_trimmed() {
        let url = navigation_url("  Sao Paulo ", " Rio de Janeiro  ", &[]);
        assert!(url.contains("origin=Sao+Paulo&destination=Rio+de+Janeiro"));
    }

    #[test]
    fn reserved_characters_in_addresses_are_escaped() {
        let url = navigation_url("Bar & Grill #12", "Praça da Sé", &[]);
        assert!(url.contains("origin=Bar+%26+Grill+%2312"));
        // Non-ASCII goes out as UTF-8 percent-escapes.
        assert!(url.contains("destination=Pra%C3%A7a+da+S%C3%A9"));
        // Only the two parameter joiners survive; the address `&` is gone.
        assert_eq!(url.matches('&').count(), 2);
    }
}
