//! Geometry primitives: great-circle distance and encoded-polyline decoding.

use crate::models::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Great-circle distance between two coordinates in kilometers,
/// using the Haversine formula.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lng - a.lng).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Sum of pairwise haversine distances along a path, in kilometers.
pub fn path_length_km(points: &[Coordinate]) -> f64 {
    points.windows(2).map(|pair| haversine_km(pair[0], pair[1])).sum()
}

/// Decode a Google encoded polyline (1e-5 precision) into coordinates.
///
/// Best-effort: a truncated or malformed tail yields the points decoded
/// up to that position rather than an error.
pub fn decode_polyline(encoded: &str) -> Vec<Coordinate> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        let Some((dlat, next)) = decode_varint(bytes, index) else {
            break;
        };
        let Some((dlng, next)) = decode_varint(bytes, next) else {
            break;
        };
        index = next;
        lat += dlat;
        lng += dlng;
        points.push(Coordinate::new(lat as f64 * 1e-5, lng as f64 * 1e-5));
    }

    points
}

/// Encode coordinates into the Google polyline format (1e-5 precision).
pub fn encode_polyline(points: &[Coordinate]) -> String {
    let mut encoded = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;
    for point in points {
        let lat = (point.lat * 1e5).round() as i64;
        let lng = (point.lng * 1e5).round() as i64;
        encode_varint(lat - prev_lat, &mut encoded);
        encode_varint(lng - prev_lng, &mut encoded);
        prev_lat = lat;
        prev_lng = lng;
    }
    encoded
}

fn encode_varint(value: i64, out: &mut String) {
    let mut value = if value < 0 { !(value << 1) } else { value << 1 };
    while value >= 0x20 {
        out.push((((0x20 | (value & 0x1f)) + 63) as u8) as char);
        value >>= 5;
    }
    out.push(((value + 63) as u8) as char);
}

/// Decode one zigzag-encoded value starting at `index`.
/// Returns the value and the index of the next chunk.
fn decode_varint(bytes: &[u8], mut index: usize) -> Option<(i64, usize)> {
    let mut result: i64 = 0;
    let mut shift = 0u32;
    loop {
        let byte = *bytes.get(index)?;
        if !(63..=126).contains(&byte) {
            return None;
        }
        index += 1;
        let chunk = (byte - 63) as i64;
        // A value never spans more than 12 chunks; more means the
        // input is corrupt, and shifting further would overflow.
        if shift > 58 {
            return None;
        }
        result |= (chunk & 0x1f) << shift;
        if chunk & 0x20 == 0 {
            break;
        }
        shift += 5;
    }
    let value = if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    };
    Some((value, index))
}
