//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub google_api_key: String,
    pub http_timeout_s: u64,
    /// Result cap passed to the station provider per checkpoint query.
    pub station_result_cap: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("FUELPLAN_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            google_api_key: env::var("GOOGLE_API_KEY").unwrap_or_default(),
            http_timeout_s: env::var("FUELPLAN_HTTP_TIMEOUT_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(15),
            station_result_cap: env::var("FUELPLAN_STATION_RESULT_CAP")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
        }
    }
}
