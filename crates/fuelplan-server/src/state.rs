//! Process-wide shared state.

use std::time::Duration;

use fuelplan_maps::MapsClient;

use crate::config::Config;

/// Long-lived resources shared by every request: the configuration and
/// the Maps client with its connection pool. Constructed once at
/// startup and released at shutdown.
pub struct AppState {
    pub config: Config,
    pub maps: MapsClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let maps = MapsClient::new(
            config.google_api_key.clone(),
            Duration::from_secs(config.http_timeout_s),
        );
        Self { config, maps }
    }
}
