//! Google Maps API client.
//!
//! Handles all communication with the Routes and Places endpoints;
//! the public surface speaks `fuelplan-core` types.

pub mod client;

pub use client::{ComputedRoute, MapsClient};
