//! Shared library surface for the fuelplan server and its tests.

pub mod api;
pub mod config;
pub mod error;
pub mod planner;
pub mod state;
