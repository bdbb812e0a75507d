//! MCP weather server that turns WeatherAPI.com observations into
//! advisory reports: per-city recommendations, fun facts, alerts, an
//! air-quality note, travel tips and a 1-10 weather score.

pub mod advisory;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod provider;
pub mod service;
