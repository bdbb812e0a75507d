use clap::Parser;
use std::time::Duration;

use crate::constants::{DEFAULT_TIMEOUT_SECS, WEATHER_API_BASE};
use crate::models::OutputMode;

/// Runtime settings, read from flags or the environment.
#[derive(Debug, Parser)]
#[command(name = "weather-advisor-mcp", version, about = "MCP weather advisory server over stdio")]
pub struct Config {
    /// WeatherAPI.com API key
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Base URL of the WeatherAPI.com v1 API
    #[arg(long, env = "WEATHER_API_BASE_URL", default_value = WEATHER_API_BASE)]
    pub base_url: String,

    /// HTTP timeout for provider requests, in seconds
    #[arg(
        long,
        env = "WEATHER_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Default report format for get_current_weather
    #[arg(long, env = "WEATHER_OUTPUT", value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
