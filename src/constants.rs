/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("weather-advisor-mcp/", env!("CARGO_PKG_VERSION"));

/// WeatherAPI.com base URL
pub const WEATHER_API_BASE: &str = "https://api.weatherapi.com/v1";

/// Default timeout for a single provider request, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Forecast day bounds accepted by `get_weather_forecast`
pub const MIN_FORECAST_DAYS: u8 = 1;
pub const MAX_FORECAST_DAYS: u8 = 7;
pub const DEFAULT_FORECAST_DAYS: u8 = 3;

/// Longest slice of an error body quoted back to the caller
pub const MAX_ERROR_BODY: usize = 200;
