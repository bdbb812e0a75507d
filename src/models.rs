use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// WeatherAPI.com Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct WaLocation {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub region: String,
}

#[derive(Debug, Deserialize)]
pub struct WaCondition {
    pub text: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub struct WaCurrent {
    pub temp_c: f64,
    pub temp_f: f64,
    #[serde(rename = "feelslike_c")]
    pub feels_like_c: f64,
    #[serde(rename = "feelslike_f")]
    pub feels_like_f: f64,
    pub condition: WaCondition,
    pub humidity: u8,
    pub wind_kph: f64,
    pub wind_mph: f64,
    #[serde(default)]
    pub wind_dir: String,
    #[serde(default)]
    pub gust_kph: f64,
    pub pressure_mb: f64,
    #[serde(rename = "vis_km")]
    pub visibility_km: Option<f64>,
    pub uv: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct WaCurrentResponse {
    pub location: WaLocation,
    pub current: WaCurrent,
}

#[derive(Debug, Deserialize)]
pub struct WaDay {
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    #[serde(default)]
    pub avghumidity: f64,
    #[serde(default)]
    pub daily_chance_of_rain: f64,
    pub condition: WaCondition,
}

#[derive(Debug, Deserialize)]
pub struct WaForecastDay {
    pub date: String,
    pub day: WaDay,
}

#[derive(Debug, Deserialize)]
pub struct WaForecast {
    pub forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
pub struct WaForecastResponse {
    pub location: WaLocation,
    pub forecast: WaForecast,
}

// ============================================================================
// Domain Models
// ============================================================================

/// Current conditions for one location, as reported by the provider.
///
/// Unit pairs (C/F, kph/mph) come straight from the provider and are never
/// recomputed here.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub location_name: String,
    pub country: String,
    pub region: Option<String>,
    pub temperature_c: f64,
    pub temperature_f: f64,
    pub feels_like_c: f64,
    pub feels_like_f: f64,
    pub condition_text: String,
    pub condition_icon: String,
    pub humidity_pct: u8,
    pub wind_speed_kph: f64,
    pub wind_speed_mph: f64,
    pub wind_direction: String,
    pub gust_kph: f64,
    pub pressure_mb: f64,
    pub visibility_km: Option<f64>,
    pub uv_index: Option<f64>,
}

impl From<WaCurrentResponse> for WeatherObservation {
    fn from(raw: WaCurrentResponse) -> Self {
        let region = Some(raw.location.region).filter(|r| !r.trim().is_empty());
        let current = raw.current;

        Self {
            location_name: raw.location.name,
            country: raw.location.country,
            region,
            temperature_c: current.temp_c,
            temperature_f: current.temp_f,
            feels_like_c: current.feels_like_c,
            feels_like_f: current.feels_like_f,
            condition_text: current.condition.text,
            condition_icon: current.condition.icon,
            humidity_pct: current.humidity.min(100),
            wind_speed_kph: current.wind_kph,
            wind_speed_mph: current.wind_mph,
            wind_direction: current.wind_dir,
            gust_kph: current.gust_kph,
            pressure_mb: current.pressure_mb,
            visibility_km: current.visibility_km,
            uv_index: current.uv,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: String,
    pub max_temp_c: f64,
    pub max_temp_f: f64,
    pub min_temp_c: f64,
    pub min_temp_f: f64,
    pub condition_text: String,
    pub avg_humidity_pct: f64,
    pub chance_of_rain_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub location_name: String,
    pub country: String,
    pub days: Vec<ForecastDay>,
}

impl From<WaForecastResponse> for Forecast {
    fn from(raw: WaForecastResponse) -> Self {
        let days = raw
            .forecast
            .forecastday
            .into_iter()
            .map(|d| ForecastDay {
                date: d.date,
                max_temp_c: d.day.maxtemp_c,
                max_temp_f: d.day.maxtemp_f,
                min_temp_c: d.day.mintemp_c,
                min_temp_f: d.day.mintemp_f,
                condition_text: d.day.condition.text,
                avg_humidity_pct: d.day.avghumidity,
                chance_of_rain_pct: d.day.daily_chance_of_rain,
            })
            .collect();

        Self {
            location_name: raw.location.name,
            country: raw.location.country,
            days,
        }
    }
}

/// Temperature unit used when rendering reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "\u{00b0}C",
            Self::Fahrenheit => "\u{00b0}F",
        }
    }

    /// Picks the provider value matching this unit.
    pub fn pick(&self, celsius: f64, fahrenheit: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => fahrenheit,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "celsius" => Ok(Self::Celsius),
            "fahrenheit" => Ok(Self::Fahrenheit),
            other => Err(format!(
                "unknown unit '{other}', expected 'celsius' or 'fahrenheit'"
            )),
        }
    }
}

/// Report flavour produced by `get_current_weather`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Html,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Html => "html",
        })
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            other => Err(format!("unknown format '{other}', expected 'text' or 'html'")),
        }
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

// `city` is optional at the schema level so that a missing value reaches the
// tool and comes back as a tool error instead of a protocol error.

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct GetCurrentWeatherRequest {
    #[schemars(description = "City name to get weather for (required, e.g. Tokyo, London, New York)")]
    #[serde(default)]
    pub city: Option<String>,
    #[schemars(description = "Temperature units: 'celsius' (default) or 'fahrenheit'")]
    #[serde(default)]
    pub units: Option<String>,
    #[schemars(description = "Report format: 'text' or 'html' (defaults to the server setting)")]
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    #[schemars(description = "City name to get the forecast for (required)")]
    #[serde(default)]
    pub city: Option<String>,
    // A JSON number of any kind, so `3.0` is accepted and `3.5` becomes a tool error
    #[schemars(description = "Number of forecast days, a whole number from 1 to 7 (default 3)")]
    #[serde(default)]
    pub days: Option<f64>,
    #[schemars(description = "Temperature units: 'celsius' (default) or 'fahrenheit'")]
    #[serde(default)]
    pub units: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct CityRequest {
    #[schemars(description = "City name (required)")]
    #[serde(default)]
    pub city: Option<String>,
}
