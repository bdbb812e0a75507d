use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::advisory::AdvisoryBundle;
use crate::constants::{DEFAULT_FORECAST_DAYS, MAX_FORECAST_DAYS, MIN_FORECAST_DAYS};
use crate::error::ToolError;
use crate::formatters::{
    format_air_quality, format_forecast, format_weather_alerts, format_weather_report,
};
use crate::models::{
    CityRequest, GetCurrentWeatherRequest, GetForecastRequest, OutputMode, TemperatureUnit,
};
use crate::provider::WeatherProvider;

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    provider: Arc<dyn WeatherProvider>,
    default_mode: OutputMode,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service on top of `provider`.
    ///
    /// `default_mode` applies when a `get_current_weather` call leaves
    /// `format` unset.
    pub fn new(provider: Arc<dyn WeatherProvider>, default_mode: OutputMode) -> Self {
        Self {
            provider,
            default_mode,
            tool_router: Self::tool_router(),
        }
    }

    /// Validates the request, fetches current conditions and renders the advisory report
    pub async fn current_weather_report(
        &self,
        request: GetCurrentWeatherRequest,
    ) -> Result<String, ToolError> {
        let city = require_city(request.city.as_deref())?;
        let unit = parse_units(request.units.as_deref())?;
        let mode = match request.format.as_deref() {
            None => self.default_mode,
            Some(raw) => raw
                .parse::<OutputMode>()
                .map_err(|reason| ToolError::invalid("format", reason))?,
        };

        tracing::info!("Getting current weather for {} ({:?}, {})", city, unit, mode);

        let obs = self
            .provider
            .current(city)
            .await
            .map_err(|source| ToolError::Provider {
                city: city.to_string(),
                source,
            })?;

        let bundle = AdvisoryBundle::build(city, &obs);
        Ok(format_weather_report(&obs, &bundle, unit, mode, chrono::Utc::now()))
    }

    /// Validates the request and renders a multi-day forecast
    pub async fn forecast_report(&self, request: GetForecastRequest) -> Result<String, ToolError> {
        let city = require_city(request.city.as_deref())?;
        let days = parse_days(request.days)?;
        let unit = parse_units(request.units.as_deref())?;

        tracing::info!("Getting {}-day forecast for {}", days, city);

        let forecast = self
            .provider
            .forecast(city, days)
            .await
            .map_err(|source| ToolError::Provider {
                city: city.to_string(),
                source,
            })?;

        Ok(format_forecast(&forecast, usize::from(days), unit))
    }

    /// Static air quality summary for a city
    pub async fn air_quality_report(&self, request: CityRequest) -> Result<String, ToolError> {
        let city = require_city(request.city.as_deref())?;
        tracing::info!("Getting air quality for {}", city);
        Ok(format_air_quality(city))
    }

    /// Static weather alert summary for a city
    pub async fn alerts_report(&self, request: CityRequest) -> Result<String, ToolError> {
        let city = require_city(request.city.as_deref())?;
        tracing::info!("Getting weather alerts for {}", city);
        Ok(format_weather_alerts(city))
    }
}

/// Tool failures are reported in-band so the caller sees the message.
fn into_tool_result(tool: &str, result: Result<String, ToolError>) -> CallToolResult {
    match result {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => {
            tracing::warn!("{} failed: {}", tool, err);
            CallToolResult::error(vec![Content::text(err.to_string())])
        }
    }
}

fn require_city(city: Option<&str>) -> Result<&str, ToolError> {
    match city.map(str::trim) {
        Some(city) if !city.is_empty() => Ok(city),
        _ => Err(ToolError::MissingArgument("city")),
    }
}

fn parse_units(units: Option<&str>) -> Result<TemperatureUnit, ToolError> {
    match units {
        None => Ok(TemperatureUnit::default()),
        Some(raw) => raw
            .parse::<TemperatureUnit>()
            .map_err(|reason| ToolError::invalid("units", reason)),
    }
}

fn parse_days(days: Option<f64>) -> Result<u8, ToolError> {
    let Some(days) = days else {
        return Ok(DEFAULT_FORECAST_DAYS);
    };
    let bounds = f64::from(MIN_FORECAST_DAYS)..=f64::from(MAX_FORECAST_DAYS);
    if days.fract() != 0.0 || !bounds.contains(&days) {
        return Err(ToolError::invalid(
            "days",
            format!(
                "must be a whole number from {MIN_FORECAST_DAYS} to {MAX_FORECAST_DAYS}, got {days}"
            ),
        ));
    }
    // Whole and within 1..=7, so the cast is exact
    Ok(days as u8)
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather-advisor-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather advisory service powered by WeatherAPI.com. \
                Tools: get_current_weather (conditions plus recommendations, fun facts, \
                alerts and a weather score), get_weather_forecast (1-7 days), \
                get_air_quality and get_weather_alerts."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Current conditions with the full advisory report
    #[tool(description = "Get current weather for a city with location recommendations, fun facts, weather alerts, a weather score and travel tips. Optional 'units' ('celsius' or 'fahrenheit') and 'format' ('text' or 'html').")]
    async fn get_current_weather(
        &self,
        Parameters(request): Parameters<GetCurrentWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.current_weather_report(request).await;
        Ok(into_tool_result("get_current_weather", result))
    }

    /// Multi-day forecast
    #[tool(description = "Get a weather forecast for a city. Optional 'days' (1-7, default 3) and 'units' ('celsius' or 'fahrenheit').")]
    async fn get_weather_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.forecast_report(request).await;
        Ok(into_tool_result("get_weather_forecast", result))
    }

    #[tool(description = "Get air quality information for a city (AQI, pollutants and health advice).")]
    async fn get_air_quality(
        &self,
        Parameters(request): Parameters<CityRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.air_quality_report(request).await;
        Ok(into_tool_result("get_air_quality", result))
    }

    #[tool(description = "Get weather alerts and warnings for a city.")]
    async fn get_weather_alerts(
        &self,
        Parameters(request): Parameters<CityRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.alerts_report(request).await;
        Ok(into_tool_result("get_weather_alerts", result))
    }
}
