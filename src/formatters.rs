use chrono::{DateTime, Utc};

use crate::advisory::AdvisoryBundle;
use crate::models::{Forecast, OutputMode, TemperatureUnit, WeatherObservation};

const WEATHER_TEMPLATE: &str = include_str!("templates/weather.html");
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";
const NOT_AVAILABLE: &str = "n/a";

/// Renders the full advisory report for one observation.
///
/// `unit` only changes the temperature fields; everything else is shown in
/// the provider's metric units alongside the imperial wind speed.
pub fn format_weather_report(
    obs: &WeatherObservation,
    bundle: &AdvisoryBundle,
    unit: TemperatureUnit,
    mode: OutputMode,
    generated_at: DateTime<Utc>,
) -> String {
    match mode {
        OutputMode::Text => format_text_report(obs, bundle, unit, generated_at),
        OutputMode::Html => format_html_report(obs, bundle, unit, generated_at),
    }
}

fn format_text_report(
    obs: &WeatherObservation,
    bundle: &AdvisoryBundle,
    unit: TemperatureUnit,
    generated_at: DateTime<Utc>,
) -> String {
    let mut output = format!(
        "🌤️ **Weather for {}** 🌤️\n\n📍 **Location Recommendation:**\n{}\n\n",
        location_header(obs),
        bundle.location_recommendation
    );

    output.push_str(&format!(
        "**Current Conditions:**\n\
         🌡️ **Temperature:** {}\n\
         🌡️ **Feels like:** {}\n\
         ☁️ **Condition:** {}\n\
         💧 **Humidity:** {}%\n\
         💨 **Wind:** {}\n\
         🌪️ **Gusts:** {:.1} km/h\n\
         👁️ **Visibility:** {}\n\
         ☀️ **UV Index:** {}\n\
         🌡️ **Pressure:** {:.1} mb\n\n",
        temperature(unit, obs.temperature_c, obs.temperature_f),
        temperature(unit, obs.feels_like_c, obs.feels_like_f),
        obs.condition_text,
        obs.humidity_pct,
        wind(obs),
        obs.gust_kph,
        optional(obs.visibility_km, " km"),
        optional(obs.uv_index, ""),
        obs.pressure_mb,
    ));

    output.push_str(&format!(
        "**Weather Score:** {}/10 {}\n\n",
        bundle.score, bundle.score_description
    ));

    let icon = match icon_url(&obs.condition_icon) {
        Some(url) => format!("![{}]({})", obs.condition_text, url),
        None => NOT_AVAILABLE.to_string(),
    };
    output.push_str(&format!("**Weather Icon:** {}\n\n", icon));
    output.push_str(&format!("💡 **Fun Fact:** {}\n\n", bundle.fun_fact));

    if bundle.has_alert() {
        output.push_str(&bundle.alert_banner);
        output.push_str("\n\n");
    }

    output.push_str(&bundle.air_quality_note);
    output.push_str("\n\n**🎯 Travel Recommendations:**\n");
    if bundle.travel_tips.is_empty() {
        output.push_str("- No specific travel tips for current conditions\n");
    }
    for tip in &bundle.travel_tips {
        output.push_str(&format!("- {}\n", tip));
    }

    output.push_str(&format!(
        "\n*Last updated: {}*",
        generated_at.format(TIMESTAMP_FORMAT)
    ));
    output
}

fn format_html_report(
    obs: &WeatherObservation,
    bundle: &AdvisoryBundle,
    unit: TemperatureUnit,
    generated_at: DateTime<Utc>,
) -> String {
    let icon = match icon_url(&obs.condition_icon) {
        Some(url) => format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(&url),
            escape_html(&obs.condition_text)
        ),
        None => NOT_AVAILABLE.to_string(),
    };

    let alert = if bundle.has_alert() {
        format!(
            "\n  <section class=\"alert\">\n    <p>{}</p>\n  </section>\n",
            inline_markup(&bundle.alert_banner)
        )
    } else {
        String::new()
    };

    let travel_tips = if bundle.travel_tips.is_empty() {
        "      <li>No specific travel tips for current conditions</li>".to_string()
    } else {
        bundle
            .travel_tips
            .iter()
            .map(|tip| format!("      <li>{}</li>", inline_markup(tip)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let activities = bundle
        .activities
        .iter()
        .map(|activity| format!("      <li>{}</li>", escape_html(activity)))
        .collect::<Vec<_>>()
        .join("\n");

    let vars = [
        ("location", escape_html(&location_header(obs))),
        ("recommendation", escape_html(&bundle.location_recommendation)),
        ("temperature", temperature(unit, obs.temperature_c, obs.temperature_f)),
        ("feels_like", temperature(unit, obs.feels_like_c, obs.feels_like_f)),
        ("condition", escape_html(&obs.condition_text)),
        ("humidity", obs.humidity_pct.to_string()),
        ("wind", escape_html(&wind(obs))),
        ("gusts", format!("{:.1} km/h", obs.gust_kph)),
        ("visibility", optional(obs.visibility_km, " km")),
        ("uv", optional(obs.uv_index, "")),
        ("pressure", format!("{:.1} mb", obs.pressure_mb)),
        ("score", bundle.score.to_string()),
        ("score_description", inline_markup(&bundle.score_description)),
        ("icon", icon),
        ("fun_fact", escape_html(&bundle.fun_fact)),
        ("trend", escape_html(&bundle.weather_trend)),
        ("alert", alert),
        ("air_quality", inline_markup(&bundle.air_quality_note)),
        ("travel_tips", travel_tips),
        ("activities", activities),
        ("updated", generated_at.format(TIMESTAMP_FORMAT).to_string()),
    ];

    fill_template(WEATHER_TEMPLATE, &vars)
}

/// Formats a multi-day forecast into a human-readable string
pub fn format_forecast(forecast: &Forecast, days: usize, unit: TemperatureUnit) -> String {
    let shown: Vec<_> = forecast.days.iter().take(days).collect();
    let mut output = format!(
        "🌤️ Weather Forecast for {}, {} ({} days):\n\n",
        forecast.location_name,
        forecast.country,
        shown.len()
    );

    if shown.is_empty() {
        output.push_str("No forecast data available.\n");
    }

    for day in shown {
        output.push_str(&format!(
            "📅 {}:\n   🌡️ High: {}\n   🌡️ Low: {}\n   ☁️ Condition: {}\n   💧 Humidity: {:.0}%\n   🌧️ Chance of rain: {:.0}%\n\n",
            day.date,
            temperature(unit, day.max_temp_c, day.max_temp_f),
            temperature(unit, day.min_temp_c, day.min_temp_f),
            day.condition_text,
            day.avg_humidity_pct,
            day.chance_of_rain_pct,
        ));
    }
    output
}

/// Static air quality summary; no live air-quality feed is wired in.
pub fn format_air_quality(city: &str) -> String {
    format!(
        "🌬️ Air Quality for {city}:\n\n\
         📊 AQI: 45 (Good)\n\
         🌫️ PM2.5: 12 μg/m³\n\
         🌫️ PM10: 25 μg/m³\n\
         ☁️ Ozone: 35 ppb\n\
         💨 Nitrogen Dioxide: 18 ppb\n\
         🌡️ Carbon Monoxide: 0.8 ppm\n\n\
         🏥 Health Impact: Good air quality. Enjoy outdoor activities.\n\
         ✅ Recommendations:\n   \
         • Safe for outdoor activities\n   \
         • Good for sensitive groups\n   \
         • No health warnings"
    )
}

/// Static alert summary; no live alert feed is wired in.
pub fn format_weather_alerts(city: &str) -> String {
    format!(
        "⚠️ Weather Alerts for {city}:\n\n\
         🔴 Severe Weather Warning:\n   \
         • Type: Thunderstorm Warning\n   \
         • Severity: Moderate\n   \
         • Duration: 2 hours\n   \
         • Description: Thunderstorms with heavy rain and lightning expected\n\n\
         🟡 Weather Advisory:\n   \
         • Type: Wind Advisory\n   \
         • Severity: Minor\n   \
         • Duration: 4 hours\n   \
         • Description: Strong winds up to 25 mph expected\n\n\
         ✅ Current Status: No immediate threats\n\
         📱 Stay informed with local weather updates"
    )
}

fn location_header(obs: &WeatherObservation) -> String {
    match &obs.region {
        Some(region) => format!("{}, {}, {}", obs.location_name, region, obs.country),
        None => format!("{}, {}", obs.location_name, obs.country),
    }
}

fn temperature(unit: TemperatureUnit, celsius: f64, fahrenheit: f64) -> String {
    format!("{:.1}{}", unit.pick(celsius, fahrenheit), unit.symbol())
}

fn wind(obs: &WeatherObservation) -> String {
    let speed = format!("{:.1} km/h ({:.1} mph)", obs.wind_speed_kph, obs.wind_speed_mph);
    if obs.wind_direction.is_empty() {
        speed
    } else {
        format!("{} {}", speed, obs.wind_direction)
    }
}

fn optional(value: Option<f64>, suffix: &str) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{:.1}{}", v, suffix))
}

/// Provider icons come back protocol-relative (`//cdn...`).
pub fn icon_url(icon: &str) -> Option<String> {
    let icon = icon.trim();
    if icon.is_empty() {
        None
    } else if icon.starts_with("//") {
        Some(format!("https:{}", icon))
    } else {
        Some(icon.to_string())
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escapes, then turns `**bold**` spans into `<strong>`.
fn inline_markup(input: &str) -> String {
    let escaped = escape_html(input);
    let parts: Vec<&str> = escaped.split("**").collect();
    // An odd number of parts means every marker was paired.
    if parts.len() % 2 == 0 {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 16);
    for (i, part) in parts.iter().enumerate() {
        if i % 2 == 1 {
            out.push_str("<strong>");
            out.push_str(part);
            out.push_str("</strong>");
        } else {
            out.push_str(part);
        }
    }
    out
}

/// Single pass over `{{name}}` placeholders. Unknown names render empty.
fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len() + 512);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = after[..end].trim();
                if let Some((_, value)) = vars.iter().find(|(key, _)| *key == name) {
                    out.push_str(value);
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
