//! Advisory engine: turns one observation into a bundle of derived hints.
//!
//! Everything here is pure. Generators reason in Celsius and kph regardless
//! of the unit the caller wants to see.

pub mod catalog;
pub mod classify;
pub mod generators;
pub mod rules;

use crate::models::WeatherObservation;

pub use classify::{
    category, condition_category, temperature_band, Category, ConditionCategory, TemperatureBand,
};
pub use generators::{
    activity_suggestions, air_quality_note, alert_banner, fun_fact, location_recommendation,
    travel_tips, weather_score, weather_trend,
};

/// Advisories derived from a single observation. Built fresh for each request.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisoryBundle {
    pub location_recommendation: String,
    pub fun_fact: String,
    /// Empty when there is nothing to flag.
    pub alert_banner: String,
    pub air_quality_note: String,
    pub travel_tips: Vec<String>,
    pub score: u8,
    pub score_description: String,
    /// Only rendered in HTML reports.
    pub weather_trend: String,
    /// Only rendered in HTML reports.
    pub activities: Vec<String>,
}

impl AdvisoryBundle {
    /// `city` is the name the caller asked for, which keys the per-city tables.
    pub fn build(city: &str, obs: &WeatherObservation) -> Self {
        let condition = obs.condition_text.as_str();
        let (score, score_description) = weather_score(
            condition,
            obs.temperature_c,
            obs.humidity_pct,
            obs.wind_speed_kph,
        );

        Self {
            location_recommendation: location_recommendation(city, condition, obs.temperature_c),
            fun_fact: fun_fact(city, condition, obs.temperature_c),
            alert_banner: alert_banner(
                condition,
                obs.temperature_c,
                obs.wind_speed_kph,
                obs.humidity_pct,
            ),
            air_quality_note: air_quality_note(obs.uv_index, obs.visibility_km),
            travel_tips: travel_tips(city, condition, obs.temperature_c),
            score,
            score_description,
            weather_trend: weather_trend(condition, obs.temperature_c),
            activities: activity_suggestions(
                city,
                condition,
                obs.temperature_c,
                obs.humidity_pct,
                obs.wind_speed_kph,
            ),
        }
    }

    pub fn has_alert(&self) -> bool {
        !self.alert_banner.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn observation(condition: &str, temp_c: f64) -> WeatherObservation {
        WeatherObservation {
            location_name: "Paris".into(),
            country: "France".into(),
            region: Some("Ile-de-France".into()),
            temperature_c: temp_c,
            temperature_f: temp_c * 9.0 / 5.0 + 32.0,
            feels_like_c: temp_c - 1.0,
            feels_like_f: (temp_c - 1.0) * 9.0 / 5.0 + 32.0,
            condition_text: condition.into(),
            condition_icon: "//cdn.weatherapi.com/weather/64x64/day/308.png".into(),
            humidity_pct: 60,
            wind_speed_kph: 12.0,
            wind_speed_mph: 7.5,
            wind_direction: "SW".into(),
            gust_kph: 20.0,
            pressure_mb: 1012.0,
            visibility_km: Some(10.0),
            uv_index: Some(3.0),
        }
    }

    #[test]
    fn bundle_collects_every_generator() {
        let obs = observation("Heavy rain", 12.0);
        let bundle = AdvisoryBundle::build("Paris", &obs);

        assert_eq!(bundle.location_recommendation, "🏛️ Explore the Musée d'Orsay");
        assert!(bundle.fun_fact.contains("Rainy days in Paris"));
        assert!(!bundle.has_alert());
        assert_eq!(bundle.air_quality_note, generators::GOOD_CONDITIONS);
        assert_eq!(bundle.travel_tips.len(), 3);
        // 5 + 1 (10-32) - 1 (rain) + 1 (wind) + 1 (humidity)
        assert_eq!(bundle.score, 7);
        assert!(bundle.score_description.contains("Great"));
        assert!(bundle.weather_trend.starts_with("🌧️"));
        // mild + rain + Paris highlights
        assert_eq!(bundle.activities.len(), 6);
    }

    #[test]
    fn bundle_uses_requested_city_not_provider_name() {
        let obs = observation("Sunny", 20.0);
        let bundle = AdvisoryBundle::build("Tokyo", &obs);
        assert_eq!(bundle.location_recommendation, "🎌 Walk the historic Meiji Shrine");
    }

    #[test]
    fn bundle_flags_alerts() {
        let mut obs = observation("Moderate or heavy rain with thunder", 22.0);
        obs.uv_index = Some(9.5);
        let bundle = AdvisoryBundle::build("Atlantis", &obs);

        assert!(bundle.has_alert());
        assert!(bundle.alert_banner.contains("Thunderstorm"));
        assert!(bundle.air_quality_note.contains("UV Index High"));
        assert_eq!(bundle.travel_tips.len(), 1);
    }
}
