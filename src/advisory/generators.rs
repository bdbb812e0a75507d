//! The advisory generators. All of them are total: any input yields text.

use super::catalog::{self, CityProfile};
use super::classify::{self, Category};
use super::rules::{first_match, Rule, Signals};

// ============================================================================
// Location recommendation
// ============================================================================

pub fn location_recommendation(city: &str, condition_text: &str, temp_c: f64) -> String {
    let category = classify::category(condition_text, temp_c);
    resolve_recommendation(catalog::city(city).map(|c| c.recommendations), category).to_string()
}

/// City + category, then city + `Warm`, then the city-agnostic table.
pub(crate) fn resolve_recommendation(
    city_table: Option<&[(Category, &'static str)]>,
    category: Category,
) -> &'static str {
    city_table
        .and_then(|table| {
            catalog::lookup(table, category).or_else(|| catalog::lookup(table, Category::Warm))
        })
        .unwrap_or_else(|| catalog::default_recommendation(category))
}

// ============================================================================
// Fun fact
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FactTier {
    Rainy,
    Sunny,
    Cloudy,
    Hot,
    Cold,
}

static FACT_RULES: &[Rule<FactTier>] = &[
    Rule {
        tag: "rainy",
        applies: |s| s.mentions_any(&["rain", "drizzle"]),
        yields: FactTier::Rainy,
    },
    Rule {
        tag: "sunny",
        applies: |s| s.mentions_any(&["sunny", "clear"]),
        yields: FactTier::Sunny,
    },
    Rule {
        tag: "cloudy",
        applies: |s| s.mentions_any(&["cloudy", "overcast"]),
        yields: FactTier::Cloudy,
    },
    Rule {
        tag: "hot",
        applies: |s| s.temp_c > 30.0,
        yields: FactTier::Hot,
    },
    Rule {
        tag: "cold",
        applies: |s| s.temp_c < 10.0,
        yields: FactTier::Cold,
    },
];

pub fn fun_fact(city: &str, condition_text: &str, temp_c: f64) -> String {
    let profile = catalog::city(city);
    let signals = Signals::new(condition_text, temp_c);

    let fact = match first_match(FACT_RULES, &signals).map(|r| r.yields) {
        Some(FactTier::Rainy) => city_fact(profile, |f| f.rainy).unwrap_or(catalog::RAINY_FACT),
        Some(FactTier::Sunny) => city_fact(profile, |f| f.sunny).unwrap_or(catalog::SUNNY_FACT),
        Some(FactTier::Cloudy) => city_fact(profile, |f| f.cloudy).unwrap_or(catalog::CLOUDY_FACT),
        Some(FactTier::Hot) => catalog::HOT_FACT,
        Some(FactTier::Cold) => catalog::COLD_FACT,
        None => city_fact(profile, |f| f.default).unwrap_or(catalog::UNIVERSAL_FACT),
    };
    fact.to_string()
}

fn city_fact(
    profile: Option<&CityProfile>,
    pick: impl Fn(&catalog::CityFacts) -> Option<&'static str>,
) -> Option<&'static str> {
    profile.and_then(|p| pick(&p.facts))
}

// ============================================================================
// Alert banner
// ============================================================================

static ALERT_RULES: &[Rule<&str>] = &[
    Rule {
        tag: "thunderstorm",
        applies: |s| s.mentions("thunder"),
        yields: "⚡ **WEATHER ALERT:** Thunderstorm detected - seek shelter immediately!",
    },
    Rule {
        tag: "storm",
        applies: |s| s.mentions("storm"),
        yields: "🌪️ **WEATHER ALERT:** Storm conditions - avoid outdoor activities!",
    },
    Rule {
        tag: "heat",
        applies: |s| s.temp_c > 35.0,
        yields: "🔥 **HEAT ALERT:** Extreme heat - stay hydrated and avoid sun exposure!",
    },
    Rule {
        tag: "cold",
        applies: |s| s.temp_c < -10.0,
        yields: "❄️ **COLD ALERT:** Extreme cold - bundle up and limit outdoor time!",
    },
    Rule {
        tag: "wind",
        applies: |s| s.wind_kph > 50.0,
        yields: "💨 **WIND ALERT:** High winds - secure loose items and be cautious!",
    },
    Rule {
        tag: "humidity",
        applies: |s| s.humidity_pct > 90,
        yields: "💧 **HUMIDITY ALERT:** Very high humidity - stay hydrated!",
    },
];

/// Empty string when nothing is worth flagging.
pub fn alert_banner(condition_text: &str, temp_c: f64, wind_kph: f64, humidity_pct: u8) -> String {
    let signals = Signals::new(condition_text, temp_c)
        .with_wind(wind_kph)
        .with_humidity(humidity_pct);

    first_match(ALERT_RULES, &signals)
        .map(|r| r.yields.to_string())
        .unwrap_or_default()
}

// ============================================================================
// Air quality note
// ============================================================================

pub const GOOD_CONDITIONS: &str = "✅ **Good Conditions:** Safe for outdoor activities";

static AIR_QUALITY_RULES: &[Rule<&str>] = &[
    Rule {
        tag: "uv-high",
        applies: |s| s.uv_index.is_some_and(|uv| uv > 8.0),
        yields: "☀️ **UV Index High:** Use SPF 50+ sunscreen and limit sun exposure",
    },
    Rule {
        tag: "uv-moderate",
        applies: |s| s.uv_index.is_some_and(|uv| uv > 6.0),
        yields: "☀️ **UV Index Moderate:** Use sunscreen and wear protective clothing",
    },
    Rule {
        tag: "poor-visibility",
        applies: |s| s.visibility_km.is_some_and(|v| v < 5.0),
        yields: "🌫️ **Poor Visibility:** Drive carefully and avoid outdoor activities",
    },
];

/// Missing readings never trigger a warning.
pub fn air_quality_note(uv_index: Option<f64>, visibility_km: Option<f64>) -> String {
    let signals = Signals::default()
        .with_uv(uv_index)
        .with_visibility(visibility_km);

    first_match(AIR_QUALITY_RULES, &signals)
        .map_or(GOOD_CONDITIONS, |r| r.yields)
        .to_string()
}

// ============================================================================
// Travel tips
// ============================================================================

static GENERAL_TIP_RULES: &[Rule<&str>] = &[
    Rule {
        tag: "rain",
        applies: |s| s.mentions("rain"),
        yields: "☔ **Travel Tip:** Pack waterproof gear and plan indoor activities",
    },
    Rule {
        tag: "sunny",
        applies: |s| s.mentions("sunny"),
        yields: "🧴 **Travel Tip:** Bring sunscreen and stay hydrated",
    },
    Rule {
        tag: "hot",
        applies: |s| s.temp_c > 30.0,
        yields: "🏊 **Travel Tip:** Perfect weather for water activities",
    },
    Rule {
        tag: "cold",
        applies: |s| s.temp_c < 10.0,
        yields: "🧥 **Travel Tip:** Pack warm clothing and plan indoor visits",
    },
];

/// At most one general tip, followed by the city's own pair.
pub fn travel_tips(city: &str, condition_text: &str, temp_c: f64) -> Vec<String> {
    let signals = Signals::new(condition_text, temp_c);

    let general = first_match(GENERAL_TIP_RULES, &signals).map(|r| r.yields);
    let local = catalog::city(city)
        .and_then(|c| c.tips)
        .into_iter()
        .flatten();

    general.into_iter().chain(local).map(str::to_string).collect()
}

// ============================================================================
// Weather trend
// ============================================================================

pub const MODERATE_TREND: &str = "🌤️ Moderate conditions - suitable for most activities";

static TREND_RULES: &[Rule<&str>] = &[
    Rule {
        tag: "summer",
        applies: |s| s.temp_c > 25.0 && s.mentions("sunny"),
        yields: "📈 Perfect summer weather - great for outdoor activities!",
    },
    Rule {
        tag: "overcast",
        applies: |s| s.temp_c < 10.0 && s.mentions("cloudy"),
        yields: "📉 Cool and overcast - indoor activities recommended",
    },
    Rule {
        tag: "rainy",
        applies: |s| s.mentions("rain"),
        yields: "🌧️ Rainy conditions - bring protection and plan indoor activities",
    },
];

/// One-line outlook shown in the HTML report.
pub fn weather_trend(condition_text: &str, temp_c: f64) -> String {
    let signals = Signals::new(condition_text, temp_c);
    first_match(TREND_RULES, &signals)
        .map_or(MODERATE_TREND, |r| r.yields)
        .to_string()
}

// ============================================================================
// Activity suggestions
// ============================================================================

// The last band matches anything, NaN included.
static TEMPERATURE_ACTIVITIES: &[Rule<[&str; 2]>] = &[
    Rule {
        tag: "hot",
        applies: |s| s.temp_c > 30.0,
        yields: [
            "🌡️ Stay hydrated and avoid prolonged sun exposure",
            "🏊 Perfect weather for swimming or water activities",
        ],
    },
    Rule {
        tag: "warm",
        applies: |s| s.temp_c > 20.0,
        yields: [
            "☀️ Ideal temperature for outdoor activities",
            "🚶 Great for walking tours and sightseeing",
        ],
    },
    Rule {
        tag: "mild",
        applies: |s| s.temp_c > 10.0,
        yields: [
            "🧥 Light jacket recommended",
            "☕ Perfect for café visits and indoor activities",
        ],
    },
    Rule {
        tag: "cold",
        applies: |_| true,
        yields: [
            "🧣 Bundle up! Warm clothing essential",
            "🔥 Great time for hot drinks and cozy indoor spots",
        ],
    },
];

static CONDITION_ACTIVITIES: &[Rule<[&str; 2]>] = &[
    Rule {
        tag: "rain",
        applies: |s| s.mentions("rain"),
        yields: [
            "☔ Bring an umbrella or raincoat",
            "🏛️ Perfect for museum visits and indoor attractions",
        ],
    },
    Rule {
        tag: "sunny",
        applies: |s| s.mentions("sunny"),
        yields: [
            "🧴 Don't forget sunscreen!",
            "📸 Excellent conditions for photography",
        ],
    },
    Rule {
        tag: "cloudy",
        applies: |s| s.mentions("cloudy"),
        yields: [
            "📷 Great lighting for photography",
            "🚶 Comfortable for outdoor activities",
        ],
    },
];

static WIND_ACTIVITIES: &[Rule<[&str; 2]>] = &[Rule {
    tag: "strong-wind",
    applies: |s| s.wind_kph > 30.0,
    yields: [
        "💨 Strong winds - secure loose items",
        "🏠 Consider indoor activities",
    ],
}];

static HUMIDITY_ACTIVITIES: &[Rule<[&str; 2]>] = &[Rule {
    tag: "humid",
    applies: |s| s.humidity_pct > 80,
    yields: [
        "💧 High humidity - stay hydrated",
        "🌬️ Seek air-conditioned spaces",
    ],
}];

/// Pairs of suggestions from each table that matches, in table order,
/// followed by the city's highlights.
pub fn activity_suggestions(
    city: &str,
    condition_text: &str,
    temp_c: f64,
    humidity_pct: u8,
    wind_kph: f64,
) -> Vec<String> {
    let signals = Signals::new(condition_text, temp_c)
        .with_wind(wind_kph)
        .with_humidity(humidity_pct);

    let weather = [
        TEMPERATURE_ACTIVITIES,
        CONDITION_ACTIVITIES,
        WIND_ACTIVITIES,
        HUMIDITY_ACTIVITIES,
    ]
    .into_iter()
    .filter_map(|table| first_match(table, &signals))
    .flat_map(|rule| rule.yields);
    let local = catalog::city(city)
        .and_then(|c| c.highlights)
        .into_iter()
        .flatten();

    weather.chain(local).map(str::to_string).collect()
}

// ============================================================================
// Weather score
// ============================================================================

const BASE_SCORE: i32 = 5;

// The temperature bands overlap on purpose: evaluation stops at the first
// band containing the value, so 16 °C scores +2 and never reaches the +1 band.
static TEMPERATURE_BONUS: &[Rule<i32>] = &[
    Rule {
        tag: "ideal",
        applies: |s| (18.0..=25.0).contains(&s.temp_c),
        yields: 3,
    },
    Rule {
        tag: "good",
        applies: |s| (15.0..=28.0).contains(&s.temp_c),
        yields: 2,
    },
    Rule {
        tag: "acceptable",
        applies: |s| (10.0..=32.0).contains(&s.temp_c),
        yields: 1,
    },
];

static CONDITION_BONUS: &[Rule<i32>] = &[
    Rule {
        tag: "sunny",
        applies: |s| s.mentions_any(&["sunny", "clear"]),
        yields: 2,
    },
    Rule {
        tag: "partly-cloudy",
        applies: |s| s.mentions("partly cloudy"),
        yields: 1,
    },
    Rule {
        tag: "rain",
        applies: |s| s.mentions("rain"),
        yields: -1,
    },
    Rule {
        tag: "storm",
        applies: |s| s.mentions("storm"),
        yields: -2,
    },
];

static WIND_ADJUSTMENT: &[Rule<i32>] = &[
    Rule {
        tag: "calm",
        applies: |s| s.wind_kph < 20.0,
        yields: 1,
    },
    Rule {
        tag: "windy",
        applies: |s| s.wind_kph > 40.0,
        yields: -1,
    },
];

static HUMIDITY_ADJUSTMENT: &[Rule<i32>] = &[
    Rule {
        tag: "comfortable",
        applies: |s| (40..=70).contains(&s.humidity_pct),
        yields: 1,
    },
    Rule {
        tag: "muggy",
        applies: |s| s.humidity_pct > 80,
        yields: -1,
    },
];

static SCORE_DESCRIPTIONS: &[(u8, &str)] = &[
    (9, "🌟 **Excellent weather conditions!**"),
    (7, "👍 **Great weather for activities!**"),
    (5, "😊 **Decent weather conditions**"),
    (3, "😐 **Moderate weather - plan accordingly**"),
];

const CHALLENGING: &str = "😔 **Challenging weather conditions**";

/// Score in `1..=10` plus a short description.
pub fn weather_score(
    condition_text: &str,
    temp_c: f64,
    humidity_pct: u8,
    wind_kph: f64,
) -> (u8, String) {
    let signals = Signals::new(condition_text, temp_c)
        .with_wind(wind_kph)
        .with_humidity(humidity_pct);

    let adjustments: i32 = [
        TEMPERATURE_BONUS,
        CONDITION_BONUS,
        WIND_ADJUSTMENT,
        HUMIDITY_ADJUSTMENT,
    ]
    .into_iter()
    .filter_map(|table| first_match(table, &signals))
    .map(|rule| rule.yields)
    .sum();

    let score = (BASE_SCORE + adjustments).clamp(1, 10) as u8;
    (score, score_description(score).to_string())
}

pub fn score_description(score: u8) -> &'static str {
    SCORE_DESCRIPTIONS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map_or(CHALLENGING, |(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- location recommendation ----

    #[test]
    fn rain_overrides_temperature_for_recommendation() {
        assert_eq!(
            location_recommendation("Tokyo", "Light rain", 18.0),
            "🏛️ Explore the Imperial Palace East Gardens"
        );
    }

    #[test]
    fn recommendation_uses_temperature_band_without_condition() {
        assert_eq!(
            location_recommendation("london", "Overcast", 2.0),
            "☕ Warm up in a traditional English pub"
        );
        assert_eq!(
            location_recommendation("NEW YORK", "Mist", 27.0),
            "🏛️ Visit the air-conditioned Metropolitan Museum"
        );
    }

    #[test]
    fn unknown_city_gets_generic_recommendation() {
        assert_eq!(
            location_recommendation("Atlantis", "Clear", 12.0),
            "🌳 Enjoy outdoor activities"
        );
        assert_eq!(
            location_recommendation("", "", 30.0),
            "🏛️ Visit a local museum to cool off"
        );
    }

    #[test]
    fn partial_city_table_falls_back_to_warm_then_default() {
        let table: &[(Category, &'static str)] = &[(Category::Warm, "city warm")];
        assert_eq!(resolve_recommendation(Some(table), Category::Warm), "city warm");
        assert_eq!(resolve_recommendation(Some(table), Category::Cold), "city warm");

        let empty: &[(Category, &'static str)] = &[];
        assert_eq!(
            resolve_recommendation(Some(empty), Category::Cold),
            "☕ Warm up in a cozy café"
        );
        assert_eq!(
            resolve_recommendation(None, Category::Rainy),
            "🏛️ Visit indoor attractions"
        );
    }

    // ---- fun fact ----

    #[test]
    fn unknown_city_sunny_fact_is_universal_sunny_default() {
        let fact = fun_fact("Atlantis", "Sunny", 22.0);
        assert_eq!(fact, catalog::SUNNY_FACT);
        assert!(!fact.is_empty());
    }

    #[test]
    fn drizzle_counts_as_rain_for_facts() {
        assert!(fun_fact("Paris", "Patchy light drizzle", 14.0).contains("Rainy days in Paris"));
    }

    #[test]
    fn known_city_without_tier_fact_uses_generic_tier_fact() {
        assert_eq!(fun_fact("New York", "Light rain", 14.0), catalog::RAINY_FACT);
        assert_eq!(fun_fact("Tokyo", "Overcast", 14.0), catalog::CLOUDY_FACT);
        assert!(fun_fact("Duluth", "Partly cloudy", 14.0).contains("Lake Superior shoreline"));
    }

    #[test]
    fn condition_beats_temperature_for_facts() {
        assert_eq!(fun_fact("Sydney", "Overcast", 35.0), sydney_cloudy());
        assert_eq!(fun_fact("Cairo", "Mist", 35.0), catalog::HOT_FACT);
        assert_eq!(fun_fact("Moscow", "Snow", -5.0), catalog::COLD_FACT);
    }

    #[test]
    fn mild_unremarkable_weather_uses_city_default() {
        assert!(fun_fact("Tokyo", "Mist", 20.0).contains("Shibuya"));
        assert_eq!(fun_fact("Mumbai", "Mist", 20.0), catalog::UNIVERSAL_FACT);
        assert_eq!(fun_fact("Atlantis", "Mist", 20.0), catalog::UNIVERSAL_FACT);
    }

    #[test]
    fn fact_boundaries_are_exclusive() {
        assert!(fun_fact("London", "Mist", 30.0).contains("170 museums"));
        assert!(fun_fact("London", "Mist", 10.0).contains("170 museums"));
    }

    fn sydney_cloudy() -> &'static str {
        "Cloudy weather is perfect for visiting the Royal Botanic Garden! 🌿"
    }

    // ---- alert banner ----

    #[test]
    fn thunder_beats_storm_and_heat() {
        let alert = alert_banner("Thunderstorm with storm", 40.0, 0.0, 0);
        assert!(alert.contains("Thunderstorm detected"));
    }

    #[test]
    fn alert_priority_order() {
        assert!(alert_banner("Storm", 40.0, 80.0, 95).contains("Storm conditions"));
        assert!(alert_banner("Sunny", 36.0, 80.0, 95).contains("HEAT ALERT"));
        assert!(alert_banner("Snow", -11.0, 80.0, 95).contains("COLD ALERT"));
        assert!(alert_banner("Cloudy", 10.0, 51.0, 95).contains("WIND ALERT"));
        assert!(alert_banner("Mist", 10.0, 10.0, 91).contains("HUMIDITY ALERT"));
    }

    #[test]
    fn alert_thresholds_are_exclusive() {
        assert_eq!(alert_banner("Clear", 35.0, 50.0, 90), "");
        assert_eq!(alert_banner("Clear", -10.0, 0.0, 0), "");
    }

    #[test]
    fn alert_rules_are_in_priority_order() {
        let tags: Vec<_> = ALERT_RULES.iter().map(|r| r.tag).collect();
        assert_eq!(
            tags,
            ["thunderstorm", "storm", "heat", "cold", "wind", "humidity"]
        );
    }

    // ---- air quality ----

    #[test]
    fn uv_is_checked_before_visibility() {
        assert!(air_quality_note(Some(9.0), Some(1.0)).contains("UV Index High"));
        assert!(air_quality_note(Some(7.0), Some(1.0)).contains("UV Index Moderate"));
        assert!(air_quality_note(Some(6.0), Some(1.0)).contains("Poor Visibility"));
        assert_eq!(air_quality_note(Some(8.0), Some(10.0)), air_quality_note(Some(7.0), None));
    }

    #[test]
    fn good_conditions_when_nothing_triggers() {
        assert_eq!(air_quality_note(Some(2.0), Some(5.0)), GOOD_CONDITIONS);
        assert_eq!(air_quality_note(None, None), GOOD_CONDITIONS);
    }

    // ---- travel tips ----

    #[test]
    fn paris_rain_tips_in_order() {
        let tips = travel_tips("Paris", "Heavy rain", 12.0);
        assert_eq!(
            tips,
            vec![
                "☔ **Travel Tip:** Pack waterproof gear and plan indoor activities",
                "🚇 **Local Tip:** Use the Metro for easy navigation",
                "🥐 **Food Tip:** Visit local bakeries for fresh pastries",
            ]
        );
    }

    #[test]
    fn only_one_general_tip() {
        let tips = travel_tips("Atlantis", "Sunny", 35.0);
        assert_eq!(tips.len(), 1);
        assert!(tips[0].contains("sunscreen"));
    }

    #[test]
    fn clear_is_not_sunny_for_tips() {
        let tips = travel_tips("Atlantis", "Clear", 20.0);
        assert!(tips.is_empty());
    }

    #[test]
    fn city_without_tips_contributes_nothing() {
        let tips = travel_tips("Cairo", "Mist", 5.0);
        assert_eq!(tips, vec!["🧥 **Travel Tip:** Pack warm clothing and plan indoor visits"]);
    }

    #[test]
    fn known_city_tips_without_general_tip() {
        let tips = travel_tips("duluth", "Overcast", 20.0);
        assert_eq!(tips.len(), 2);
        assert!(tips[0].starts_with("🚗"));
    }

    #[test]
    fn hot_general_tip_when_condition_is_neutral() {
        assert_eq!(
            travel_tips("Atlantis", "Mist", 31.0),
            vec!["🏊 **Travel Tip:** Perfect weather for water activities"]
        );
    }

    #[test]
    fn general_tip_temperature_bounds_are_exclusive() {
        assert!(travel_tips("Atlantis", "Mist", 30.0).is_empty());
        assert!(travel_tips("Atlantis", "Mist", 10.0).is_empty());
    }

    #[test]
    fn general_tip_rules_are_in_priority_order() {
        let tags: Vec<_> = GENERAL_TIP_RULES.iter().map(|r| r.tag).collect();
        assert_eq!(tags, ["rain", "sunny", "hot", "cold"]);
    }

    // ---- weather trend ----

    #[test]
    fn trend_needs_both_heat_and_sun() {
        assert!(weather_trend("Sunny", 26.0).starts_with("📈"));
        assert_eq!(weather_trend("Sunny", 25.0), MODERATE_TREND);
        assert_eq!(weather_trend("Clear", 30.0), MODERATE_TREND);
    }

    #[test]
    fn cool_cloudy_trend_beats_rain() {
        assert!(weather_trend("Cloudy with light rain", 5.0).starts_with("📉"));
        assert!(weather_trend("Cloudy with light rain", 12.0).starts_with("🌧️"));
        assert!(weather_trend("Partly cloudy", 9.9).contains("overcast"));
    }

    #[test]
    fn unremarkable_weather_is_moderate_trend() {
        assert_eq!(weather_trend("Mist", 18.0), MODERATE_TREND);
        assert_eq!(weather_trend("", f64::NAN), MODERATE_TREND);
    }

    // ---- activity suggestions ----

    #[test]
    fn activities_collect_every_matching_table() {
        let activities = activity_suggestions("London", "Light rain", 15.0, 85, 35.0);
        assert_eq!(
            activities,
            vec![
                "🧥 Light jacket recommended",
                "☕ Perfect for café visits and indoor activities",
                "☔ Bring an umbrella or raincoat",
                "🏛️ Perfect for museum visits and indoor attractions",
                "💨 Strong winds - secure loose items",
                "🏠 Consider indoor activities",
                "💧 High humidity - stay hydrated",
                "🌬️ Seek air-conditioned spaces",
                "🏛️ Explore the British Museum",
                "☕ Enjoy traditional afternoon tea",
            ]
        );
    }

    #[test]
    fn temperature_band_always_contributes() {
        let activities = activity_suggestions("Atlantis", "Mist", 10.0, 50, 30.0);
        assert_eq!(
            activities,
            vec![
                "🧣 Bundle up! Warm clothing essential",
                "🔥 Great time for hot drinks and cozy indoor spots",
            ]
        );
        assert_eq!(activity_suggestions("Atlantis", "Mist", f64::NAN, 0, 0.0).len(), 2);
    }

    #[test]
    fn activity_band_edges() {
        assert!(activity_suggestions("Atlantis", "Mist", 30.0, 50, 0.0)[0].starts_with("☀️"));
        assert!(activity_suggestions("Atlantis", "Mist", 30.1, 50, 0.0)[0].starts_with("🌡️"));
        assert!(activity_suggestions("Atlantis", "Mist", 20.0, 50, 0.0)[0].starts_with("🧥"));
    }

    #[test]
    fn sunny_activities_and_city_highlights() {
        let activities = activity_suggestions("sydney", "Sunny", 24.0, 60, 12.0);
        assert_eq!(activities.len(), 6);
        assert_eq!(activities[2], "🧴 Don't forget sunscreen!");
        assert_eq!(activities[5], "🎭 Explore the Opera House");
    }

    // ---- weather score ----

    #[test]
    fn perfect_day_clamps_to_ten() {
        let (score, description) = weather_score("Sunny", 20.0, 55, 10.0);
        assert_eq!(score, 10);
        assert_eq!(description, "🌟 **Excellent weather conditions!**");
    }

    #[test]
    fn overlapping_bands_stop_at_first_match() {
        // 5 + 2 (15-28) + 0 + 0 (wind 30) + 0 (humidity 75)
        assert_eq!(weather_score("Mist", 16.0, 75, 30.0).0, 7);
        // 5 + 1 (10-32) + 0 + 0 + 0
        assert_eq!(weather_score("Mist", 30.0, 75, 30.0).0, 6);
        // 5 + 0 + 0 + 0 + 0
        assert_eq!(weather_score("Mist", 33.0, 75, 30.0).0, 5);
    }

    #[test]
    fn condition_bonus_priority() {
        // rain is checked before storm
        assert_eq!(weather_score("Thunderstorm with rain", 35.0, 75, 30.0).0, 4);
        assert_eq!(weather_score("Storm", 35.0, 75, 30.0).0, 3);
        assert_eq!(weather_score("Partly cloudy", 35.0, 75, 30.0).0, 6);
        assert_eq!(weather_score("Clear", 35.0, 75, 30.0).0, 7);
    }

    #[test]
    fn worst_case_clamps_to_one() {
        let (score, description) = weather_score("Storm", 100.0, 100, 500.0);
        assert_eq!(score, 1);
        assert_eq!(description, CHALLENGING);
    }

    #[test]
    fn score_always_in_range() {
        let conditions = ["", "Sunny", "Storm", "Heavy rain", "Partly cloudy", "Blizzard"];
        let temps = [-100.0, -10.0, 0.0, 16.0, 20.0, 29.0, 45.0, 100.0, f64::NAN];
        let humidities = [0u8, 40, 70, 81, 100, 255];
        let winds = [0.0, 19.9, 20.0, 40.1, 500.0, f64::INFINITY];

        for c in conditions {
            for t in temps {
                for h in humidities {
                    for w in winds {
                        let (score, _) = weather_score(c, t, h, w);
                        assert!((1..=10).contains(&score), "{c} {t} {h} {w} -> {score}");
                    }
                }
            }
        }
    }

    #[test]
    fn description_thresholds() {
        assert_eq!(score_description(10), "🌟 **Excellent weather conditions!**");
        assert_eq!(score_description(9), "🌟 **Excellent weather conditions!**");
        assert_eq!(score_description(8), "👍 **Great weather for activities!**");
        assert_eq!(score_description(5), "😊 **Decent weather conditions**");
        assert_eq!(score_description(4), "😐 **Moderate weather - plan accordingly**");
        assert_eq!(score_description(2), CHALLENGING);
    }
}
