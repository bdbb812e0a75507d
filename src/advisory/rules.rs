//! Ordered rule tables for the first-match advisory chains.

/// Inputs every rule can look at, with the condition text pre-lowercased.
///
/// Unset readings stay `None` (or zero for wind/humidity), so rules keyed on
/// them simply never fire.
#[derive(Debug, Default)]
pub struct Signals {
    pub condition: String,
    pub temp_c: f64,
    pub wind_kph: f64,
    pub humidity_pct: u8,
    pub uv_index: Option<f64>,
    pub visibility_km: Option<f64>,
}

impl Signals {
    pub fn new(condition_text: &str, temp_c: f64) -> Self {
        Self {
            condition: condition_text.to_lowercase(),
            temp_c,
            ..Self::default()
        }
    }

    pub fn with_wind(mut self, wind_kph: f64) -> Self {
        self.wind_kph = wind_kph;
        self
    }

    pub fn with_humidity(mut self, humidity_pct: u8) -> Self {
        self.humidity_pct = humidity_pct;
        self
    }

    pub fn with_uv(mut self, uv_index: Option<f64>) -> Self {
        self.uv_index = uv_index;
        self
    }

    pub fn with_visibility(mut self, visibility_km: Option<f64>) -> Self {
        self.visibility_km = visibility_km;
        self
    }

    pub fn mentions(&self, needle: &str) -> bool {
        self.condition.contains(needle)
    }

    pub fn mentions_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.condition.contains(n))
    }
}

/// One entry of a priority chain. Tables are evaluated top to bottom.
pub struct Rule<O: 'static> {
    pub tag: &'static str,
    pub applies: fn(&Signals) -> bool,
    pub yields: O,
}

pub fn first_match<O>(rules: &'static [Rule<O>], signals: &Signals) -> Option<&'static Rule<O>> {
    rules.iter().find(|rule| (rule.applies)(signals))
}
