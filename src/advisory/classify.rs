//! Coarse labels derived from temperature and condition text.

use std::fmt;

/// Temperature band in Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Hot,
    Warm,
    Cool,
    Cold,
}

/// Category picked up from the free-text condition description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionCategory {
    Rainy,
    Sunny,
    None,
}

/// Key for the recommendation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Hot,
    Warm,
    Cool,
    Cold,
    Rainy,
    Sunny,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Cold => "cold",
            Self::Rainy => "rainy",
            Self::Sunny => "sunny",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TemperatureBand> for Category {
    fn from(band: TemperatureBand) -> Self {
        match band {
            TemperatureBand::Hot => Self::Hot,
            TemperatureBand::Warm => Self::Warm,
            TemperatureBand::Cool => Self::Cool,
            TemperatureBand::Cold => Self::Cold,
        }
    }
}

/// Lower bounds are inclusive. NaN lands in `Cold`.
pub fn temperature_band(temp_c: f64) -> TemperatureBand {
    if temp_c >= 25.0 {
        TemperatureBand::Hot
    } else if temp_c >= 15.0 {
        TemperatureBand::Warm
    } else if temp_c >= 5.0 {
        TemperatureBand::Cool
    } else {
        TemperatureBand::Cold
    }
}

pub fn condition_category(condition_text: &str) -> ConditionCategory {
    let text = condition_text.to_lowercase();
    if text.contains("rain") {
        ConditionCategory::Rainy
    } else if text.contains("sunny") || text.contains("clear") {
        ConditionCategory::Sunny
    } else {
        ConditionCategory::None
    }
}

/// The condition wins over the temperature band when it says anything.
pub fn category(condition_text: &str, temp_c: f64) -> Category {
    match condition_category(condition_text) {
        ConditionCategory::Rainy => Category::Rainy,
        ConditionCategory::Sunny => Category::Sunny,
        ConditionCategory::None => temperature_band(temp_c).into(),
    }
}
