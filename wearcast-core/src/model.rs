use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ClothingItem;

/// One timestamped temperature reading from an hourly forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    pub timestamp_utc: DateTime<Utc>,
    pub temperature_c: f64,
}

/// Reduced summary of one day's temperatures.
///
/// `morning`/`afternoon`/`evening` are mean temperatures within fixed
/// hour-of-day windows; when a window has no samples they fall back to
/// `min`/`max`/`average` respectively (see [`crate::analysis`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTemperatureProfile {
    pub morning: f64,
    pub afternoon: f64,
    pub evening: f64,
    pub min: f64,
    pub max: f64,
    pub average: f64,
    /// Population variance (mean squared deviation) of the analyzed samples.
    pub variance: f64,
}

/// Part of the day an outfit is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    AllDay,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::AllDay => "all-day",
        }
    }
}

/// A single outfit: an ordered list of catalog items plus optional
/// layering/notes text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outfit {
    pub id: String,
    pub time_of_day: TimeOfDay,
    pub temperature_c: f64,
    pub weather_condition: String,
    pub items: Vec<ClothingItem>,
    pub layering_strategy: Option<String>,
    pub notes: Option<String>,
}

/// The engine's output: one or more outfits for a single day, plus
/// summary/advice text for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecommendation {
    pub date: NaiveDate,
    pub outfits: Vec<Outfit>,
    pub summary: String,
    pub layering_advice: Option<String>,
    pub special_notes: Option<String>,
}

/// How sensitive the user is to temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureTolerance {
    Cold,
    #[default]
    Normal,
    Warm,
}

/// Preferred clothing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Casual,
    Business,
    Athletic,
    Mixed,
}

/// User preferences accepted by the engine.
///
/// Currently an inert extension point: the engine threads these through its
/// signature but does not yet consult them when sizing outfits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    pub temperature_tolerance: TemperatureTolerance,
    pub style: Style,
}
