//! The clothing recommendation engine.
//!
//! Maps a [`DailyTemperatureProfile`] plus a weather-condition label to a
//! [`DailyRecommendation`]: one all-day outfit drawn from the static catalog,
//! sized by temperature band, adjusted for rain/snow, and annotated with
//! summary, layering and advisory text.

use chrono::NaiveDate;

use crate::catalog::{self, Category, ClothingItem, RAIN_JACKET};
use crate::error::RecommendError;
use crate::model::{
    DailyRecommendation, DailyTemperatureProfile, Outfit, TimeOfDay, UserPreferences,
};

// Uncalibrated thresholds inherited from the original tuning. Kept verbatim
// for compatibility; candidates for externalized configuration.
const VARIABLE_VARIANCE_THRESHOLD: f64 = 25.0;
const SPREAD_LIGHT_JACKET: f64 = 15.0;
const SPREAD_CARDIGAN: f64 = 10.0;
const SPREAD_HOODIE: f64 = 5.0;
const ADVICE_HIGH_VARIATION: f64 = 20.0;
const ADVICE_MODERATE_VARIATION: f64 = 15.0;

/// Temperature band: a contiguous interval mapped to a fixed clothing set.
///
/// The six bands partition the real line; each is left-closed/right-open
/// except the two unbounded ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Below 0 °C.
    Freezing,
    /// 0 to 10 °C.
    Cold,
    /// 10 to 18 °C.
    Cool,
    /// 18 to 25 °C.
    Mild,
    /// 25 to 30 °C.
    Warm,
    /// 30 °C and above.
    Hot,
}

impl Band {
    pub fn for_temperature(temp_c: f64) -> Self {
        if temp_c < 0.0 {
            Band::Freezing
        } else if temp_c < 10.0 {
            Band::Cold
        } else if temp_c < 18.0 {
            Band::Cool
        } else if temp_c < 25.0 {
            Band::Mild
        } else if temp_c < 30.0 {
            Band::Warm
        } else {
            Band::Hot
        }
    }
}

/// Produce the day's clothing recommendation.
///
/// Pure function of its inputs: `date` stamps the result and is supplied by
/// the caller so the engine never reads the wall clock. `preferences` is an
/// accepted-but-inert extension point; it does not affect the output yet.
///
/// Fails only on a catalog/key mismatch ([`RecommendError::UnknownCatalogItem`]);
/// on failure no partial recommendation is returned.
pub fn recommend(
    profile: &DailyTemperatureProfile,
    weather_condition: &str,
    preferences: Option<&UserPreferences>,
    date: NaiveDate,
) -> Result<DailyRecommendation, RecommendError> {
    let _ = preferences;

    let variable = profile.variance > VARIABLE_VARIANCE_THRESHOLD;

    let outfit = if variable {
        layered_outfit(profile, weather_condition)?
    } else {
        stable_outfit(profile, weather_condition)?
    };

    Ok(DailyRecommendation {
        date,
        outfits: vec![outfit],
        summary: summary(profile, weather_condition, variable),
        layering_advice: variable.then(|| layering_advice(profile)),
        special_notes: special_notes(weather_condition, profile),
    })
}

/// Stable day: a single all-day outfit sized for the day's average.
fn stable_outfit(
    profile: &DailyTemperatureProfile,
    weather_condition: &str,
) -> Result<Outfit, RecommendError> {
    let temperature = profile.average;
    let items = items_for_temperature(temperature, weather_condition)?;

    Ok(Outfit {
        id: "stable-recommendation".to_string(),
        time_of_day: TimeOfDay::AllDay,
        temperature_c: temperature,
        weather_condition: weather_condition.to_string(),
        items,
        layering_strategy: None,
        notes: Some(format!(
            "Consistent temperature around {}°C today.",
            temperature.round()
        )),
    })
}

/// Variable day: dress for the cooler ends of the day and carry a removable
/// layer sized by the afternoon spread.
fn layered_outfit(
    profile: &DailyTemperatureProfile,
    weather_condition: &str,
) -> Result<Outfit, RecommendError> {
    let base = profile.morning.min(profile.evening);
    let mut items = items_for_temperature(base, weather_condition)?;

    // Appended after the weather adjustment: the removable layer itself is
    // never substituted.
    let spread = profile.afternoon - base;
    if let Some(layer) = removable_layer(spread)? {
        items.push(layer);
    }

    Ok(Outfit {
        id: "layered-recommendation".to_string(),
        time_of_day: TimeOfDay::AllDay,
        temperature_c: profile.average,
        weather_condition: weather_condition.to_string(),
        items,
        layering_strategy: Some(layering_strategy(profile)),
        notes: Some(format!(
            "Temperature varies from {}°C to {}°C today.",
            profile.min.round(),
            profile.max.round()
        )),
    })
}

/// Band lookup plus weather-condition adjustments.
fn items_for_temperature(
    temp_c: f64,
    weather_condition: &str,
) -> Result<Vec<ClothingItem>, RecommendError> {
    let band = Band::for_temperature(temp_c);

    let mut ids: Vec<&str> = match band {
        Band::Freezing => vec![
            "heavy-coat",
            "thermal-shirt",
            "thermal-pants",
            "winter-boots",
            "winter-accessories",
        ],
        Band::Cold => {
            let mut ids = vec!["winter-jacket", "long-sleeve", "jeans", "closed-shoes"];
            if temp_c < 5.0 {
                ids.push("winter-accessories");
            }
            ids
        }
        Band::Cool => vec!["light-jacket", "long-sleeve", "jeans", "closed-shoes"],
        Band::Mild => {
            let mut ids = vec!["short-sleeve", "light-pants", "light-shoes"];
            if temp_c < 20.0 {
                ids.push("cardigan");
            }
            ids
        }
        Band::Warm => vec!["short-sleeve", "shorts", "light-shoes", "sun-accessories"],
        Band::Hot => vec!["tank-top", "shorts", "sandals", "sun-accessories"],
    };

    let mut items = ids
        .drain(..)
        .map(catalog::lookup)
        .collect::<Result<Vec<_>, _>>()?;

    let condition = weather_condition.to_lowercase();

    if condition.contains("rain") {
        // Swap the light jacket for its waterproof variant, in place.
        for item in &mut items {
            if item.id == "light-jacket" {
                *item = RAIN_JACKET;
            }
        }
    }

    if condition.contains("snow") && band != Band::Freezing {
        let boots = catalog::lookup("winter-boots")?;
        for item in &mut items {
            if item.category == Category::Footwear && item.warmth_level < 4 {
                *item = boots;
            }
        }
    }

    Ok(items)
}

/// Extra outerwear for variable days, sized by the morning-to-afternoon
/// spread. Thresholds are exclusive lower bounds, checked top-down.
fn removable_layer(spread_c: f64) -> Result<Option<ClothingItem>, RecommendError> {
    let id = if spread_c > SPREAD_LIGHT_JACKET {
        "light-jacket"
    } else if spread_c > SPREAD_CARDIGAN {
        "cardigan"
    } else if spread_c > SPREAD_HOODIE {
        "hoodie"
    } else {
        return Ok(None);
    };

    catalog::lookup(id).map(Some)
}

fn layering_strategy(profile: &DailyTemperatureProfile) -> String {
    format!(
        "Start with layers for {}°C morning, remove outer layer when it reaches {}°C in the afternoon, and add back for {}°C evening.",
        profile.morning.round(),
        profile.afternoon.round(),
        profile.evening.round()
    )
}

fn summary(profile: &DailyTemperatureProfile, weather_condition: &str, variable: bool) -> String {
    if variable {
        format!(
            "Variable day with temperatures from {}°C to {}°C. Layering recommended for comfort throughout the day.",
            profile.min.round(),
            profile.max.round()
        )
    } else {
        format!(
            "Stable temperature around {}°C with {} conditions.",
            profile.average.round(),
            weather_condition.to_lowercase()
        )
    }
}

fn layering_advice(profile: &DailyTemperatureProfile) -> String {
    let diff = profile.max - profile.min;

    if diff > ADVICE_HIGH_VARIATION {
        "High temperature variation today. Consider multiple removable layers to adjust throughout the day.".to_string()
    } else if diff > ADVICE_MODERATE_VARIATION {
        "Moderate temperature changes expected. A removable jacket or sweater should be sufficient.".to_string()
    } else {
        "Some temperature variation. A light layer you can remove should work well.".to_string()
    }
}

/// Independent advisories, space-joined in a fixed order; `None` when none
/// apply.
fn special_notes(weather_condition: &str, profile: &DailyTemperatureProfile) -> Option<String> {
    let condition = weather_condition.to_lowercase();
    let mut notes: Vec<&str> = Vec::new();

    if condition.contains("rain") {
        notes.push("Rain expected - consider waterproof outerwear and closed shoes.");
    }
    if condition.contains("snow") {
        notes.push("Snow conditions - wear appropriate footwear with good traction.");
    }
    if condition.contains("wind") {
        notes.push("Windy conditions - consider wind-resistant layers.");
    }
    if profile.max > 30.0 {
        notes.push("Hot weather - stay hydrated and seek shade when possible.");
    }
    if profile.min < 0.0 {
        notes.push("Freezing temperatures - cover exposed skin and stay warm.");
    }

    if notes.is_empty() { None } else { Some(notes.join(" ")) }
}
