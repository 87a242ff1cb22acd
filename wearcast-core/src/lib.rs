//! Core library for the `wearcast` CLI.
//!
//! This crate defines:
//! - The daily temperature analyzer (hourly samples to a temperature profile)
//! - The clothing recommendation engine and its static catalog
//! - Configuration & saved-location handling
//! - Abstraction over forecast providers
//!
//! It is used by `wearcast-cli`, but can also be reused by other binaries or services.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod recommend;

pub use analysis::analyze_daily;
pub use catalog::{Category, ClothingItem};
pub use config::{Config, SavedLocation};
pub use error::{AnalysisError, RecommendError};
pub use model::{
    DailyRecommendation, DailyTemperatureProfile, HourlySample, Outfit, TimeOfDay, UserPreferences,
};
pub use provider::{ForecastProvider, ForecastRequest, HourlyForecast};
pub use recommend::recommend;
