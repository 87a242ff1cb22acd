use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use inquire::Password;

use wearcast_core::{
    Config, DailyRecommendation, DailyTemperatureProfile, ForecastRequest, HourlyForecast,
    analyze_daily, provider::provider_from_config, recommend,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wearcast", version, about = "Clothing recommendations from the weather forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Recommend today's outfit for an address or saved location.
    Recommend {
        /// Saved location name or a literal address; omit to use the default
        /// saved location.
        query: Option<String>,

        /// Day to dress for (YYYY-MM-DD); if absent, means "today".
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Manage saved locations.
    Location {
        #[command(subcommand)]
        action: LocationAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum LocationAction {
    /// Save a location under a short name.
    Add {
        name: String,
        address: String,

        /// Make this the default location.
        #[arg(long)]
        default: bool,
    },

    /// List saved locations.
    List,

    /// Remove a saved location.
    Remove { name: String },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Recommend { query, date } => recommend_outfit(query, date).await,
            Command::Location { action } => manage_locations(action),
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()?;
    config.set_api_key(api_key);
    config.save()?;

    println!("Configuration saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn recommend_outfit(query: Option<String>, date: Option<NaiveDate>) -> Result<()> {
    let config = Config::load()?;
    let address = config.resolve_address(query.as_deref())?;

    let provider = provider_from_config(&config)?;
    let forecast = provider.hourly_forecast(&ForecastRequest { address }).await?;

    let reference_date = date.unwrap_or_else(|| Utc::now().date_naive());
    let profile = analyze_daily(&forecast.samples, reference_date)?;
    let recommendation = recommend(&profile, &forecast.condition, None, reference_date)?;

    render(&forecast, &profile, &recommendation);
    Ok(())
}

fn manage_locations(action: LocationAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        LocationAction::Add { name, address, default } => {
            config.upsert_location(name.clone(), address, default);
            config.save()?;
            println!("Saved location '{name}'.");
        }
        LocationAction::List => {
            if config.locations.is_empty() {
                println!("No saved locations.");
            }
            for loc in &config.locations {
                let marker = if loc.is_default { " (default)" } else { "" };
                println!("{}: {}{marker}", loc.name, loc.address);
            }
        }
        LocationAction::Remove { name } => {
            if config.remove_location(&name) {
                config.save()?;
                println!("Removed location '{name}'.");
            } else {
                println!("No saved location named '{name}'.");
            }
        }
    }

    Ok(())
}

fn render(
    forecast: &HourlyForecast,
    profile: &DailyTemperatureProfile,
    recommendation: &DailyRecommendation,
) {
    println!("{} | {}", forecast.location_name, forecast.condition);
    println!(
        "  Morning {}°C · Afternoon {}°C · Evening {}°C",
        profile.morning.round(),
        profile.afternoon.round(),
        profile.evening.round()
    );
    println!(
        "  Min {}°C · Max {}°C · Average {}°C",
        profile.min.round(),
        profile.max.round(),
        profile.average.round()
    );
    println!();

    for outfit in &recommendation.outfits {
        println!(
            "Outfit ({}, sized for {}°C):",
            outfit.time_of_day.as_str(),
            outfit.temperature_c.round()
        );
        for item in &outfit.items {
            println!(
                "  [{:<11}] {} (warmth {}/5): {}",
                item.category.as_str(),
                item.name,
                item.warmth_level,
                item.description
            );
        }
        if let Some(strategy) = &outfit.layering_strategy {
            println!("  Layering: {strategy}");
        }
        if let Some(notes) = &outfit.notes {
            println!("  Note: {notes}");
        }
        println!();
    }

    println!("{}", recommendation.summary);
    if let Some(advice) = &recommendation.layering_advice {
        println!("{advice}");
    }
    if let Some(notes) = &recommendation.special_notes {
        println!("{notes}");
    }
}
