use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// A named location the user saved for quick lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLocation {
    /// Short alias, e.g. "home".
    pub name: String,
    /// The address/query string sent to the forecast provider.
    pub address: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeather API key.
    pub api_key: Option<String>,

    /// Example TOML:
    /// [[locations]]
    /// name = "home"
    /// address = "Lisbon,PT"
    /// is_default = true
    #[serde(default)]
    pub locations: Vec<SavedLocation>,
}

impl Config {
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No OpenWeather API key configured.\n\
                 Hint: run `wearcast configure` and enter your API key."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Add or replace a saved location. The first location ever saved becomes
    /// the default; marking a later one default clears the previous flag.
    pub fn upsert_location(&mut self, name: String, address: String, make_default: bool) {
        let make_default = make_default || self.locations.is_empty();

        if make_default {
            for loc in &mut self.locations {
                loc.is_default = false;
            }
        }

        if let Some(existing) = self.locations.iter_mut().find(|l| l.name == name) {
            existing.address = address;
            existing.is_default = make_default || existing.is_default;
        } else {
            self.locations.push(SavedLocation { name, address, is_default: make_default });
        }
    }

    /// Remove a saved location by name. Returns whether anything was removed.
    pub fn remove_location(&mut self, name: &str) -> bool {
        let before = self.locations.len();
        self.locations.retain(|l| l.name != name);
        self.locations.len() != before
    }

    pub fn default_location(&self) -> Option<&SavedLocation> {
        self.locations.iter().find(|l| l.is_default)
    }

    /// Resolve a user-supplied query to a provider address: a saved-location
    /// name wins, anything else is treated as a literal address. With no
    /// query, the default saved location is used.
    pub fn resolve_address(&self, query: Option<&str>) -> Result<String> {
        match query {
            Some(q) => Ok(self
                .locations
                .iter()
                .find(|l| l.name == q)
                .map_or_else(|| q.to_string(), |l| l.address.clone())),
            None => self
                .default_location()
                .map(|l| l.address.clone())
                .ok_or_else(|| {
                    anyhow!(
                        "No location given and no default saved.\n\
                         Hint: `wearcast recommend <address>` or `wearcast location add <name> <address> --default`."
                    )
                }),
        }
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wearcast", "wearcast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
