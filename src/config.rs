use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::error::Result;
use crate::holidays::HolidaySet;

const CONFIG_PATH_ENV_VAR: &str = "KALENDAR_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("kalendar").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".kalendar.toml"));
    }

    locations
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde_as(as = "DisplayFromStr")]
    pub first_weekday: Weekday,
    pub locale: String,
    pub holidays: HolidaySet,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            // Monday is the first day of the week in Europe
            first_weekday: Weekday::Mon,
            locale: "de_DE".to_owned(),
            holidays: HolidaySet::default(),
        }
    }
}

pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load the config from an explicitly given path, or from the first
/// existing default location, or fall back to the built-in defaults.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return load(path);
    }

    for location in find_configfile_locations() {
        if location.is_file() {
            log::info!("Using config file '{}'", location.display());
            return load(&location);
        }
    }

    log::info!("No config file found, using built-in defaults");
    Ok(Config::default())
}
