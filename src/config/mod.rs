use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::IdentityScheme;
use crate::utils::date::months_before;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

/// Run defaults used when neither the config file nor the command line set a value.
pub mod defaults {
    pub const CUTOFF_MONTHS: u32 = 16;
    pub const SATURATION_WEEKS: u32 = 16;
    pub const PROX_WEEKS: u32 = 2;
    pub const MIN_RSVPS: i64 = 16;
    pub const MIN_ROR: f64 = 0.0;
    pub const VENUES_PER_MARKET: usize = 20;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_cutoff_months")]
    pub cutoff_months: u32,
    #[serde(default = "default_saturation_weeks")]
    pub saturation_weeks: u32,
    #[serde(default = "default_prox_weeks")]
    pub prox_weeks: u32,
    #[serde(default = "default_min_rsvps")]
    pub min_rsvps: i64,
    #[serde(default = "default_min_ror")]
    pub min_ror: f64,
    #[serde(default = "default_venues_per_market")]
    pub venues_per_market: usize,
    #[serde(default)]
    pub markets: Vec<String>,
    #[serde(default)]
    pub output_format: ExportFormat,
    #[serde(default)]
    pub identity_scheme: IdentityScheme,
}

fn default_cutoff_months() -> u32 {
    defaults::CUTOFF_MONTHS
}
fn default_saturation_weeks() -> u32 {
    defaults::SATURATION_WEEKS
}
fn default_prox_weeks() -> u32 {
    defaults::PROX_WEEKS
}
fn default_min_rsvps() -> i64 {
    defaults::MIN_RSVPS
}
fn default_min_ror() -> f64 {
    defaults::MIN_ROR
}
fn default_venues_per_market() -> usize {
    defaults::VENUES_PER_MARKET
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cutoff_months: default_cutoff_months(),
            saturation_weeks: default_saturation_weeks(),
            prox_weeks: default_prox_weeks(),
            min_rsvps: default_min_rsvps(),
            min_ror: default_min_ror(),
            venues_per_market: default_venues_per_market(),
            markets: Vec::new(),
            output_format: ExportFormat::default(),
            identity_scheme: IdentityScheme::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rvenuereport")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rvenuereport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rvenuereport.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Write a default configuration file unless one already exists.
    /// Returns `true` when a file was written.
    pub fn init_file(path: &Path, is_test: bool) -> AppResult<bool> {
        if path.exists() || is_test {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Default historical cutoff: `cutoff_months` before `today`.
    pub fn cutoff_date(&self, today: NaiveDate) -> NaiveDate {
        months_before(today, self.cutoff_months)
    }
}
