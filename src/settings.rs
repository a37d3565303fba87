//! Game settings and preferences
//!
//! Read from `settings.json` in the working directory when present. Missing
//! fields take their defaults; a missing file means all defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_TPS;
use crate::tuning::{Tuning, TuningError};

/// Default settings file name
pub const SETTINGS_FILE: &str = "settings.json";

/// Failure to load settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Tuning(TuningError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "cannot read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "invalid settings JSON: {e}"),
            SettingsError::Tuning(e) => write!(f, "invalid tuning: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Tuning(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl From<TuningError> for SettingsError {
    fn from(e: TuningError) -> Self {
        SettingsError::Tuning(e)
    }
}

/// Run-time preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Let the idle AI play instead of reading keys
    pub autopilot: bool,
    /// Stop after this many ticks; `None` runs until the window closes
    pub max_ticks: Option<u64>,
    /// Sleep to hold the real tick rate
    pub paced: bool,
    /// Log a status line every N ticks (0 = never)
    pub hud_log_interval: u64,
    /// World geometry and physics
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            autopilot: true,
            // Five minutes of play
            max_ticks: Some(5 * 60 * u64::from(TARGET_TPS)),
            paced: false,
            hud_log_interval: 10 * u64::from(TARGET_TPS),
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load `settings.json`, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {SETTINGS_FILE}");
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
