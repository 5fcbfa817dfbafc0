//! Settings file for the lookup front-end.
//!
//! Settings live in the platform config folder unless `--config` names a
//! file:
//! - macOS: ~/Library/Application Support/fr.clinique.Anesth-Finder/
//! - Windows: %APPDATA%/clinique/Anesth Finder/config/
//! - Linux: ~/.config/anesthfinder/
//!
//! ```toml
//! [source]
//! location = "https://docs.google.com/spreadsheets/d/<id>/export?format=csv"
//! layout = "long"
//! cache_bust = true
//! timeout_secs = 30
//!
//! [lookup]
//! policy = "strict"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use anesth_ingest::{FetchOptions, Layout, ScheduleSource};
use anesth_lookup::{FallbackRoster, MissPolicy, PolicyKind};

const APP_QUALIFIER: &str = "fr";
const APP_ORG: &str = "clinique";
const APP_NAME: &str = "Anesth Finder";
const CONFIG_FILENAME: &str = "settings.toml";

/// Default schedule location, relative to the working directory.
pub const DEFAULT_LOCATION: &str = "data.csv";

/// Application settings (TOML).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source: SourceSettings,
    pub lookup: LookupSettings,
}

/// Where and how to read the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// File path or `http(s)://` URL.
    pub location: String,
    /// CSV layout of the export.
    pub layout: Layout,
    /// Append a timestamp parameter to URLs.
    pub cache_bust: bool,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            layout: Layout::default(),
            cache_bust: true,
            timeout_secs: 30,
        }
    }
}

impl SourceSettings {
    pub fn source(&self) -> ScheduleSource {
        ScheduleSource::parse(&self.location)
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            cache_bust: self.cache_bust,
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
        }
    }
}

/// Lookup miss behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupSettings {
    pub policy: PolicyKind,
    /// Names used by the random fallback.
    pub fallback_roster: FallbackRoster,
}

impl LookupSettings {
    pub fn miss_policy(&self) -> MissPolicy {
        MissPolicy::from_kind(self.policy, self.fallback_roster.clone())
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub location: Option<String>,
    pub layout: Option<Layout>,
    pub policy: Option<PolicyKind>,
    pub no_cache_bust: bool,
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse settings")
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(location) = &overrides.location {
            self.source.location.clone_from(location);
        }
        if let Some(layout) = overrides.layout {
            self.source.layout = layout;
        }
        if let Some(policy) = overrides.policy {
            self.lookup.policy = policy;
        }
        if overrides.no_cache_bust {
            self.source.cache_bust = false;
        }
    }
}

/// Get the path to the default settings file.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from an explicit path; failures are errors.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    let settings = Settings::from_toml_str(&content)
        .with_context(|| format!("settings file {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Load settings from the default location.
///
/// Returns default settings if:
/// - The settings file doesn't exist
/// - The settings file cannot be read or parsed
/// - The platform-specific directory cannot be determined
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("could not determine settings path, using defaults");
        return Settings::default();
    };

    match fs::read_to_string(&path) {
        Ok(content) => match Settings::from_toml_str(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "{e:#}, using defaults");
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to read settings file: {e}, using defaults");
            Settings::default()
        }
    }
}
