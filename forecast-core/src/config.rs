use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Unit system the provider applies to temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
    Standard,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    /// Temperature suffix used in human-readable output.
    pub fn temp_symbol(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Metric, Units::Imperial, Units::Standard]
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            "standard" => Ok(Units::Standard),
            _ => Err(anyhow!(
                "Unknown unit system '{value}'. Supported: metric, imperial, standard."
            )),
        }
    }
}

/// Top-level configuration stored on disk as JSON.
///
/// Example:
/// ```json
/// {"api_key": "...", "city": "Paris", "units": "metric"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: String,
    pub city: String,
    pub units: Units,
}

/// Outcome of [`Config::load_or_init`].
#[derive(Debug, Clone)]
pub enum ConfigState {
    /// A configuration file existed and parsed.
    Ready(Config),
    /// No file existed; a placeholder was written at this path. The caller
    /// is expected to tell the operator to edit it and stop.
    Created(PathBuf),
}

impl Config {
    /// Placeholder written on first run; the operator edits it by hand.
    pub fn placeholder() -> Self {
        Self {
            api_key: "YOUR_API_KEY".to_string(),
            city: "YOUR_CITY".to_string(),
            units: Units::Metric,
        }
    }

    /// Load an existing configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save this configuration as pretty JSON, creating parent directories
    /// as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Load the configuration, bootstrapping a placeholder file if none
    /// exists yet. First-run bootstrap is intentionally non-resuming: the
    /// caller reports the created path and exits so the operator can fill
    /// in real values.
    pub fn load_or_init(path: &Path) -> Result<ConfigState> {
        if !path.exists() {
            Self::placeholder().save(path)?;
            return Ok(ConfigState::Created(path.to_path_buf()));
        }

        Ok(ConfigState::Ready(Self::load(path)?))
    }

    /// Default path to the config file, in the platform config directory.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast-dashboard", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }
}
