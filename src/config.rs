//! Persistent application settings.
//!
//! Settings live in a JSON file, `settings.json` under the platform config
//! directory unless a path is given explicitly. Every field has a default, so
//! a missing file or a partial file both work.

use crate::dataset::{ColumnAliases, LoadOptions, ParseOptions};
use crate::error::{CountryError, Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Also write a daily rolling log file in the data directory.
    pub file: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            file: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Maximum table rows printed at once; `None` prints everything.
    pub row_limit: Option<usize>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            row_limit: Some(200),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Dataset loaded when no file is given on the command line.
    pub data_file: PathBuf,
    /// Field delimiter, a single ASCII character.
    pub delimiter: char,
    pub columns: ColumnAliases,
    pub parse: ParseOptions,
    pub logging: LoggingSettings,
    pub display: DisplaySettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("paises.csv"),
            delimiter: ',',
            columns: ColumnAliases::default(),
            parse: ParseOptions::default(),
            logging: LoggingSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

impl AppSettings {
    /// `<config dir>/countries/settings.json`
    ///
    /// # Errors
    ///
    /// Fails when the platform has no config directory.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CountryError::Config("Failed to get config directory".to_owned()))?;
        Ok(config_dir.join("countries").join("settings.json"))
    }

    /// Loads settings from `path`, or from [`Self::default_path`] when `None`.
    /// A missing file at the default location yields the defaults.
    ///
    /// # Errors
    ///
    /// Fails when an explicit `path` does not exist, or when the file exists
    /// but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if !path.exists() => Err(CountryError::Config(format!(
                "settings file {} does not exist",
                path.display()
            ))),
            Some(path) => Self::read(path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::read(&path)
                } else {
                    tracing::debug!(path = %path.display(), "No settings file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Writes the settings as pretty JSON, creating the parent directory.
    ///
    /// # Errors
    ///
    /// Fails on any I/O or serialization error.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(CountryError::Config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }
        Ok(())
    }

    /// Loader options derived from these settings.
    ///
    /// # Errors
    ///
    /// Fails when the delimiter is not ASCII.
    pub fn load_options(&self) -> Result<LoadOptions> {
        self.validate()?;
        let delimiter = u8::try_from(self.delimiter)
            .map_err(|err| CountryError::Config(format!("invalid delimiter: {err}")))?;
        Ok(LoadOptions {
            delimiter,
            columns: self.columns.clone(),
            parse: self.parse,
        })
    }
}
