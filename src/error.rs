//! Centralized error handling for the countries crate.
//!
//! Errors come in two tiers:
//!
//! - [`CountryError`] is returned from fallible operations. Load-time variants
//!   ([`CountryError::SourceNotFound`], [`CountryError::MissingColumns`]) are
//!   fatal for a session; [`CountryError::InvalidKey`] and
//!   [`CountryError::EmptyInput`] are usage conditions the caller can recover
//!   from without dropping the loaded dataset.
//! - [`RowError`] describes why a single source row was rejected. It is never
//!   returned from [`crate::dataset::load`]; it travels inside a
//!   [`crate::dataset::Notice`] next to the successfully parsed records.
//!
//! ```
//! use countries::error::CountryError;
//!
//! fn describe(err: &CountryError) -> &'static str {
//!     match err {
//!         CountryError::SourceNotFound { .. } | CountryError::MissingColumns(_) => "fatal",
//!         CountryError::InvalidKey(_) => "re-prompt",
//!         CountryError::EmptyInput => "no statistics",
//!         _ => "other",
//!     }
//! }
//! # assert_eq!(describe(&CountryError::EmptyInput), "no statistics");
//! ```
//!
//! ## Context Extension Trait
//!
//! [`ResultExt`] adds `.context()` to any `Result` whose error converts into
//! [`CountryError`]:
//!
//! ```no_run
//! use countries::error::ResultExt as _;
//!
//! fn read_settings() -> countries::error::Result<String> {
//!     std::fs::read_to_string("settings.json").context("Failed to read settings")
//! }
//! ```

use crate::dataset::Field;
use std::fmt;
use std::path::PathBuf;

/// Main error type for countries operations.
#[derive(Debug)]
pub enum CountryError {
    /// The data source does not exist or cannot be opened.
    SourceNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The header row lacks one or more required columns.
    MissingColumns(Vec<Field>),

    /// The delimited reader failed on the header or structure of the file.
    Csv(String),

    /// I/O errors outside of opening the source.
    Io(std::io::Error),

    /// Sort key text that names none of the orderable fields.
    InvalidKey(String),

    /// Statistics requested over zero records.
    EmptyInput,

    /// Settings file unreadable or invalid.
    Config(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for CountryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceNotFound { path, source } => {
                write!(f, "Data source '{}' could not be opened: {source}", path.display())
            }
            Self::MissingColumns(fields) => {
                let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
                write!(f, "Missing required columns: {}", names.join(", "))
            }
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidKey(key) => write!(
                f,
                "Invalid sort key '{key}' (expected name, population or area)"
            ),
            Self::EmptyInput => write!(f, "No records to compute statistics over"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CountryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceNotFound { source, .. } | Self::Io(source) => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CountryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CountryError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for CountryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

/// Result type alias for countries operations.
pub type Result<T> = std::result::Result<T, CountryError>;

/// Reason a single source row was excluded from the loaded collection.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowError {
    /// The row has no cell for a required column.
    MissingField { field: Field },

    /// A text field is empty after trimming.
    EmptyField { field: Field },

    /// A numeric field did not parse after separator stripping.
    NotANumber { field: Field, value: String },

    /// A numeric field is negative while negatives are rejected.
    Negative { field: Field, value: String },

    /// The reader could not decode the row at all.
    Malformed { message: String },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing field '{field}'"),
            Self::EmptyField { field } => write!(f, "field '{field}' is empty"),
            Self::NotANumber { field, value } => {
                write!(f, "field '{field}' is not a number: '{value}'")
            }
            Self::Negative { field, value } => {
                write!(f, "field '{field}' is negative: '{value}'")
            }
            Self::Malformed { message } => write!(f, "malformed row: {message}"),
        }
    }
}

impl std::error::Error for RowError {}

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped as [`CountryError::Other`].
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped as [`CountryError::Other`].
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<CountryError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: CountryError = e.into();
            CountryError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: CountryError = e.into();
            CountryError::Other(format!("{}: {}", f(), err))
        })
    }
}
