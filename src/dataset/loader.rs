//! Reading a delimited source into a [`Dataset`].

use super::model::{Dataset, Field};
use super::parser::{ParseOptions, RawRow, parse_record};
use crate::error::{CountryError, Result, RowError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Accepted header names for each logical field, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnAliases {
    pub name: Vec<String>,
    pub population: Vec<String>,
    pub area: Vec<String>,
    pub continent: Vec<String>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            name: vec!["nombre".to_owned(), "name".to_owned()],
            population: vec!["poblacion".to_owned(), "population".to_owned()],
            area: vec!["superficie".to_owned(), "area".to_owned()],
            continent: vec!["continente".to_owned(), "continent".to_owned()],
        }
    }
}

impl ColumnAliases {
    pub fn for_field(&self, field: Field) -> &[String] {
        match field {
            Field::Name => &self.name,
            Field::Population => &self.population,
            Field::Area => &self.area,
            Field::Continent => &self.continent,
        }
    }
}

/// Everything the loader needs besides the source itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
    pub columns: ColumnAliases,
    pub parse: ParseOptions,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            columns: ColumnAliases::default(),
            parse: ParseOptions::default(),
        }
    }
}

/// A rejected source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// 1-based position counting from the first record after the header.
    /// Blank lines are skipped by the reader and are not counted, so this is
    /// a record number rather than a source line number.
    pub row: usize,
    pub reason: RowError,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: skipped, {}", self.row, self.reason)
    }
}

/// Result of a successful load: the records plus any row rejections.
#[derive(Debug)]
pub struct Loaded {
    pub dataset: Dataset,
    pub notices: Vec<Notice>,
}

/// Loads the file at `path`.
///
/// # Errors
///
/// Returns [`CountryError::SourceNotFound`] when the file cannot be opened,
/// [`CountryError::MissingColumns`] when the header lacks a required field
/// and [`CountryError::Csv`] when the reader itself fails.
pub fn load(path: &Path, options: &LoadOptions) -> Result<Loaded> {
    let file = File::open(path).map_err(|source| CountryError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "Reading dataset");
    load_from_reader(file, Some(path.to_path_buf()), options)
}

/// Loads from any reader. `source` is recorded on the resulting [`Dataset`].
///
/// # Errors
///
/// See [`load`].
pub fn load_from_reader<R: std::io::Read>(
    input: R,
    source: Option<PathBuf>,
    options: &LoadOptions,
) -> Result<Loaded> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let columns = resolve_columns(reader.headers()?, &options.columns)?;

    let mut countries = Vec::new();
    let mut notices = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let row = index + 1;
        let outcome = match result {
            Ok(record) => {
                let raw: RawRow<'_> = columns
                    .iter()
                    .filter_map(|&(field, position)| record.get(position).map(|cell| (field, cell)))
                    .collect();
                parse_record(&raw, &options.parse)
            }
            Err(err) if matches!(err.kind(), csv::ErrorKind::Io(_)) => return Err(err.into()),
            Err(err) => Err(RowError::Malformed {
                message: err.to_string(),
            }),
        };

        match outcome {
            Ok(country) => countries.push(country),
            Err(reason) => {
                tracing::warn!(row, %reason, "Skipping invalid row");
                notices.push(Notice { row, reason });
            }
        }
    }

    tracing::info!(
        records = countries.len(),
        rejected = notices.len(),
        "Dataset loaded"
    );

    Ok(Loaded {
        dataset: Dataset::new(source, countries),
        notices,
    })
}

/// Maps each field to its header position, failing with every missing field.
fn resolve_columns(
    headers: &csv::StringRecord,
    aliases: &ColumnAliases,
) -> Result<Vec<(Field, usize)>> {
    let normalized: Vec<String> = headers
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').trim().to_lowercase())
        .collect();

    let mut columns = Vec::with_capacity(Field::ALL.len());
    let mut missing = Vec::new();

    for field in Field::ALL {
        let position = normalized.iter().position(|header| {
            aliases
                .for_field(field)
                .iter()
                .any(|alias| alias.trim().to_lowercase() == *header)
        });
        match position {
            Some(position) => columns.push((field, position)),
            None => missing.push(field),
        }
    }

    if missing.is_empty() {
        Ok(columns)
    } else {
        Err(CountryError::MissingColumns(missing))
    }
}
