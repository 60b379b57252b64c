//! Row validation: raw cell text in, [`Country`] or [`RowError`] out.

use super::model::{Country, Field};
use crate::error::RowError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One source row keyed by logical field. Never escapes the loader.
pub type RawRow<'a> = HashMap<Field, &'a str>;

/// Validation policy for the open cases the source data leaves undecided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Accept rows whose continent is blank after trimming.
    pub allow_empty_continent: bool,
    /// Reject rows with a negative population or area.
    pub reject_negative: bool,
}

/// Validates one row.
///
/// # Errors
///
/// Returns the first problem found, checking fields in the order name,
/// population, area, continent.
pub fn parse_record(row: &RawRow<'_>, options: &ParseOptions) -> Result<Country, RowError> {
    let name = require(row, Field::Name)?.trim();
    if name.is_empty() {
        return Err(RowError::EmptyField { field: Field::Name });
    }

    let population_raw = require(row, Field::Population)?;
    let population: i64 = strip_separators(population_raw)
        .parse()
        .map_err(|_err| not_a_number(Field::Population, population_raw))?;

    let area_raw = require(row, Field::Area)?;
    let area: f64 = strip_separators(area_raw)
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
        .ok_or_else(|| not_a_number(Field::Area, area_raw))?;

    let continent = require(row, Field::Continent)?.trim();
    if continent.is_empty() && !options.allow_empty_continent {
        return Err(RowError::EmptyField {
            field: Field::Continent,
        });
    }

    if options.reject_negative {
        if population < 0 {
            return Err(negative(Field::Population, population_raw));
        }
        if area < 0.0 {
            return Err(negative(Field::Area, area_raw));
        }
    }

    Country::new(name, population, area, continent)
}

/// Drops surrounding whitespace and every `.` then every `,`, so that
/// `"1.234.567"` and `"1,234,567"` both read as `1234567`.
pub fn strip_separators(raw: &str) -> String {
    raw.trim().replace('.', "").replace(',', "")
}

fn require<'a>(row: &RawRow<'a>, field: Field) -> Result<&'a str, RowError> {
    row.get(&field)
        .copied()
        .ok_or(RowError::MissingField { field })
}

fn not_a_number(field: Field, raw: &str) -> RowError {
    RowError::NotANumber {
        field,
        value: raw.trim().to_owned(),
    }
}

fn negative(field: Field, raw: &str) -> RowError {
    RowError::Negative {
        field,
        value: raw.trim().to_owned(),
    }
}
