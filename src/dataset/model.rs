//! Core record types: [`Country`], the owning [`Dataset`] and the logical
//! [`Field`] names shared by the parser, loader and error types.

use crate::error::RowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// The four logical columns of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Population,
    Area,
    Continent,
}

impl Field {
    /// Every required field, in canonical column order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Population, Self::Area, Self::Continent];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Population => "population",
            Self::Area => "area",
            Self::Continent => "continent",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated country record.
///
/// Fields are private so a `Country` cannot change after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    name: String,
    population: i64,
    /// Square kilometres.
    area: f64,
    continent: String,
}

impl Country {
    /// Builds a record, trimming both text fields.
    ///
    /// Continent emptiness is a parse policy and is not checked here.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::EmptyField`] for a blank name and
    /// [`RowError::NotANumber`] for a non-finite area.
    pub fn new(
        name: &str,
        population: i64,
        area: f64,
        continent: &str,
    ) -> Result<Self, RowError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RowError::EmptyField { field: Field::Name });
        }
        if !area.is_finite() {
            return Err(RowError::NotANumber {
                field: Field::Area,
                value: area.to_string(),
            });
        }
        Ok(Self {
            name: name.to_owned(),
            population,
            area,
            continent: continent.trim().to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn population(&self) -> i64 {
        self.population
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn continent(&self) -> &str {
        &self.continent
    }
}

/// The loaded collection, in source-row order.
///
/// Built once and then only borrowed; queries return `Vec<&Country>` views
/// into it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    source: Option<PathBuf>,
    countries: Vec<Country>,
}

impl Dataset {
    pub fn new(source: Option<PathBuf>, countries: Vec<Country>) -> Self {
        Self { source, countries }
    }

    /// Path the records were read from, if they came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.countries.iter()
    }

    /// All records as a borrowed view, the starting point for queries.
    pub fn all(&self) -> Vec<&Country> {
        self.countries.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.countries.iter()
    }
}
