//! Pure query operations over country records.
//!
//! Every function accepts anything that yields `&Country` (a [`Dataset`], a
//! slice, or the `Vec<&Country>` returned by a previous query) and returns a
//! fresh `Vec<&Country>`. Nothing here mutates or copies record data.
//!
//! ```
//! use countries::dataset::{Country, Dataset};
//! use countries::query::{self, RangeFilter, SortKey};
//!
//! let dataset = Dataset::new(None, vec![
//!     Country::new("Chile", 19_000_000, 756_000.0, "América").unwrap(),
//!     Country::new("Japan", 125_000_000, 377_975.0, "Asia").unwrap(),
//! ]);
//!
//! let american = query::filter_by_continent(&dataset, "AMÉRICA");
//! assert_eq!(american.len(), 1);
//!
//! let big = query::filter_by_range(&dataset, RangeFilter::Population { min: 50_000_000, max: i64::MAX });
//! let ordered = query::sort(big, SortKey::Name, false);
//! assert_eq!(ordered[0].name(), "Japan");
//! ```
//!
//! [`Dataset`]: crate::dataset::Dataset

pub mod builder;

pub use builder::Query;

use crate::dataset::Country;
use crate::error::CountryError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Records whose name contains `term`, ignoring case. An empty term matches
/// everything.
pub fn search<'a, I>(records: I, term: &str) -> Vec<&'a Country>
where
    I: IntoIterator<Item = &'a Country>,
{
    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|country| country.name().to_lowercase().contains(&needle))
        .collect()
}

/// Records whose continent equals `continent`, ignoring case.
pub fn filter_by_continent<'a, I>(records: I, continent: &str) -> Vec<&'a Country>
where
    I: IntoIterator<Item = &'a Country>,
{
    let wanted = continent.trim().to_lowercase();
    records
        .into_iter()
        .filter(|country| country.continent().to_lowercase() == wanted)
        .collect()
}

/// Inclusive bounds on one numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum RangeFilter {
    Population { min: i64, max: i64 },
    Area { min: f64, max: f64 },
}

impl RangeFilter {
    /// `min <= value <= max`. Inverted bounds match nothing.
    pub fn matches(&self, country: &Country) -> bool {
        match *self {
            Self::Population { min, max } => min <= country.population() && country.population() <= max,
            Self::Area { min, max } => min <= country.area() && country.area() <= max,
        }
    }
}

/// Records inside `range`, in input order.
pub fn filter_by_range<'a, I>(records: I, range: RangeFilter) -> Vec<&'a Country>
where
    I: IntoIterator<Item = &'a Country>,
{
    records
        .into_iter()
        .filter(|country| range.matches(country))
        .collect()
}

/// The orderable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Population,
    Area,
}

impl SortKey {
    /// Ascending comparison. Names compare by their stored, case-sensitive
    /// value; areas use the IEEE total order.
    pub fn compare(self, a: &Country, b: &Country) -> Ordering {
        match self {
            Self::Name => a.name().cmp(b.name()),
            Self::Population => a.population().cmp(&b.population()),
            Self::Area => a.area().total_cmp(&b.area()),
        }
    }
}

impl FromStr for SortKey {
    type Err = CountryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "nombre" => Ok(Self::Name),
            "population" | "poblacion" | "población" => Ok(Self::Population),
            "area" | "superficie" => Ok(Self::Area),
            _ => Err(CountryError::InvalidKey(s.to_owned())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Population => "population",
            Self::Area => "area",
        })
    }
}

/// Records ordered by `key`. The sort is stable: equal keys keep their input
/// order whether ascending or descending.
pub fn sort<'a, I>(records: I, key: SortKey, descending: bool) -> Vec<&'a Country>
where
    I: IntoIterator<Item = &'a Country>,
{
    let mut sorted: Vec<&Country> = records.into_iter().collect();
    sorted.sort_by(|a, b| {
        let ordering = key.compare(a, b);
        if descending { ordering.reverse() } else { ordering }
    });
    sorted
}
