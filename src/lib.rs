//! # Countries - country dataset toolkit
//!
//! Loads a delimited file of countries (name, population, area, continent),
//! validates every row, and answers searches, filters, sorts and summary
//! statistics over the in-memory collection.
//!
//! ## Quick Start
//!
//! ```no_run
//! use countries::dataset::{self, LoadOptions};
//! use countries::query::{self, SortKey};
//! use countries::stats;
//! use std::path::Path;
//!
//! # fn example() -> countries::error::Result<()> {
//! let loaded = dataset::load(Path::new("paises.csv"), &LoadOptions::default())?;
//! let dataset = loaded.dataset;
//!
//! let asia = query::filter_by_continent(&dataset, "asia");
//! let by_population = query::sort(asia, SortKey::Population, true);
//! println!("Most populous in Asia: {}", by_population[0].name());
//!
//! let summary = stats::summarize(&dataset)?;
//! println!("Mean area: {:.2} km²", summary.mean_area);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`dataset`]: record model, row parser and file loader
//! - [`query`]: search, filters, sort and the [`query::Query`] builder
//! - [`stats`]: extremes, means and per-continent counts
//! - [`error`]: error types and handling utilities
//! - [`config`]: JSON settings
//! - [`logging`]: tracing subscriber setup
//! - [`display`]: text tables and number formatting
//!
//! ## Ownership Model
//!
//! The [`dataset::Dataset`] is loaded once and owned by the caller. Queries
//! borrow it and return `Vec<&Country>`, so results can be fed into further
//! queries without copying any record:
//!
//! ```
//! use countries::dataset::{Country, Dataset};
//! use countries::query;
//!
//! let dataset = Dataset::new(None, vec![
//!     Country::new("Chile", 19_000_000, 756_000.0, "América").unwrap(),
//!     Country::new("Peru", 33_000_000, 1_285_000.0, "América").unwrap(),
//! ]);
//! let american = query::filter_by_continent(&dataset, "américa");
//! let with_e = query::search(american, "E");
//! assert_eq!(with_e.len(), 2);
//! ```

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod dataset;
pub mod display;
pub mod error;
pub mod logging;
pub mod query;
pub mod stats;
