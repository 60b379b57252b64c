//! Loading and validating the country dataset.
//!
//! A delimited source is read once into a [`Dataset`]. Rows that fail
//! validation are dropped and reported as [`Notice`]s; structural problems
//! (unreadable source, missing columns) fail the whole load.
//!
//! ```no_run
//! use countries::dataset::{self, LoadOptions};
//! use std::path::Path;
//!
//! # fn example() -> countries::error::Result<()> {
//! let loaded = dataset::load(Path::new("paises.csv"), &LoadOptions::default())?;
//! for notice in &loaded.notices {
//!     eprintln!("{notice}");
//! }
//! println!("{} countries loaded", loaded.dataset.len());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod model;
pub mod parser;

pub use loader::{ColumnAliases, LoadOptions, Loaded, Notice, load, load_from_reader};
pub use model::{Country, Dataset, Field};
pub use parser::{ParseOptions, RawRow, parse_record};
