//! # Countries command-line entry point
//!
//! ```text
//! main()
//!   │
//!   ├─> Parse CLI arguments (clap)
//!   ├─> Load settings (JSON) and initialise logging
//!   ├─> Load the dataset, printing row warnings
//!   │
//!   ├─> If a command was given: run it and exit
//!   └─> Otherwise: start the interactive menu
//! ```
//!
//! Fatal load errors (missing file, missing columns) end the process with a
//! non-zero status and the error chain on stderr.

#![warn(clippy::all, rust_2018_idioms)]

mod cli;
mod menu;

use anyhow::{Context as _, Result};
use clap::Parser as _;
use countries::config::AppSettings;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let settings =
        AppSettings::load(cli.config.as_deref()).context("Failed to load settings")?;
    countries::logging::init(&settings.logging)?;

    cli::run(cli, &settings)
}
