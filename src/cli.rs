use crate::menu::Menu;
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use countries::config::AppSettings;
use countries::dataset::{self, Country, Dataset, Loaded};
use countries::display;
use countries::error::CountryError;
use countries::query::{self, RangeFilter, SortKey};
use countries::stats;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "countries",
    version,
    about = "Search, filter, sort and summarise a country dataset"
)]
pub struct Cli {
    /// CSV file to load. Defaults to the data file in the settings.
    #[arg(short, long, env = "COUNTRIES_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Settings file. Defaults to settings.json in the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Show every country
    List,
    /// Countries whose name contains TERM, ignoring case
    Search {
        term: String,
    },
    /// Countries on one continent, ignoring case
    Continent {
        name: String,
    },
    /// Countries with MIN <= population <= MAX
    Population {
        #[arg(allow_negative_numbers = true)]
        min: i64,
        #[arg(allow_negative_numbers = true)]
        max: i64,
    },
    /// Countries with MIN <= area <= MAX (km²)
    Area {
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },
    /// Countries ordered by name, population or area
    Sort {
        /// name | population | area
        key: String,

        /// Largest first
        #[arg(short, long)]
        desc: bool,
    },
    /// Extremes, means and counts per continent
    Stats,
    /// Interactive menu (the default without a command)
    Menu,
}

/// Loads the dataset and runs the requested command.
pub fn run(cli: Cli, settings: &AppSettings) -> Result<()> {
    let path = cli.file.unwrap_or_else(|| settings.data_file.clone());
    let options = settings.load_options()?;

    let Loaded { dataset, notices } = dataset::load(&path, &options)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if !notices.is_empty() {
        io::stderr()
            .lock()
            .write_all(display::render_notices(&notices).as_bytes())?;
    }

    if dataset.is_empty() {
        anyhow::bail!(
            "No countries were loaded from {}. Check the CSV file.",
            path.display()
        );
    }

    let command = cli.command.unwrap_or(Commands::Menu);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    execute(&command, &dataset, settings, cli.json, stdin.lock(), &mut stdout)
}

/// Runs one command against an already loaded dataset.
pub fn execute<R: BufRead, W: Write>(
    command: &Commands,
    dataset: &Dataset,
    settings: &AppSettings,
    json: bool,
    input: R,
    out: &mut W,
) -> Result<()> {
    let (title, records): (String, Vec<&Country>) = match command {
        Commands::List => ("all countries".to_owned(), dataset.all()),
        Commands::Search { term } => (format!("search: '{term}'"), query::search(dataset, term)),
        Commands::Continent { name } => (
            format!("continent: {name}"),
            query::filter_by_continent(dataset, name),
        ),
        Commands::Population { min, max } => (
            format!(
                "population {} to {}",
                display::format_int(*min),
                display::format_int(*max)
            ),
            query::filter_by_range(dataset, RangeFilter::Population { min: *min, max: *max }),
        ),
        Commands::Area { min, max } => (
            format!(
                "area {} to {} km²",
                display::format_decimal(*min, 0),
                display::format_decimal(*max, 0)
            ),
            query::filter_by_range(dataset, RangeFilter::Area { min: *min, max: *max }),
        ),
        Commands::Sort { key, desc } => {
            let key: SortKey = key.parse()?;
            let direction = if *desc { "descending" } else { "ascending" };
            (
                format!("sorted by {key} ({direction})"),
                query::sort(dataset, key, *desc),
            )
        }
        Commands::Stats => return write_statistics(dataset, json, out),
        Commands::Menu => {
            Menu::new(dataset, settings.display.row_limit, input, out).run()?;
            return Ok(());
        }
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
    } else {
        out.write_all(display::render_table(&title, &records, settings.display.row_limit).as_bytes())?;
    }
    Ok(())
}

fn write_statistics<W: Write>(dataset: &Dataset, json: bool, out: &mut W) -> Result<()> {
    match stats::summarize(dataset) {
        Ok(summary) if json => {
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }
        Ok(summary) => out.write_all(display::render_statistics(&summary).as_bytes())?,
        Err(CountryError::EmptyInput) => writeln!(out, "No data to compute statistics.")?,
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used)]
    use super::*;
    use clap::CommandFactory as _;

    fn sample() -> Dataset {
        Dataset::new(
            None,
            vec![
                Country::new("Chile", 19_000_000, 756_000.0, "América").unwrap(),
                Country::new("Peru", 33_000_000, 1_285_000.0, "América").unwrap(),
                Country::new("Japan", 125_000_000, 377_975.0, "Asia").unwrap(),
            ],
        )
    }

    fn run_to_string(command: &Commands, json: bool) -> Result<String> {
        let dataset = sample();
        let mut out = Vec::new();
        execute(
            command,
            &dataset,
            &AppSettings::default(),
            json,
            io::empty(),
            &mut out,
        )?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_subcommands() {
        let cli = Cli::try_parse_from(["countries", "--file", "x.csv", "sort", "population", "--desc"])
            .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("x.csv")));
        assert_eq!(
            cli.command,
            Some(Commands::Sort {
                key: "population".to_owned(),
                desc: true
            })
        );

        let cli = Cli::try_parse_from(["countries", "population", "-5", "10"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Population { min: -5, max: 10 }));
    }

    #[test]
    fn test_sort_command_output_order() {
        let text = run_to_string(
            &Commands::Sort {
                key: "population".to_owned(),
                desc: true,
            },
            false,
        )
        .unwrap();
        let japan = text.find("Japan").unwrap();
        let peru = text.find("Peru").unwrap();
        let chile = text.find("Chile").unwrap();
        assert!(japan < peru && peru < chile);
    }

    #[test]
    fn test_invalid_sort_key_is_an_error() {
        let err = run_to_string(
            &Commands::Sort {
                key: "color".to_owned(),
                desc: false,
            },
            false,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CountryError>(),
            Some(CountryError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_continent_json_output() {
        let text = run_to_string(
            &Commands::Continent {
                name: "américa".to_owned(),
            },
            true,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let names: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Chile", "Peru"]);
    }

    #[test]
    fn test_stats_json_output() {
        let text = run_to_string(&Commands::Stats, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["most_populous"]["name"], "Japan");
        assert_eq!(value["by_continent"][0]["continent"], "América");
        assert_eq!(value["by_continent"][0]["count"], 2);
    }

    #[test]
    fn test_empty_range_prints_no_results() {
        let text = run_to_string(&Commands::Area { min: 10.0, max: 1.0 }, false).unwrap();
        assert!(text.starts_with("No results for"));
    }
}
