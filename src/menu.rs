//! Interactive numbered menu over a loaded dataset.
//!
//! Reads one answer per line. End of input behaves like choosing "exit", so
//! the menu can be driven from a pipe as well as a terminal.

use countries::dataset::{Country, Dataset};
use countries::dataset::parser::strip_separators;
use countries::display;
use countries::query::{self, RangeFilter, SortKey};
use countries::stats;
use std::io::{self, BufRead, Write};

const MENU: &str = "
========================================
 COUNTRY DATA
========================================
1. List all countries
2. Search by name
3. Filter by continent
4. Filter by population range
5. Filter by area range
6. Sort countries
7. Show statistics
0. Exit
========================================";

pub struct Menu<'a, R, W> {
    dataset: &'a Dataset,
    row_limit: Option<usize>,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(dataset: &'a Dataset, row_limit: Option<usize>, input: R, out: W) -> Self {
        Self {
            dataset,
            row_limit,
            input,
            out,
        }
    }

    /// Loops until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "{MENU}")?;
            let Some(choice) = self.prompt("Select an option: ")? else {
                break;
            };

            let keep_going = match choice.as_str() {
                "1" => {
                    let dataset = self.dataset;
                    self.show("all countries", &dataset.all())?;
                    true
                }
                "2" => self.search()?,
                "3" => self.continent()?,
                "4" => self.population_range()?,
                "5" => self.area_range()?,
                "6" => self.sort()?,
                "7" => {
                    self.statistics()?;
                    true
                }
                "0" => false,
                _ => {
                    writeln!(self.out, "Invalid option. Try again.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        writeln!(self.out, "Exiting.")?;
        Ok(())
    }

    fn search(&mut self) -> io::Result<bool> {
        let Some(term) = self.prompt("Enter a name or part of a name: ")? else {
            return Ok(false);
        };
        let results = query::search(self.dataset, &term);
        self.show(&format!("search: '{term}'"), &results)?;
        Ok(true)
    }

    fn continent(&mut self) -> io::Result<bool> {
        let Some(continent) = self.prompt("Enter the continent: ")? else {
            return Ok(false);
        };
        let results = query::filter_by_continent(self.dataset, &continent);
        self.show(&format!("continent: {continent}"), &results)?;
        Ok(true)
    }

    fn population_range(&mut self) -> io::Result<bool> {
        let Some(min) = self.prompt("Minimum population: ")? else {
            return Ok(false);
        };
        let Some(max) = self.prompt("Maximum population: ")? else {
            return Ok(false);
        };
        match (
            strip_separators(&min).parse::<i64>(),
            strip_separators(&max).parse::<i64>(),
        ) {
            (Ok(min), Ok(max)) => {
                let results =
                    query::filter_by_range(self.dataset, RangeFilter::Population { min, max });
                let title = format!(
                    "population {} to {}",
                    display::format_int(min),
                    display::format_int(max)
                );
                self.show(&title, &results)?;
            }
            _ => writeln!(self.out, "Error: enter valid whole numbers.")?,
        }
        Ok(true)
    }

    fn area_range(&mut self) -> io::Result<bool> {
        let Some(min) = self.prompt("Minimum area (km²): ")? else {
            return Ok(false);
        };
        let Some(max) = self.prompt("Maximum area (km²): ")? else {
            return Ok(false);
        };
        match (min.parse::<f64>(), max.parse::<f64>()) {
            (Ok(min), Ok(max)) if min.is_finite() && max.is_finite() => {
                let results = query::filter_by_range(self.dataset, RangeFilter::Area { min, max });
                let title = format!(
                    "area {} to {} km²",
                    display::format_decimal(min, 0),
                    display::format_decimal(max, 0)
                );
                self.show(&title, &results)?;
            }
            _ => writeln!(self.out, "Error: enter valid numbers.")?,
        }
        Ok(true)
    }

    fn sort(&mut self) -> io::Result<bool> {
        writeln!(self.out, "\nSort by:\n1. Name\n2. Population\n3. Area")?;
        let Some(choice) = self.prompt("Select a key: ")? else {
            return Ok(false);
        };
        let Some(descending) = self.prompt("Descending order? (y/n): ")? else {
            return Ok(false);
        };
        let descending = matches!(descending.to_lowercase().as_str(), "y" | "yes" | "s" | "si" | "sí");

        let key_text = match choice.as_str() {
            "1" => "name",
            "2" => "population",
            "3" => "area",
            other => other,
        };
        match key_text.parse::<SortKey>() {
            Ok(key) => {
                let results = query::sort(self.dataset, key, descending);
                let title = format!("sorted by {key} (descending: {descending})");
                self.show(&title, &results)?;
            }
            Err(err) => writeln!(self.out, "{err}. Try again.")?,
        }
        Ok(true)
    }

    fn statistics(&mut self) -> io::Result<()> {
        match stats::summarize(self.dataset) {
            Ok(summary) => self
                .out
                .write_all(display::render_statistics(&summary).as_bytes()),
            Err(_) => writeln!(self.out, "No data to compute statistics."),
        }
    }

    fn show(&mut self, title: &str, records: &[&Country]) -> io::Result<()> {
        self.out
            .write_all(display::render_table(title, records, self.row_limit).as_bytes())
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}
