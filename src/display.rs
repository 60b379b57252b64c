//! Plain-text rendering of query results and statistics.
//!
//! Numbers use `.` for digit grouping and `,` as the decimal separator, the
//! way the source data is usually written (`45.376.763`, `2.780.400,00`).

use crate::dataset::{Country, Notice};
use crate::stats::Statistics;
use std::fmt;

const MIN_NAME_WIDTH: usize = 25;
const MIN_CONTINENT_WIDTH: usize = 15;
const POPULATION_WIDTH: usize = 12;
const AREA_WIDTH: usize = 16;

/// `1234567` -> `"1.234.567"`
pub fn format_int(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_digits(&digits);
    if value < 0 { format!("-{grouped}") } else { grouped }
}

/// `1285000.5` with 2 decimals -> `"1.285.000,50"`
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));

    let mut out = String::with_capacity(formatted.len() + whole.len() / 3 + 1);
    let is_zero = formatted.bytes().all(|b| b == b'0' || b == b'.');
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(whole));
    if !fraction.is_empty() {
        out.push(',');
        out.push_str(fraction);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Renders `records` as an aligned table under `title`.
///
/// At most `row_limit` rows are printed; a trailing line says how many were
/// left out.
pub fn render_table(title: &str, records: &[&Country], row_limit: Option<usize>) -> String {
    Table {
        title,
        records,
        row_limit,
    }
    .to_string()
}

pub fn render_statistics(stats: &Statistics<'_>) -> String {
    StatisticsReport(stats).to_string()
}

/// One warning line per rejected row.
pub fn render_notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|notice| format!("warning: {notice}\n"))
        .collect()
}

struct Table<'a> {
    title: &'a str,
    records: &'a [&'a Country],
    row_limit: Option<usize>,
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let records = self.records;
        if records.is_empty() {
            return writeln!(f, "No results for: {}", self.title);
        }

        let name_width = records
            .iter()
            .map(|c| c.name().chars().count() + 2)
            .max()
            .unwrap_or(0)
            .max(MIN_NAME_WIDTH);
        let continent_width = records
            .iter()
            .map(|c| c.continent().chars().count() + 2)
            .max()
            .unwrap_or(0)
            .max(MIN_CONTINENT_WIDTH);
        let total_width = name_width + continent_width + POPULATION_WIDTH + AREA_WIDTH + 9;

        writeln!(
            f,
            "\n {} (total: {} countries)",
            self.title.to_uppercase(),
            records.len()
        )?;
        writeln!(f, "{}", "=".repeat(total_width))?;
        writeln!(
            f,
            "{:<name_width$} | {:<continent_width$} | {:>POPULATION_WIDTH$} | {:>AREA_WIDTH$}",
            "NAME", "CONTINENT", "POPULATION", "AREA (km²)"
        )?;
        writeln!(f, "{}", "-".repeat(total_width))?;

        let shown = self.row_limit.unwrap_or(records.len()).min(records.len());
        for country in records.iter().take(shown) {
            writeln!(
                f,
                "{:<name_width$} | {:<continent_width$} | {:>POPULATION_WIDTH$} | {:>AREA_WIDTH$}",
                country.name(),
                country.continent(),
                format_int(country.population()),
                format_decimal(country.area(), 2),
            )?;
        }
        if shown < records.len() {
            writeln!(f, "... (showing {shown} of {})", records.len())?;
        }
        writeln!(f, "{}", "=".repeat(total_width))
    }
}

struct StatisticsReport<'a, 'b>(&'a Statistics<'b>);

impl fmt::Display for StatisticsReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        writeln!(f, "\n STATISTICS ({} countries)", stats.count)?;
        writeln!(
            f,
            "- Most populous: {} ({} inhabitants)",
            stats.most_populous.name(),
            format_int(stats.most_populous.population())
        )?;
        writeln!(
            f,
            "- Least populous: {} ({} inhabitants)",
            stats.least_populous.name(),
            format_int(stats.least_populous.population())
        )?;
        writeln!(
            f,
            "- Mean population: {}",
            format_decimal(stats.mean_population, 0)
        )?;
        writeln!(f, "- Mean area: {} km²", format_decimal(stats.mean_area, 2))?;
        writeln!(f, "- Countries per continent:")?;
        for entry in &stats.by_continent {
            let label = if entry.continent.is_empty() {
                "(none)"
            } else {
                entry.continent.as_str()
            };
            writeln!(f, "   {label}: {}", entry.count)?;
        }
        Ok(())
    }
}
