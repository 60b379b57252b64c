//! Summary statistics over a collection of countries.

use crate::dataset::Country;
use crate::error::{CountryError, Result};
use serde::Serialize;

/// Number of records sharing one exact continent value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinentCount {
    pub continent: String,
    pub count: usize,
}

/// Aggregates over a non-empty collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics<'a> {
    pub count: usize,
    /// First record in input order with the highest population.
    pub most_populous: &'a Country,
    /// First record in input order with the lowest population.
    pub least_populous: &'a Country,
    pub total_population: i128,
    pub mean_population: f64,
    pub total_area: f64,
    pub mean_area: f64,
    /// In order of first appearance.
    pub by_continent: Vec<ContinentCount>,
}

/// Computes [`Statistics`] in one pass plus the continent grouping.
///
/// # Errors
///
/// Returns [`CountryError::EmptyInput`] when `records` yields nothing.
pub fn summarize<'a, I>(records: I) -> Result<Statistics<'a>>
where
    I: IntoIterator<Item = &'a Country>,
{
    let records: Vec<&Country> = records.into_iter().collect();
    let Some((&first, rest)) = records.split_first() else {
        return Err(CountryError::EmptyInput);
    };

    let mut most_populous = first;
    let mut least_populous = first;
    let mut total_population = i128::from(first.population());
    let mut total_area = first.area();

    for &country in rest {
        // strict comparisons keep the earliest record on ties
        if country.population() > most_populous.population() {
            most_populous = country;
        }
        if country.population() < least_populous.population() {
            least_populous = country;
        }
        total_population += i128::from(country.population());
        total_area += country.area();
    }

    let count = records.len();
    let n = count as f64;
    let mean_population = total_population as f64 / n;
    let mean_area = total_area / n;

    Ok(Statistics {
        count,
        most_populous,
        least_populous,
        total_population,
        mean_population,
        total_area,
        mean_area,
        by_continent: count_by_continent(records),
    })
}

/// Groups by the stored continent value, case preserved, first-seen order.
/// An empty input gives an empty list.
pub fn count_by_continent<'a, I>(records: I) -> Vec<ContinentCount>
where
    I: IntoIterator<Item = &'a Country>,
{
    let mut counts: Vec<ContinentCount> = Vec::new();
    for country in records {
        match counts
            .iter_mut()
            .find(|entry| entry.continent == country.continent())
        {
            Some(entry) => entry.count += 1,
            None => counts.push(ContinentCount {
                continent: country.continent().to_owned(),
                count: 1,
            }),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used)]
    use super::*;
    use crate::dataset::Dataset;

    fn country(name: &str, population: i64, area: f64, continent: &str) -> Country {
        Country::new(name, population, area, continent).unwrap()
    }

    fn sample() -> Dataset {
        Dataset::new(
            None,
            vec![
                country("Chile", 19_000_000, 756_000.0, "América"),
                country("Peru", 33_000_000, 1_285_000.0, "América"),
                country("Japan", 125_000_000, 377_975.0, "Asia"),
            ],
        )
    }

    #[test]
    fn test_summary_of_sample() {
        let dataset = sample();
        let stats = summarize(&dataset).unwrap();

        assert_eq!(stats.count, 3);
        assert_eq!(stats.most_populous.name(), "Japan");
        assert_eq!(stats.least_populous.name(), "Chile");
        assert_eq!(stats.total_population, 177_000_000);
        assert!((stats.mean_population - 59_000_000.0).abs() < 1e-6);
        assert!((stats.mean_area - 2_418_975.0 / 3.0).abs() < 1e-6);
        assert_eq!(
            stats.by_continent,
            [
                ContinentCount {
                    continent: "América".to_owned(),
                    count: 2
                },
                ContinentCount {
                    continent: "Asia".to_owned(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_empty_input_is_signalled() {
        let empty: Vec<&Country> = Vec::new();
        assert!(matches!(summarize(empty), Err(CountryError::EmptyInput)));
    }

    #[test]
    fn test_extremes_keep_first_on_ties() {
        let dataset = Dataset::new(
            None,
            vec![
                country("A", 5, 1.0, "X"),
                country("B", 9, 1.0, "X"),
                country("C", 9, 1.0, "X"),
                country("D", 5, 1.0, "X"),
            ],
        );
        let stats = summarize(&dataset).unwrap();
        assert_eq!(stats.most_populous.name(), "B");
        assert_eq!(stats.least_populous.name(), "A");
    }

    #[test]
    fn test_single_record() {
        let dataset = Dataset::new(None, vec![country("Solo", 7, 3.5, "Oceanía")]);
        let stats = summarize(&dataset).unwrap();
        assert_eq!(stats.most_populous, stats.least_populous);
        assert!((stats.mean_area - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_continent_counts_are_case_preserving() {
        let dataset = Dataset::new(
            None,
            vec![
                country("A", 1, 1.0, "asia"),
                country("B", 1, 1.0, "Asia"),
                country("C", 1, 1.0, "asia"),
            ],
        );
        let counts = count_by_continent(&dataset);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.first().unwrap().continent, "asia");
        assert_eq!(counts.first().unwrap().count, 2);
        assert!(count_by_continent(Vec::<&Country>::new()).is_empty());
    }
}
