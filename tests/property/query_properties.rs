use countries::dataset::{Country, Field, ParseOptions, RawRow, parse_record};
use countries::display::format_int;
use countries::query::{self, RangeFilter, SortKey};
use countries::stats::count_by_continent;
use proptest::prelude::*;

type Row = (String, i64, f64, String);

fn rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        (
            "[A-Za-z]{1,8}",
            -1_000_000_000_i64..2_000_000_000,
            0.0_f64..20_000_000.0,
            prop::sample::select(vec!["América", "Asia", "Europa", "África", "Oceanía"]),
        )
            .prop_map(|(name, population, area, continent)| {
                (name, population, area, continent.to_owned())
            }),
        0..40,
    )
}

fn build(rows: &[Row]) -> Vec<Country> {
    rows.iter()
        .filter_map(|(name, population, area, continent)| {
            Country::new(name, *population, *area, continent).ok()
        })
        .collect()
}

/// Few distinct key values so that ties are common. Names are unique.
fn tied_rows() -> impl Strategy<Value = Vec<Country>> {
    prop::collection::vec((0_i64..4, 0_u8..3), 0..30).prop_map(|keys| {
        keys.into_iter()
            .enumerate()
            .filter_map(|(i, (population, area))| {
                Country::new(&format!("c{i:02}"), population, f64::from(area), "Asia").ok()
            })
            .collect()
    })
}

/// Position of each record in `source`, listed in the order of `sorted`.
fn source_positions(source: &[Country], sorted: &[&Country]) -> Vec<usize> {
    sorted
        .iter()
        .filter_map(|c| source.iter().position(|s| std::ptr::eq(s, *c)))
        .collect()
}

/// Records with equal keys appear in `sorted` in their `source` order.
fn ties_keep_source_order(source: &[Country], sorted: &[&Country], key: SortKey) -> bool {
    let positions = source_positions(source, sorted);
    positions.len() == sorted.len()
        && sorted
            .windows(2)
            .zip(positions.windows(2))
            .all(|(pair, pos)| !key.compare(pair[0], pair[1]).is_eq() || pos[0] < pos[1])
}

fn sort_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(vec![SortKey::Name, SortKey::Population, SortKey::Area])
}

proptest! {
    #[test]
    fn empty_search_returns_everything_in_order(rows in rows()) {
        let countries = build(&rows);
        let found = query::search(&countries, "");
        prop_assert_eq!(found.len(), countries.len());
        for (a, b) in found.iter().zip(&countries) {
            prop_assert!(std::ptr::eq(*a, b));
        }
    }

    #[test]
    fn search_keeps_matching_records_in_source_order(rows in rows(), term in "[a-zA-Z]{0,3}") {
        let countries = build(&rows);
        let needle = term.to_lowercase();
        let expected: Vec<&Country> = countries
            .iter()
            .filter(|c| c.name().to_lowercase().contains(&needle))
            .collect();
        let found = query::search(&countries, &term);
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn inverted_population_range_is_empty(rows in rows(), min in 0_i64..1_000_000, gap in 1_i64..1_000) {
        let countries = build(&rows);
        let found = query::filter_by_range(
            &countries,
            RangeFilter::Population { min, max: min - gap },
        );
        prop_assert!(found.is_empty());
    }

    #[test]
    fn range_results_satisfy_bounds(rows in rows(), min in 0.0_f64..10_000_000.0, width in 0.0_f64..10_000_000.0) {
        let countries = build(&rows);
        let max = min + width;
        for country in query::filter_by_range(&countries, RangeFilter::Area { min, max }) {
            prop_assert!(country.area() >= min && country.area() <= max);
        }
    }

    #[test]
    fn sort_is_idempotent(rows in rows(), key in sort_key(), descending in any::<bool>()) {
        let countries = build(&rows);
        let once = query::sort(&countries, key, descending);
        let twice = query::sort(once.clone(), key, descending);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_orders_adjacent_pairs(rows in rows(), key in sort_key(), descending in any::<bool>()) {
        let countries = build(&rows);
        let sorted = query::sort(&countries, key, descending);
        for pair in sorted.windows(2) {
            let ordering = key.compare(pair[0], pair[1]);
            if descending {
                prop_assert!(ordering.is_ge());
            } else {
                prop_assert!(ordering.is_le());
            }
        }
    }

    #[test]
    fn sort_keeps_every_record(rows in rows(), key in sort_key()) {
        let countries = build(&rows);
        let sorted = query::sort(&countries, key, true);
        prop_assert_eq!(sorted.len(), countries.len());
        for country in &countries {
            prop_assert!(sorted.iter().any(|c| std::ptr::eq(*c, country)));
        }
    }

    #[test]
    fn continent_counts_sum_to_len(rows in rows()) {
        let countries = build(&rows);
        let total: usize = count_by_continent(&countries).iter().map(|c| c.count).sum();
        prop_assert_eq!(total, countries.len());
    }

    #[test]
    fn grouped_population_parses_back(population in 0_i64..i64::MAX) {
        let grouped = format_int(population);
        let row: RawRow<'_> = [
            (Field::Name, "Somewhere"),
            (Field::Population, grouped.as_str()),
            (Field::Area, "1"),
            (Field::Continent, "Asia"),
        ]
        .into_iter()
        .collect();
        let first = parse_record(&row, &ParseOptions::default());
        let second = parse_record(&row, &ParseOptions::default());
        prop_assert_eq!(first.as_ref().map(Country::population), Ok(population));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sort_keeps_ties_in_source_order(countries in tied_rows(), descending in any::<bool>()) {
        for key in [SortKey::Population, SortKey::Area] {
            let sorted = query::sort(&countries, key, descending);
            prop_assert!(ties_keep_source_order(&countries, &sorted, key));
        }
    }

    #[test]
    fn ascending_then_descending_keeps_ties_in_source_order(countries in tied_rows()) {
        for key in [SortKey::Population, SortKey::Area] {
            let ascending = query::sort(&countries, key, false);
            let descending = query::sort(ascending, key, true);
            prop_assert!(ties_keep_source_order(&countries, &descending, key));
        }
    }
}

#[test]
fn descending_after_ascending_example() {
    let countries: Vec<Country> = [("A", 1), ("B", 2), ("C", 1), ("D", 2)]
        .into_iter()
        .filter_map(|(name, population)| Country::new(name, population, 1.0, "Asia").ok())
        .collect();
    let once = query::sort(&countries, SortKey::Population, false);
    let twice = query::sort(once, SortKey::Population, true);
    let names: Vec<&str> = twice.iter().map(|c| c.name()).collect();
    assert_eq!(names, ["B", "D", "A", "C"]);
}
