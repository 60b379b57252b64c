//! Chaining several query steps into one request.

use super::{RangeFilter, SortKey, filter_by_continent, filter_by_range, search, sort};
use crate::dataset::Country;
use serde::{Deserialize, Serialize};

/// Query builder over country records.
///
/// Steps run in a fixed order: name search, continent filter, range filters,
/// sort, limit. Unset steps are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub term: Option<String>,
    pub continent: Option<String>,
    pub ranges: Vec<RangeFilter>,
    pub order: Option<(SortKey, bool)>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn continent(mut self, continent: impl Into<String>) -> Self {
        self.continent = Some(continent.into());
        self
    }

    pub fn range(mut self, range: RangeFilter) -> Self {
        self.ranges.push(range);
        self
    }

    pub fn sort(mut self, key: SortKey, descending: bool) -> Self {
        self.order = Some((key, descending));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Runs the query.
    pub fn execute<'a, I>(&self, records: I) -> Vec<&'a Country>
    where
        I: IntoIterator<Item = &'a Country>,
    {
        let mut result: Vec<&Country> = records.into_iter().collect();

        if let Some(term) = &self.term {
            result = search(result, term);
        }
        if let Some(continent) = &self.continent {
            result = filter_by_continent(result, continent);
        }
        for range in &self.ranges {
            result = filter_by_range(result, *range);
        }
        if let Some((key, descending)) = self.order {
            result = sort(result, key, descending);
        }
        if let Some(limit) = self.limit {
            result.truncate(limit);
        }

        tracing::debug!(matched = result.len(), "Query executed");
        result
    }
}
