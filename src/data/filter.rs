use std::collections::BTreeSet;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Country list and per-country selection
// ---------------------------------------------------------------------------

/// Sorted list of distinct `location` values, no duplicates.
pub fn unique_countries(dataset: &Dataset) -> Vec<String> {
    dataset
        .records
        .iter()
        .map(|r| r.location.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// All records for `country` in file order. Unknown countries give an empty list.
pub fn filter_by_country<'a>(dataset: &'a Dataset, country: &str) -> Vec<&'a Record> {
    dataset
        .records
        .iter()
        .filter(|r| r.location == country)
        .collect()
}
