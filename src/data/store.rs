use std::path::Path;

use super::filter::{filter_by_country, unique_countries};
use super::loader::load_file;
use super::model::{Dataset, Record};
use crate::error::DataLoadError;

// ---------------------------------------------------------------------------
// DataStore – the dataset and its country list, read-only after load
// ---------------------------------------------------------------------------

/// Owns the loaded dataset for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct DataStore {
    dataset: Dataset,
    countries: Vec<String>,
}

impl DataStore {
    /// Load the dataset from disk and derive the country list.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        Ok(Self::from_dataset(load_file(path)?))
    }

    /// Wrap an already-parsed dataset.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let countries = unique_countries(&dataset);
        Self { dataset, countries }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Every record, unfiltered, in file order.
    pub fn records(&self) -> &[Record] {
        &self.dataset.records
    }

    /// Sorted, de-duplicated country identifiers.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn contains_country(&self, country: &str) -> bool {
        self.countries
            .binary_search_by(|c| c.as_str().cmp(country))
            .is_ok()
    }

    pub fn filter_by_country(&self, country: &str) -> Vec<&Record> {
        filter_by_country(&self.dataset, country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    #[test]
    fn country_list_is_derived_once_from_the_dataset() {
        let store = DataStore::from_dataset(Dataset::from_records(vec![
            record("B", 2000.0, 5.0),
            record("A", 2000.0, 10.0),
            record("A", 2001.0, 12.0),
        ]));

        assert_eq!(store.countries(), ["A", "B"]);
        assert!(store.contains_country("B"));
        assert!(!store.contains_country("C"));
        assert_eq!(store.records().len(), 3);
        assert_eq!(store.filter_by_country("A").len(), 2);
    }
}
