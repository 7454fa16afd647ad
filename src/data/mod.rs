/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   dataEveryYear.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset (+ per-cell issues)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  store    │  Dataset + sorted country list, read-only
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  unique countries, records for one country
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod store;

pub use model::{Field, Record};
pub use store::DataStore;
