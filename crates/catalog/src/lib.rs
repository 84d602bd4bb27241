//! Asteroid catalog: observational records, identifier lookup, and feed import.
//!
//! The catalog is the data source consumed by the impact calculator. Records
//! are loaded once (from NeoWs feed files or the built-in sample) and are
//! read-only afterwards, so a [`Catalog`] can be shared freely across threads.

pub mod feed;
pub mod lookup;
pub mod nearest;
pub mod record;

mod builtin;

pub use feed::{CatalogError, load_feed, parse_feed};
pub use lookup::{AsteroidSource, Catalog, LookupError, normalize_identifier};
pub use nearest::NearestApproach;
pub use record::{AsteroidRecord, CloseApproach, FieldValue};
