//! Identifier normalization and record lookup.

use std::sync::OnceLock;

use thiserror::Error;
use tracing::debug;

use crate::builtin;
use crate::nearest::{self, NearestApproach};
use crate::record::AsteroidRecord;

/// Errors surfaced when resolving an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("asteroid '{identifier}' not found")]
    NotFound { identifier: String },
}

/// Anything that can resolve a user-supplied identifier to a record.
pub trait AsteroidSource {
    fn lookup(&self, identifier: &str) -> Result<AsteroidRecord, LookupError>;
}

/// Canonical comparison key for an identifier.
///
/// Upper-cases, drops parentheses, turns hyphens into spaces, and trims the
/// result, so `"(99942 Apophis)"` and `" 99942 APOPHIS "` share a key.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim()
        .to_uppercase()
        .replace(['(', ')'], "")
        .replace('-', " ")
        .trim()
        .to_string()
}

/// Immutable, in-memory set of asteroid records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<AsteroidRecord>,
}

impl Catalog {
    pub fn new(records: Vec<AsteroidRecord>) -> Self {
        Self { records }
    }

    /// Sample catalog bundled with the crate, built on first use.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Catalog::new(builtin::records()))
    }

    pub fn records(&self) -> &[AsteroidRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose normalized name, or verbatim catalog id, equals the normalized identifier.
    pub fn find(&self, identifier: &str) -> Option<&AsteroidRecord> {
        let key = normalize_identifier(identifier);
        self.records
            .iter()
            .find(|record| normalize_identifier(&record.name) == key || record.catalog_id == key)
    }

    /// Records whose normalized name contains the normalized fragment.
    pub fn search(&self, fragment: &str) -> Vec<&AsteroidRecord> {
        let key = normalize_identifier(fragment);
        if key.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|record| normalize_identifier(&record.name).contains(&key))
            .collect()
    }

    /// The `count` objects with the smallest recorded miss distance.
    pub fn nearest_approaches(&self, count: usize) -> Vec<NearestApproach> {
        nearest::rank(&self.records, count)
    }
}

impl AsteroidSource for Catalog {
    fn lookup(&self, identifier: &str) -> Result<AsteroidRecord, LookupError> {
        match self.find(identifier) {
            Some(record) => Ok(record.clone()),
            None => {
                debug!(identifier, "no catalog record matched");
                Err(LookupError::NotFound {
                    identifier: identifier.to_string(),
                })
            }
        }
    }
}

impl<S: AsteroidSource + ?Sized> AsteroidSource for &S {
    fn lookup(&self, identifier: &str) -> Result<AsteroidRecord, LookupError> {
        (**self).lookup(identifier)
    }
}
