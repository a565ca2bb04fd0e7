//! Configuration types for per-diem rate reference data.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the per-country YAML rate files.

use serde::Deserialize;
use std::collections::HashMap;

use crate::models::RateTable;

/// A city entry in a country's rate file.
#[derive(Debug, Clone, Deserialize)]
pub struct CityConfig {
    /// The city name. The entry named "All other cities" (any case) acts as
    /// the fallback for unmatched city names.
    pub name: String,
    /// The city's own rate table.
    #[serde(default)]
    pub rates: RateTable,
}

/// One country's rate configuration, loaded from a single YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryConfig {
    /// ISO-style country code (e.g., "DE").
    pub code: String,
    /// The human-readable country name.
    pub name: String,
    /// The country-level rate table.
    #[serde(default)]
    pub rates: RateTable,
    /// Cities with their own rate tables.
    #[serde(default)]
    pub cities: Vec<CityConfig>,
}

/// The complete rate reference data loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct RatesConfig {
    /// Countries indexed by upper-cased country code.
    countries: HashMap<String, CountryConfig>,
}

impl RatesConfig {
    /// Creates a RatesConfig from loaded country entries.
    pub fn new(entries: Vec<CountryConfig>) -> Self {
        let countries = entries
            .into_iter()
            .map(|c| (c.code.to_uppercase(), c))
            .collect();
        Self { countries }
    }

    /// Looks up a country by its code (case-insensitive).
    pub fn country(&self, code: &str) -> Option<&CountryConfig> {
        self.countries.get(&code.to_uppercase())
    }

    /// Returns all loaded countries.
    pub fn countries(&self) -> &HashMap<String, CountryConfig> {
        &self.countries
    }
}
