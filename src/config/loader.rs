//! Rate reference data loading.
//!
//! This module provides the [`ConfigLoader`] type for loading per-country
//! rate tables from YAML files and resolving trip destinations against them.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{City, Country, Destination};

use super::types::{CountryConfig, RatesConfig};

/// The city entry name that catches destinations without their own rates.
const CITY_FALLBACK_NAME: &str = "all other cities";

/// Loads and provides access to the per-diem rate reference data.
///
/// The `ConfigLoader` reads one YAML file per country from a directory and
/// provides destination lookup with the city-over-country precedence used
/// by the calculation core.
///
/// # Directory Structure
///
/// ```text
/// config/verpflegung/
/// ├── de.yaml   # Germany: country rates, no city overrides
/// └── fr.yaml   # France: country rates plus city entries
/// ```
///
/// # Example
///
/// ```no_run
/// use perdiem_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/verpflegung").unwrap();
/// let destination = loader.destination("FR", Some("Paris")).unwrap();
/// assert_eq!(destination.city.unwrap().name, "Paris");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RatesConfig,
}

impl ConfigLoader {
    /// Loads rate configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if the directory is
    /// missing, contains no YAML files, or any file fails to parse.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        if !path.exists() {
            return Err(EngineError::ConfigNotFound { path: path_str });
        }

        let entries = fs::read_dir(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut countries = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: path_str.clone(),
            })?;

            let file_path = entry.path();
            if file_path.extension().is_some_and(|ext| ext == "yaml") {
                countries.push(Self::load_yaml::<CountryConfig>(&file_path)?);
            }
        }

        if countries.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", path_str),
            });
        }

        Ok(Self {
            config: RatesConfig::new(countries),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying rates configuration.
    pub fn config(&self) -> &RatesConfig {
        &self.config
    }

    /// Gets a country configuration by its code.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CountryNotFound`] for unknown codes.
    pub fn country(&self, code: &str) -> EngineResult<&CountryConfig> {
        self.config
            .country(code)
            .ok_or_else(|| EngineError::CountryNotFound {
                code: code.to_string(),
            })
    }

    /// Resolves a destination from a country code and an optional city name.
    ///
    /// City matching is case-insensitive on the exact name. An unmatched
    /// city name falls back to the country's "All other cities" entry when
    /// one exists, otherwise the destination is country-only.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CountryNotFound`] for unknown country codes.
    pub fn destination(&self, code: &str, city_name: Option<&str>) -> EngineResult<Destination> {
        let country_config = self.country(code)?;

        let city = city_name.and_then(|name| {
            let exact = country_config
                .cities
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(name));
            let matched = exact.or_else(|| {
                country_config
                    .cities
                    .iter()
                    .find(|c| c.name.eq_ignore_ascii_case(CITY_FALLBACK_NAME))
            });
            matched.map(|c| City {
                name: c.name.clone(),
                rates: c.rates.clone(),
            })
        });

        Ok(Destination {
            country: Country {
                code: country_config.code.clone(),
                name: country_config.name.clone(),
                rates: country_config.rates.clone(),
            },
            city,
        })
    }
}
