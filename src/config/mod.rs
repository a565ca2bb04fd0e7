//! Rate reference data configuration for the per-diem allowance engine.
//!
//! This module provides loading of per-country daily rates and meal
//! percentages from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use perdiem_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/verpflegung").unwrap();
//! let germany = loader.country("DE").unwrap();
//! println!("24h rate: {}", germany.rates.daily_rate_24h);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CityConfig, CountryConfig, RatesConfig};
