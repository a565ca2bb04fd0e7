//! Per-diem meal allowance engine ("Verpflegungsmehraufwand").
//!
//! This crate computes statutory flat-rate meal/travel allowances for
//! business trips: it expands a trip into calendar days, classifies each day
//! (arrival, departure, full day, short or long single-day trip), looks up
//! jurisdiction-specific daily rates, deducts included meals, and aggregates
//! the per-day amounts into the trip total.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
