//! Configuration module for ynab-pivot
//!
//! This module provides configuration management including:
//! - Resolved report settings with defaults
//! - Validation of the required budget ID and access token
//! - Redacted handling of the access token

pub mod secret;
pub mod settings;

pub use secret::AccessToken;
pub use settings::{default_year, ReportSettings, DEFAULT_API_URL};
