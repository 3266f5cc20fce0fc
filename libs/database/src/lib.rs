//! Database connectivity helpers.
//!
//! Connectors are feature-gated so consumers only pull in the drivers they
//! actually use:
//! - `mongodb` (default): MongoDB client setup, retry, health checks
//! - `config`: load connector configuration from environment variables

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;
