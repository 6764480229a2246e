//! # whatif CLI library
//!
//! Configuration, error handling and command implementations behind the
//! `whatif` binary.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the CSV adapter, the
//! baseline forecaster and the scenario engine into command-line workflows.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use config::{build_config, CliOverrides, ConfigError, WhatIfConfig};
pub use error::{CliError, Result};
