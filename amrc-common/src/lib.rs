//! # AMRC Common Library
//!
//! Shared code for the aircraft maintenance report classification crates:
//! - Error type and result alias
//! - TOML configuration loading and path resolution
//! - Logging configuration

pub mod config;
pub mod error;

pub use error::{Error, Result};
