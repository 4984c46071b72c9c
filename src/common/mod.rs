//! Common types and utilities shared across the crate.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration (node capacity)
//! - Error types

pub mod config;
pub mod error;

pub use config::{TreeConfig, DEFAULT_MAXIMUM};
pub use error::{Error, Result};
