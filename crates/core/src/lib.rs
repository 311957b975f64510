//! Core types for the Musika search tools
//!
//! This crate provides the shared building blocks the search engine is built
//! on:
//!
//! - **Listing model**: the read-only marketplace records the engine filters
//!   and ranks
//! - **Engine configuration**: TOML-backed tuning for matching, result
//!   shaping, and history retention
//! - **Error handling**: a typed error for the one fallible construction
//!   path (configuration loading)
//!
//! # Example
//!
//! ```rust
//! use musika_core::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert!((config.matcher.threshold - 0.4).abs() < f64::EPSILON);
//! assert_eq!(config.results.page_size, 12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod listing;

pub use error::{CoreError, Result};
pub use listing::{Listing, ListingStatus};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{EngineConfig, HistoryConfig, MatcherConfig, ResultsConfig};
    pub use crate::error::{CoreError, Result};
    pub use crate::listing::{Listing, ListingStatus};
}
