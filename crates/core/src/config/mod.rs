//! Engine configuration
//!
//! TOML-backed configuration with auto-discovery:
//! - `.musika.toml`, `musika.toml`, or `.config/musika.toml` in the
//!   working directory
//! - Built-in defaults when no file is present

mod loader;
mod schema;

pub use schema::{EngineConfig, HistoryConfig, MatcherConfig, ResultsConfig};
