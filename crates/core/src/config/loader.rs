//! Configuration file discovery and loading

use std::path::Path;

use crate::config::schema::EngineConfig;
use crate::error::{CoreError, Result};

/// Candidate config file locations relative to the working directory,
/// checked in order
const CONFIG_CANDIDATES: &[&str] = &[".musika.toml", "musika.toml", ".config/musika.toml"];

impl EngineConfig {
    /// Load engine configuration.
    ///
    /// When `path` is given, that file must exist and parse. Otherwise the
    /// candidate locations are probed in order and the built-in defaults are
    /// used when none exists.
    ///
    /// # Arguments
    ///
    /// * `path` - Explicit config file path, or `None` to auto-discover
    ///
    /// # Returns
    ///
    /// The parsed configuration, or defaults when no file was found.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Config` when a file exists but cannot be read
    /// or parsed.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => load_config_file(Path::new(p)),
            None => match find_config_file() {
                Some(p) => load_config_file(&p),
                None => Ok(Self::default()),
            },
        }
    }
}

fn find_config_file() -> Option<std::path::PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(std::path::PathBuf::from)
        .find(|p| p.is_file())
}

fn load_config_file(path: &Path) -> Result<EngineConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        CoreError::config(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;

    toml::from_str(&contents).map_err(|e| {
        CoreError::config(format!(
            "Failed to parse config file {}: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults_when_no_file() {
        let config = EngineConfig::load(None).unwrap();
        assert!((config.matcher.threshold - 0.4).abs() < f64::EPSILON);
        assert!(config.matcher.ignore_case);
        assert!(config.matcher.ignore_accents);
        assert_eq!(config.matcher.max_distance, 100);
        assert_eq!(config.results.page_size, 12);
        assert_eq!(config.results.max_suggestions, 8);
        assert_eq!(config.history.capacity, 50);
        assert_eq!(config.history.recent_in_suggestions, 3);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[matcher]
threshold = 0.5
ignore_case = false

[results]
page_size = 24
"#
        )
        .unwrap();

        let config = EngineConfig::load(Some(file.path().to_str().unwrap())).unwrap();
        assert!((config.matcher.threshold - 0.5).abs() < f64::EPSILON);
        assert!(!config.matcher.ignore_case);
        // Unset keys fall back to schema defaults
        assert!(config.matcher.ignore_accents);
        assert_eq!(config.results.page_size, 24);
        assert_eq!(config.results.max_suggestions, 8);
        assert_eq!(config.history.capacity, 50);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = EngineConfig::load(Some("/nonexistent/musika.toml"));
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[matcher\nthreshold = ").unwrap();

        let result = EngineConfig::load(Some(file.path().to_str().unwrap()));
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("Failed to parse config file"));
    }
}
