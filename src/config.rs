use crate::error::{NounListError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Marker substring that tags a noun entry in the source dictionary.
pub const DEFAULT_MARKER: &str = "/N";

/// Character length an accepted noun must have after uppercasing.
pub const DEFAULT_NOUN_LENGTH: usize = 5;

pub const DEFAULT_SOURCE: &str = "german.dic";
pub const DEFAULT_DESTINATION: &str = "nouns.dic";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    pub marker: String,
    pub noun_length: usize,
    pub exclude_patterns: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub destination: PathBuf,
    pub generate_report: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            noun_length: DEFAULT_NOUN_LENGTH,
            exclude_patterns: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            destination: PathBuf::from(DEFAULT_DESTINATION),
            generate_report: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(NounListError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| NounListError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| NounListError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                // Try to load from default locations
                let default_paths = ["nounlist.toml", "nounlist.config.toml", ".nounlist.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                // If no config file found, use defaults
                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref marker) = cli_args.marker {
            self.filter.marker = marker.clone();
        }

        if let Some(noun_length) = cli_args.noun_length {
            self.filter.noun_length = noun_length;
        }

        if let Some(ref exclude) = cli_args.exclude_patterns {
            self.filter.exclude_patterns.extend(exclude.clone());
        }

        if let Some(ref destination) = cli_args.destination {
            self.output.destination = destination.clone();
        }

        if let Some(generate_report) = cli_args.generate_report {
            self.output.generate_report = generate_report;
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| NounListError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| NounListError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.filter.marker.is_empty() {
            return Err(NounListError::Config {
                message: "Noun marker must not be empty".to_string(),
            });
        }

        if self.filter.noun_length == 0 {
            return Err(NounListError::Config {
                message: "Noun length must be greater than 0".to_string(),
            });
        }

        // Exclude patterns must compile before the scan phase starts
        for pattern in &self.filter.exclude_patterns {
            if Regex::new(pattern).is_err() {
                return Err(NounListError::InvalidPattern {
                    pattern: pattern.clone(),
                });
            }
        }

        if self.output.destination.as_os_str().is_empty() {
            return Err(NounListError::Config {
                message: "Destination path must not be empty".to_string(),
            });
        }

        if let Some(parent) = self.output.destination.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(NounListError::Config {
                    message: format!("Parent directory does not exist: {}", parent.display()),
                });
            }
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub marker: Option<String>,
    pub noun_length: Option<usize>,
    pub exclude_patterns: Option<Vec<String>>,
    pub destination: Option<PathBuf>,
    pub generate_report: Option<bool>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker(mut self, marker: Option<String>) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_noun_length(mut self, noun_length: Option<usize>) -> Self {
        self.noun_length = noun_length;
        self
    }

    pub fn with_exclude_patterns(mut self, exclude: Option<Vec<String>>) -> Self {
        self.exclude_patterns = exclude;
        self
    }

    pub fn with_destination(mut self, destination: Option<PathBuf>) -> Self {
        self.destination = destination;
        self
    }

    pub fn with_generate_report(mut self, generate_report: Option<bool>) -> Self {
        self.generate_report = generate_report;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.filter.marker, "/N");
        assert_eq!(config.filter.noun_length, 5);
        assert!(config.filter.exclude_patterns.is_empty());
        assert_eq!(config.output.destination, PathBuf::from("nouns.dic"));
        assert!(!config.output.generate_report);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.filter.marker.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_length_rejected() {
        let mut config = Config::default();
        config.filter.noun_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_exclude_pattern_rejected() {
        let mut config = Config::default();
        config.filter.exclude_patterns.push("[unclosed".to_string());
        assert!(matches!(
            config.validate(),
            Err(NounListError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_config_file_operations() {
        let config = Config::default();
        let temp_file = NamedTempFile::new().unwrap();

        // Test saving
        config.save_to_file(temp_file.path()).unwrap();

        // Test loading
        let loaded_config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.filter.marker, loaded_config.filter.marker);
        assert_eq!(config.filter.noun_length, loaded_config.filter.noun_length);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();

        let overrides = CliOverrides::new()
            .with_marker(Some("/V".to_string()))
            .with_noun_length(Some(6))
            .with_destination(Some(PathBuf::from("verbs.dic")));

        config.merge_with_cli_args(&overrides);

        assert_eq!(config.filter.marker, "/V");
        assert_eq!(config.filter.noun_length, 6);
        assert_eq!(config.output.destination, PathBuf::from("verbs.dic"));
    }

    #[test]
    fn test_sample_config_generation() {
        let sample = Config::create_sample_config();
        assert!(!sample.is_empty());
        assert!(sample.contains("[filter]"));
        assert!(sample.contains("[output]"));
    }
}
