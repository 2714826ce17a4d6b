// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark run configuration with strict validation.
//!
//! Defaults reproduce the standard sweep (64K/1M/8M payloads, 2 warmup and
//! 32 measured runs, all categories). An optional YAML file overrides them;
//! any invalid field fails before measurement starts.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::dataset::ContentKind;
use crate::error::ConfigError;

/// Largest accepted payload size: 1 GiB.
const MAX_PAYLOAD_SIZE: usize = 1024 * 1024 * 1024;
/// Upper bound on measured runs, so a misconfigured run still terminates.
const MAX_MEASURED_RUNS: u32 = 100_000;

fn default_sizes() -> Vec<usize> {
    // bytes: 64KB, 1MB, 8MB
    vec![64 * 1024, 1024 * 1024, 8 * 1024 * 1024]
}

fn default_warmup_runs() -> u32 {
    2
}

fn default_measured_runs() -> u32 {
    32
}

fn default_categories() -> Vec<String> {
    ContentKind::ALL
        .iter()
        .map(|kind| kind.as_str().to_string())
        .collect()
}

/// Raw configuration as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
struct RawBenchConfig {
    #[serde(default = "default_sizes")]
    sizes: Vec<usize>,
    #[serde(default = "default_warmup_runs")]
    warmup_runs: u32,
    #[serde(default = "default_measured_runs")]
    measured_runs: u32,
    #[serde(default = "default_categories")]
    categories: Vec<String>,
}

/// Validated benchmark configuration, passed explicitly into the sweep
/// entry point.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Payload sizes in bytes, benchmarked in order
    pub sizes: Vec<usize>,
    /// Untimed runs before each measured pass
    pub warmup_runs: u32,
    /// Timed runs per measured pass
    pub measured_runs: u32,
    /// Content categories, benchmarked in order
    pub categories: Vec<ContentKind>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            warmup_runs: default_warmup_runs(),
            measured_runs: default_measured_runs(),
            categories: ContentKind::ALL.to_vec(),
        }
    }
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<BenchConfig, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> Result<BenchConfig, ConfigError> {
        let raw: RawBenchConfig =
            serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
                message: format!("YAML parse error: {}", e),
            })?;

        Self::validate(raw)
    }

    /// Validate raw configuration and convert to validated types.
    fn validate(raw: RawBenchConfig) -> Result<BenchConfig, ConfigError> {
        if raw.sizes.is_empty() {
            return Err(ConfigError::InvalidFieldValue {
                field: "sizes",
                value: "[]".to_string(),
                reason: "at least one payload size is required".to_string(),
            });
        }

        for &size in &raw.sizes {
            if size > MAX_PAYLOAD_SIZE {
                return Err(ConfigError::InvalidFieldValue {
                    field: "sizes",
                    value: size.to_string(),
                    reason: format!("payload size must not exceed {} bytes", MAX_PAYLOAD_SIZE),
                });
            }
        }

        if raw.measured_runs == 0 || raw.measured_runs > MAX_MEASURED_RUNS {
            return Err(ConfigError::InvalidFieldValue {
                field: "measured_runs",
                value: raw.measured_runs.to_string(),
                reason: format!("must be between 1 and {}", MAX_MEASURED_RUNS),
            });
        }

        if raw.categories.is_empty() {
            return Err(ConfigError::InvalidFieldValue {
                field: "categories",
                value: "[]".to_string(),
                reason: "at least one content category is required".to_string(),
            });
        }

        let mut categories = Vec::with_capacity(raw.categories.len());
        for name in &raw.categories {
            let kind =
                ContentKind::from_str(name).map_err(|e| ConfigError::InvalidFieldValue {
                    field: "categories",
                    value: name.clone(),
                    reason: e.to_string(),
                })?;
            categories.push(kind);
        }

        Ok(BenchConfig {
            sizes: raw.sizes,
            warmup_runs: raw.warmup_runs,
            measured_runs: raw.measured_runs,
            categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_CONFIG: &str = r#"
sizes: [4096, 65536]
warmup_runs: 1
measured_runs: 8
categories: [repetitive, textlike]
"#;

    #[test]
    fn test_valid_config() {
        let config = ConfigLoader::load_string(VALID_CONFIG).unwrap();
        assert_eq!(config.sizes, vec![4096, 65536]);
        assert_eq!(config.warmup_runs, 1);
        assert_eq!(config.measured_runs, 8);
        assert_eq!(
            config.categories,
            vec![ContentKind::Repetitive, ContentKind::Textlike]
        );
    }

    #[test]
    fn test_defaults_applied() {
        let config = ConfigLoader::load_string("{}").unwrap();
        assert_eq!(config.sizes, vec![64 * 1024, 1024 * 1024, 8 * 1024 * 1024]);
        assert_eq!(config.warmup_runs, 2);
        assert_eq!(config.measured_runs, 32);
        assert_eq!(config.categories, ContentKind::ALL.to_vec());
    }

    #[test]
    fn test_default_matches_loader_defaults() {
        let from_yaml = ConfigLoader::load_string("{}").unwrap();
        let from_default = BenchConfig::default();
        assert_eq!(from_yaml.sizes, from_default.sizes);
        assert_eq!(from_yaml.warmup_runs, from_default.warmup_runs);
        assert_eq!(from_yaml.measured_runs, from_default.measured_runs);
        assert_eq!(from_yaml.categories, from_default.categories);
    }

    #[test]
    fn test_empty_sizes_rejected() {
        let result = ConfigLoader::load_string("sizes: []");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_measured_runs_rejected() {
        let result = ConfigLoader::load_string("measured_runs: 0");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result = ConfigLoader::load_string("categories: [random, bogus]");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_empty_categories_rejected() {
        let result = ConfigLoader::load_string("categories: []");
        assert!(result.is_err());
    }

    #[test]
    fn test_oversized_payload_rejected() {
        let result = ConfigLoader::load_string("sizes: [2147483648]");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_byte_size_allowed() {
        let config = ConfigLoader::load_string("sizes: [0]").unwrap();
        assert_eq!(config.sizes, vec![0]);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codecbench.yaml");
        std::fs::write(&path, VALID_CONFIG).unwrap();

        let config = ConfigLoader::load_file(&path).unwrap();
        assert_eq!(config.measured_runs, 8);
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigLoader::load_file("/nonexistent/codecbench.yaml");
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }
}
