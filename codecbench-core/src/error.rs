//! Custom error types for codecbench.
//!
//! This module defines explicit enum error types as per coding guidelines.
//! No `Box<dyn Error>`, no `anyhow::Result` - all library errors are
//! strongly typed; `anyhow` is confined to the binary.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the benchmark harness.
/// All errors are explicit variants - no catch-all or generic handling.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("no compression backends compiled into this build")]
    NoBackends,

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

/// Configuration errors - fail fast before any measurement runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration parse error: {message}")]
    Parse { message: String },

    #[error("invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Payload generation errors.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("unknown content category: {name}")]
    InvalidCategory { name: String },

    #[error("OS entropy source failed: {reason}")]
    Entropy { reason: String },
}

/// Errors raised by a codec backend during compress or decompress.
///
/// The reason is the backend's own error rendered to a string; the harness
/// records it without further classification.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("{backend} compress failed: {reason}")]
    Compress {
        backend: &'static str,
        reason: String,
    },

    #[error("{backend} decompress failed: {reason}")]
    Decompress {
        backend: &'static str,
        reason: String,
    },
}

/// Result type alias using BenchError.
pub type BenchResult<T> = Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_value_display() {
        let err = ConfigError::InvalidFieldValue {
            field: "measured_runs",
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert!(err.to_string().contains("measured_runs"));
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_error_chain() {
        let dataset_err = DatasetError::InvalidCategory {
            name: "bogus".to_string(),
        };
        let bench_err: BenchError = dataset_err.into();
        assert!(matches!(bench_err, BenchError::Dataset(_)));
        assert!(bench_err.to_string().contains("bogus"));
    }

    #[test]
    fn test_codec_error_names_backend() {
        let err = CodecError::Decompress {
            backend: "snappy (snap)",
            reason: "corrupt input".to_string(),
        };
        assert!(err.to_string().contains("snappy"));
        assert!(err.to_string().contains("corrupt input"));
    }
}
