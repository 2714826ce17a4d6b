// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Synthetic payload generation.
//!
//! Produces a byte sequence of an exact requested length for each content
//! category. `repetitive` and `textlike` are both tiling schemes but differ
//! in entropy structure; `random` draws from the OS entropy source and is
//! deliberately not reproducible between invocations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// Fixed 4-byte pattern modelling highly redundant content.
const REPEAT_CHUNK: &[u8] = b"ABCD";

/// Fixed ASCII passage modelling natural-language-like redundancy.
const LOREM: &[u8] = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. ";

/// Content categories for generated payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// OS entropy - realistic incompressible content.
    Random,
    /// 4-byte pattern tiled end-to-end.
    Repetitive,
    /// ASCII passage tiled end-to-end.
    Textlike,
}

impl ContentKind {
    /// All categories, in the order they are benchmarked.
    pub const ALL: [ContentKind; 3] = [
        ContentKind::Random,
        ContentKind::Repetitive,
        ContentKind::Textlike,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Random => "random",
            ContentKind::Repetitive => "repetitive",
            ContentKind::Textlike => "textlike",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(ContentKind::Random),
            "repetitive" => Ok(ContentKind::Repetitive),
            "textlike" => Ok(ContentKind::Textlike),
            other => Err(DatasetError::InvalidCategory {
                name: other.to_string(),
            }),
        }
    }
}

/// Generate a payload of exactly `size` bytes for the given category.
///
/// Only the `Random` category can fail, and only when the OS entropy
/// source itself is broken.
pub fn generate(kind: ContentKind, size: usize) -> Result<Vec<u8>, DatasetError> {
    match kind {
        ContentKind::Random => {
            let mut buf = vec![0u8; size];
            getrandom::getrandom(&mut buf).map_err(|e| DatasetError::Entropy {
                reason: e.to_string(),
            })?;
            Ok(buf)
        }
        ContentKind::Repetitive => Ok(tile(REPEAT_CHUNK, size)),
        ContentKind::Textlike => Ok(tile(LOREM, size)),
    }
}

/// Tile `pattern` end-to-end and truncate to exactly `size` bytes.
fn tile(pattern: &[u8], size: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(size + pattern.len());
    while buf.len() < size {
        buf.extend_from_slice(pattern);
    }
    buf.truncate(size);
    buf
}
