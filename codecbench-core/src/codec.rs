// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Compression backend registry.
//!
//! Each backend is a thin adapter over an ecosystem codec crate, compiled in
//! via a Cargo feature and exposed through the [`Codec`] trait. Discovery
//! returns the compiled-in subset in a fixed priority order; a backend whose
//! feature is disabled simply contributes no candidate.

use tracing::debug;

use crate::error::CodecError;

/// Capability contract every backend satisfies.
///
/// Both operations take a full in-memory buffer and return a fresh one.
/// Either may fail; failures are contained at the measurement boundary, so
/// implementations never need to guard against aborting a run.
pub trait Codec {
    /// Stable display name for report rows.
    fn name(&self) -> &'static str;

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;
}

/// Snappy raw block format via the `snap` crate.
#[cfg(feature = "snappy")]
pub struct Snappy;

#[cfg(feature = "snappy")]
impl Codec for Snappy {
    fn name(&self) -> &'static str {
        "snappy (snap)"
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        snap::raw::Encoder::new()
            .compress_vec(data)
            .map_err(|e| CodecError::Compress {
                backend: self.name(),
                reason: e.to_string(),
            })
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        snap::raw::Decoder::new()
            .decompress_vec(data)
            .map_err(|e| CodecError::Decompress {
                backend: self.name(),
                reason: e.to_string(),
            })
    }
}

/// LZ4 block format with a length prefix via `lz4_flex`.
#[cfg(feature = "lz4")]
pub struct Lz4;

#[cfg(feature = "lz4")]
impl Codec for Lz4 {
    fn name(&self) -> &'static str {
        "lz4 (lz4_flex)"
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(lz4_flex::compress_prepend_size(data))
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        lz4_flex::decompress_size_prepended(data).map_err(|e| CodecError::Decompress {
            backend: self.name(),
            reason: e.to_string(),
        })
    }
}

/// Zstandard at the crate's default level via the `zstd` crate.
#[cfg(feature = "zstd")]
pub struct Zstd;

#[cfg(feature = "zstd")]
impl Codec for Zstd {
    fn name(&self) -> &'static str {
        "zstd (zstd)"
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        zstd::encode_all(data, 0).map_err(|e| CodecError::Compress {
            backend: self.name(),
            reason: e.to_string(),
        })
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        zstd::decode_all(data).map_err(|e| CodecError::Decompress {
            backend: self.name(),
            reason: e.to_string(),
        })
    }
}

/// Zlib-framed DEFLATE at the default level via `flate2`.
#[cfg(feature = "deflate")]
pub struct Deflate;

#[cfg(feature = "deflate")]
impl Codec for Deflate {
    fn name(&self) -> &'static str {
        "deflate (flate2)"
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        use std::io::Read;

        let mut encoder = flate2::read::ZlibEncoder::new(data, flate2::Compression::default());
        let mut out = Vec::new();
        encoder
            .read_to_end(&mut out)
            .map_err(|e| CodecError::Compress {
                backend: self.name(),
                reason: e.to_string(),
            })?;
        Ok(out)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        use std::io::Read;

        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut out = Vec::new();
        decoder
            .read_to_end(&mut out)
            .map_err(|e| CodecError::Decompress {
                backend: self.name(),
                reason: e.to_string(),
            })?;
        Ok(out)
    }
}

/// Return every backend compiled into this build, in priority order.
///
/// Order equals the static declaration order below (snappy first), never a
/// runtime property. An empty result is fatal for the overall run and is
/// handled by the caller.
pub fn discover_available() -> Vec<Box<dyn Codec>> {
    #[allow(unused_mut)]
    let mut candidates: Vec<Box<dyn Codec>> = Vec::new();

    #[cfg(feature = "snappy")]
    candidates.push(Box::new(Snappy));

    #[cfg(feature = "lz4")]
    candidates.push(Box::new(Lz4));

    #[cfg(feature = "zstd")]
    candidates.push(Box::new(Zstd));

    #[cfg(feature = "deflate")]
    candidates.push(Box::new(Deflate));

    debug!(count = candidates.len(), "discovered compression backends");
    candidates
}
