// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Measurement records and the per-combination timing protocol.
//!
//! One record is produced for every (backend, category, size) combination.
//! Backend failures degrade the affected step to an explicit failed outcome
//! carrying the reason - the sweep itself never aborts on them.

use std::time::Duration;

use tracing::warn;

use crate::codec::Codec;
use crate::dataset::ContentKind;
use crate::harness::TimingHarness;

const BYTES_PER_MIB: f64 = (1024 * 1024) as f64;

/// Aggregate wall-clock statistics over the measured runs, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingStats {
    /// Arithmetic mean duration
    pub avg_s: f64,
    /// Minimum observed duration
    pub min_s: f64,
    /// Maximum observed duration
    pub max_s: f64,
}

impl TimingStats {
    /// Calculate statistics from raw duration samples.
    pub fn from_samples(samples: &[Duration]) -> Self {
        if samples.is_empty() {
            return Self {
                avg_s: 0.0,
                min_s: 0.0,
                max_s: 0.0,
            };
        }

        let mut sum = 0.0f64;
        let mut min = f64::INFINITY;
        let mut max = 0.0f64;
        for sample in samples {
            let secs = sample.as_secs_f64();
            sum += secs;
            min = min.min(secs);
            max = max.max(secs);
        }

        Self {
            avg_s: sum / samples.len() as f64,
            min_s: min,
            max_s: max,
        }
    }
}

/// Outcome of one timed step (compress or decompress).
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// The step completed every warmup and measured run.
    Measured(TimingStats),
    /// The backend errored during warmup, measurement, or the untimed call.
    Failed { reason: String },
    /// Decompress only: compress produced no output, so the step never ran.
    Skipped,
}

impl StepOutcome {
    /// Timing statistics, if the step was measured.
    pub fn stats(&self) -> Option<&TimingStats> {
        match self {
            StepOutcome::Measured(stats) => Some(stats),
            _ => None,
        }
    }
}

/// One result row: a single backend against a single (category, size)
/// payload. Immutable once constructed; appended in sweep iteration order.
#[derive(Debug, Clone)]
pub struct MeasurementRecord {
    /// Backend display name
    pub backend: &'static str,
    /// Content category of the payload
    pub kind: ContentKind,
    /// Original payload size in bytes
    pub size_bytes: usize,
    /// Compressed output length; absent when compress failed
    pub comp_bytes: Option<usize>,
    /// Compress timing outcome
    pub compress: StepOutcome,
    /// Decompress timing outcome; skipped whenever compress produced no
    /// output
    pub decompress: StepOutcome,
}

impl MeasurementRecord {
    /// Original payload size in MiB.
    pub fn orig_mib(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MIB
    }

    /// Compression ratio (compressed / original); absent when the
    /// compressed length is absent or the payload is empty.
    pub fn comp_ratio(&self) -> Option<f64> {
        match self.comp_bytes {
            Some(comp) if self.size_bytes > 0 => Some(comp as f64 / self.size_bytes as f64),
            _ => None,
        }
    }
}

/// Execute the timing protocol for one backend and payload.
///
/// Compress is timed first on the original payload. One additional untimed
/// compress call produces the blob used both for the compression ratio and
/// as the decompress input; a failure there counts as a compress failure.
/// Decompress is never attempted when compress produced no output.
pub fn measure(
    codec: &dyn Codec,
    kind: ContentKind,
    payload: &[u8],
    warmup_runs: u32,
    measured_runs: u32,
) -> MeasurementRecord {
    let harness = TimingHarness::new().warmup(warmup_runs).runs(measured_runs);

    let timed = harness.run(|| codec.compress(payload)).and_then(|samples| {
        let compressed = codec.compress(payload)?;
        Ok((TimingStats::from_samples(&samples), compressed))
    });

    match timed {
        Ok((stats, compressed)) => {
            let decompress = match harness.run(|| codec.decompress(&compressed)) {
                Ok(samples) => StepOutcome::Measured(TimingStats::from_samples(&samples)),
                Err(err) => {
                    warn!(
                        backend = codec.name(),
                        kind = %kind,
                        size = payload.len(),
                        %err,
                        "decompress failed"
                    );
                    StepOutcome::Failed {
                        reason: err.to_string(),
                    }
                }
            };

            MeasurementRecord {
                backend: codec.name(),
                kind,
                size_bytes: payload.len(),
                comp_bytes: Some(compressed.len()),
                compress: StepOutcome::Measured(stats),
                decompress,
            }
        }
        Err(err) => {
            warn!(
                backend = codec.name(),
                kind = %kind,
                size = payload.len(),
                %err,
                "compress failed"
            );
            MeasurementRecord {
                backend: codec.name(),
                kind,
                size_bytes: payload.len(),
                comp_bytes: None,
                compress: StepOutcome::Failed {
                    reason: err.to_string(),
                },
                decompress: StepOutcome::Skipped,
            }
        }
    }
}
