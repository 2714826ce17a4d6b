// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Timing harness and sweep driver.
//!
//! Measures steady-state operation latency: a warmup phase absorbs one-time
//! costs (allocation, lazy initialization, cache warming), then a measured
//! phase records wall-clock durations over a monotonic clock.
//!
//! The sweep is strictly sequential - backends, categories, and sizes one at
//! a time - so concurrent workloads cannot pollute the measurements.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::codec::Codec;
use crate::config::BenchConfig;
use crate::dataset;
use crate::error::{BenchResult, CodecError};
use crate::measure::{measure, MeasurementRecord};

/// Warmup + measured timing loop for a single fallible operation.
pub struct TimingHarness {
    /// Untimed runs executed before measurement begins
    warmup_runs: u32,
    /// Timed runs contributing to the statistics
    measured_runs: u32,
}

impl TimingHarness {
    /// Create a harness with the standard run counts.
    pub fn new() -> Self {
        Self {
            warmup_runs: 2,
            measured_runs: 32,
        }
    }

    /// Set the number of warmup runs.
    pub fn warmup(mut self, runs: u32) -> Self {
        self.warmup_runs = runs;
        self
    }

    /// Set the number of measured runs.
    pub fn runs(mut self, runs: u32) -> Self {
        self.measured_runs = runs;
        self
    }

    /// Time `operation`, discarding warmup results and timings.
    ///
    /// Returns one wall-clock sample per measured run, or the first backend
    /// error encountered in either phase.
    pub fn run<T, F>(&self, mut operation: F) -> Result<Vec<Duration>, CodecError>
    where
        F: FnMut() -> Result<T, CodecError>,
    {
        for _ in 0..self.warmup_runs {
            operation()?;
        }

        let mut samples = Vec::with_capacity(self.measured_runs as usize);
        for _ in 0..self.measured_runs {
            let start = Instant::now();
            operation()?;
            samples.push(start.elapsed());
        }
        Ok(samples)
    }
}

impl Default for TimingHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the full sweep: candidates × categories × sizes, in that nesting
/// order, accumulating one record per combination.
///
/// Backend failures never abort the sweep; they are contained inside each
/// record. Payload generation failure means the OS entropy source is broken
/// for every candidate alike, so it propagates instead of silently dropping
/// rows.
pub fn run_sweep(
    config: &BenchConfig,
    candidates: &[Box<dyn Codec>],
) -> BenchResult<Vec<MeasurementRecord>> {
    let mut records =
        Vec::with_capacity(candidates.len() * config.categories.len() * config.sizes.len());

    for codec in candidates {
        debug!(backend = codec.name(), "benchmarking backend");
        for &kind in &config.categories {
            for &size in &config.sizes {
                let payload = dataset::generate(kind, size)?;
                records.push(measure(
                    codec.as_ref(),
                    kind,
                    &payload,
                    config.warmup_runs,
                    config.measured_runs,
                ));
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_sample_count() {
        let harness = TimingHarness::new().warmup(3).runs(20);
        let samples = harness.run(|| Ok::<_, CodecError>(())).unwrap();
        assert_eq!(samples.len(), 20);
    }

    #[test]
    fn test_warmup_runs_before_measurement() {
        let calls = Cell::new(0u32);
        let harness = TimingHarness::new().warmup(3).runs(5);
        let samples = harness
            .run(|| {
                calls.set(calls.get() + 1);
                Ok::<_, CodecError>(())
            })
            .unwrap();
        assert_eq!(samples.len(), 5);
        assert_eq!(calls.get(), 8);
    }

    #[test]
    fn test_error_stops_the_loop() {
        let calls = Cell::new(0u32);
        let harness = TimingHarness::new().warmup(1).runs(10);
        let result = harness.run(|| -> Result<(), CodecError> {
            calls.set(calls.get() + 1);
            if calls.get() == 3 {
                return Err(CodecError::Compress {
                    backend: "test",
                    reason: "boom".to_string(),
                });
            }
            Ok(())
        });
        assert!(result.is_err());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_samples_measure_elapsed_time() {
        let harness = TimingHarness::new().warmup(0).runs(3);
        let samples = harness
            .run(|| {
                std::thread::sleep(Duration::from_millis(2));
                Ok::<_, CodecError>(())
            })
            .unwrap();
        for sample in &samples {
            assert!(*sample >= Duration::from_millis(2));
        }
    }
}
