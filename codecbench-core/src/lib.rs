// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! codecbench core library
//!
//! Measures and compares the throughput and compression ratio of
//! interchangeable compression backends across representative payload
//! shapes. Backends are compiled in via Cargo features and exposed through
//! a uniform two-operation capability contract.
//!
//! # Components
//!
//! - **codec**: the [`Codec`] trait, feature-gated backend adapters, and
//!   [`discover_available`]
//! - **dataset**: deterministic synthetic payload generation per category
//! - **harness**: the warmup + measured timing loop and the sweep driver
//! - **measure**: per-combination records with explicit failure outcomes
//! - **report**: fixed-width table rendering to a single text block
//! - **config**: validated run configuration (YAML file + defaults)
//!
//! The sweep is deliberately sequential - backends, categories, and sizes
//! are evaluated strictly one at a time so concurrent workloads cannot
//! pollute the timing measurements.

pub mod codec;
pub mod config;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod measure;
pub mod report;

// Re-export commonly used types
pub use codec::{discover_available, Codec};
pub use config::{BenchConfig, ConfigLoader};
pub use dataset::{generate, ContentKind};
pub use error::{BenchError, BenchResult, CodecError, ConfigError, DatasetError};
pub use harness::{run_sweep, TimingHarness};
pub use measure::{measure, MeasurementRecord, StepOutcome, TimingStats};
pub use report::{render, render_preamble};
