// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! codecbench CLI
//!
//! Discovers the compiled-in compression backends, runs the benchmark
//! sweep, and prints the fixed-width report to standard output. Exits
//! nonzero when no backends are available.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use codecbench_core::{
    discover_available, render, render_preamble, run_sweep, BenchConfig, BenchError, ConfigLoader,
    ContentKind,
};

/// Measured runs used by --quick.
const QUICK_RUNS: u32 = 4;

/// codecbench - compare compression backends across payload shapes
#[derive(Parser)]
#[command(name = "codecbench")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of warmup runs
    #[arg(long)]
    warmup: Option<u32>,

    /// Override the number of measured runs
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    runs: Option<u32>,

    /// Restrict the sweep to these content categories
    #[arg(long)]
    category: Option<Vec<String>>,

    /// Quick mode (fewer measured runs)
    #[arg(long)]
    quick: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => BenchConfig::default(),
    };

    if let Some(warmup) = args.warmup {
        config.warmup_runs = warmup;
    }
    if let Some(runs) = args.runs {
        config.measured_runs = runs;
    }
    if args.quick {
        config.measured_runs = config.measured_runs.min(QUICK_RUNS);
    }
    if let Some(names) = &args.category {
        config.categories = names
            .iter()
            .map(|name| ContentKind::from_str(name))
            .collect::<Result<_, _>>()?;
    }

    let candidates = discover_available();
    if candidates.is_empty() {
        return Err(BenchError::NoBackends.into());
    }

    print!("{}", render_preamble(&candidates));
    println!();

    info!(
        backends = candidates.len(),
        categories = config.categories.len(),
        sizes = config.sizes.len(),
        warmup_runs = config.warmup_runs,
        measured_runs = config.measured_runs,
        "starting sweep"
    );

    let records = run_sweep(&config, &candidates)?;
    print!("{}", render(&records));

    Ok(())
}
