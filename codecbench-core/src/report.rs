// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Fixed-width report rendering.
//!
//! Throughput is a derived view (original MiB / mean seconds) computed here
//! at render time, never stored in the record; any undefined value renders
//! as the `err` token instead of infinity.

use std::fmt::Write as _;

use chrono::Utc;
use sysinfo::System;

use crate::codec::Codec;
use crate::measure::{MeasurementRecord, StepOutcome};

const ERR_TOKEN: &str = "err";
const KIB: usize = 1024;
const MIB: usize = 1024 * 1024;

/// Human-readable size label: kilobytes with a `K` suffix below one MiB,
/// mebibytes with an `M` suffix from there up.
pub fn size_label(bytes: usize) -> String {
    if bytes < MIB {
        format!("{}K", bytes / KIB)
    } else {
        format!("{}M", bytes / MIB)
    }
}

fn throughput_cell(orig_mib: f64, outcome: &StepOutcome) -> String {
    match outcome.stats() {
        Some(stats) if stats.avg_s > 0.0 && stats.avg_s.is_finite() => {
            format!("{:.2}", orig_mib / stats.avg_s)
        }
        _ => ERR_TOKEN.to_string(),
    }
}

/// Render the run-environment preamble: harness version, timestamp, host
/// information, and the discovered candidate list.
pub fn render_preamble(candidates: &[Box<dyn Codec>]) -> String {
    let mut sys = System::new_all();
    sys.refresh_all();

    let cpu_model = sys
        .cpus()
        .first()
        .map(|cpu| cpu.brand().to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "codecbench {} - {}",
        env!("CARGO_PKG_VERSION"),
        Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    );
    let _ = writeln!(
        out,
        "host: {} ({} {})",
        System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        System::name().unwrap_or_else(|| "Unknown".to_string()),
        System::os_version().unwrap_or_else(|| "Unknown".to_string())
    );
    let _ = writeln!(out, "cpu: {} ({} cores)", cpu_model, sys.cpus().len());
    let _ = writeln!(out, "backends:");
    for codec in candidates {
        let _ = writeln!(out, " - {}", codec.name());
    }
    out
}

/// Render the fixed-width table: header row, dash rule, one row per record
/// in input order, and the trailing ratio legend. No sorting or grouping -
/// row grouping is an artifact of the sweep's iteration order.
pub fn render(records: &[MeasurementRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:30} {:10} {:8} {:9} {:12} {:9} {:11} {:11}",
        "Impl", "Data", "Size", "Orig(MB)", "Comp(bytes)", "CompRatio", "Comp MB/s", "Decomp MB/s"
    );
    let _ = writeln!(out, "{}", "-".repeat(110));

    for record in records {
        let orig_mib = record.orig_mib();
        let comp_bytes = record
            .comp_bytes
            .map(|b| b.to_string())
            .unwrap_or_else(|| ERR_TOKEN.to_string());
        let comp_ratio = record
            .comp_ratio()
            .map(|r| format!("{:.3}", r))
            .unwrap_or_else(|| ERR_TOKEN.to_string());

        let _ = writeln!(
            out,
            "{:30} {:10} {:8} {:9} {:12} {:9} {:11} {:11}",
            record.backend,
            record.kind.as_str(),
            size_label(record.size_bytes),
            format!("{:.2}", orig_mib),
            comp_bytes,
            comp_ratio,
            throughput_cell(orig_mib, &record.compress),
            throughput_cell(orig_mib, &record.decompress),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "CompRatio = compressed_bytes / original_bytes");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ContentKind;
    use crate::measure::TimingStats;

    fn measured(avg_s: f64) -> StepOutcome {
        StepOutcome::Measured(TimingStats {
            avg_s,
            min_s: avg_s,
            max_s: avg_s,
        })
    }

    fn record(
        backend: &'static str,
        kind: ContentKind,
        size_bytes: usize,
        comp_bytes: Option<usize>,
        compress: StepOutcome,
        decompress: StepOutcome,
    ) -> MeasurementRecord {
        MeasurementRecord {
            backend,
            kind,
            size_bytes,
            comp_bytes,
            compress,
            decompress,
        }
    }

    #[test]
    fn test_size_label() {
        assert_eq!(size_label(64 * 1024), "64K");
        assert_eq!(size_label(1023 * 1024), "1023K");
        assert_eq!(size_label(1024 * 1024), "1M");
        assert_eq!(size_label(8 * 1024 * 1024), "8M");
        assert_eq!(size_label(0), "0K");
    }

    #[test]
    fn test_successful_row_has_all_columns() {
        let records = vec![record(
            "alpha",
            ContentKind::Repetitive,
            1024 * 1024,
            Some(2048),
            measured(0.01),
            measured(0.005),
        )];
        let text = render(&records);
        let row = text.lines().nth(2).unwrap();

        assert!(row.starts_with("alpha"));
        assert!(row.contains("repetitive"));
        assert!(row.contains("1M"));
        assert!(row.contains("1.00"));
        assert!(row.contains("2048"));
        assert!(row.contains("0.002"));
        // 1 MiB / 0.01 s and 1 MiB / 0.005 s
        assert!(row.contains("100.00"));
        assert!(row.contains("200.00"));
    }

    #[test]
    fn test_failed_compress_renders_err_cells() {
        let records = vec![record(
            "alpha",
            ContentKind::Random,
            64 * 1024,
            None,
            StepOutcome::Failed {
                reason: "boom".to_string(),
            },
            StepOutcome::Skipped,
        )];
        let text = render(&records);
        let row = text.lines().nth(2).unwrap();

        // comp bytes, ratio, and both throughputs degrade to the err token
        assert_eq!(row.matches(ERR_TOKEN).count(), 4);
    }

    #[test]
    fn test_zero_average_renders_err_not_infinity() {
        let records = vec![record(
            "alpha",
            ContentKind::Repetitive,
            64 * 1024,
            Some(100),
            measured(0.0),
            measured(0.0),
        )];
        let text = render(&records);
        assert!(!text.contains("inf"));
        let row = text.lines().nth(2).unwrap();
        assert_eq!(row.matches(ERR_TOKEN).count(), 2);
    }

    #[test]
    fn test_row_order_equals_input_order() {
        let backends = ["alpha", "beta"];
        let sizes = [64 * 1024, 1024 * 1024, 8 * 1024 * 1024];
        let mut records = Vec::new();
        for backend in backends {
            for kind in ContentKind::ALL {
                for size in sizes {
                    records.push(record(
                        backend,
                        kind,
                        size,
                        Some(size / 2),
                        measured(0.01),
                        measured(0.01),
                    ));
                }
            }
        }

        let text = render(&records);
        let lines: Vec<&str> = text.lines().collect();

        // header + rule + 18 rows + blank + legend
        assert_eq!(lines.len(), 22);
        assert!(lines[0].starts_with("Impl"));
        assert!(lines[1].starts_with("---"));

        let rows = &lines[2..20];
        assert_eq!(rows.len(), 18);
        // backend-major, category-second, size-minor
        for (i, row) in rows.iter().enumerate() {
            let backend = backends[i / 9];
            let kind = ContentKind::ALL[(i / 3) % 3];
            let size = sizes[i % 3];
            assert!(row.starts_with(backend), "row {}: {}", i, row);
            assert!(row.contains(kind.as_str()), "row {}: {}", i, row);
            assert!(row.contains(&size_label(size)), "row {}: {}", i, row);
        }

        assert_eq!(lines[21], "CompRatio = compressed_bytes / original_bytes");
    }
}
