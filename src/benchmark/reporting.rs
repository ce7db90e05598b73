use std::fmt::Write;
use std::path::Path;

use super::sinks::TableRow;
use super::types::BenchmarkResult;

pub const RUN_STARTED: &str = "Sorting started.";
pub const RUN_FINISHED: &str = "Sorting finished.";

/// Convert nanoseconds to a human-readable duration (ns, µs, ms, s)
pub fn format_elapsed(nanos: u64) -> String {
    const SECOND: u64 = 1_000_000_000;
    const MILLI: u64 = 1_000_000;
    const MICRO: u64 = 1_000;

    if nanos >= SECOND {
        format!("{:.3} s", nanos as f64 / SECOND as f64)
    } else if nanos >= MILLI {
        format!("{:.3} ms", nanos as f64 / MILLI as f64)
    } else if nanos >= MICRO {
        format!("{:.3} µs", nanos as f64 / MICRO as f64)
    } else {
        format!("{} ns", nanos)
    }
}

/// Log line written after every finished job.
pub fn job_log_line(result: &BenchmarkResult) -> String {
    format!(
        "{} thousand elements sorted {} in {}.",
        result.elements_in_thousands,
        result.algorithm.adverb(),
        format_elapsed(result.elapsed_nanos)
    )
}

fn cell(nanos: Option<u64>) -> String {
    nanos.map(format_elapsed).unwrap_or_else(|| "no data".to_string())
}

/// Print the results table with one row per sample size
pub fn print_summary(rows: &[TableRow]) {
    println!("\n{}", "=".repeat(72));
    println!("Quicksort Benchmark Results");
    println!("{}", "=".repeat(72));
    println!(
        "{:<20} {:<18} {:<18} {:<12}",
        "Elements (thous.)", "Iterative", "Recursive", "Rec/Iter"
    );
    println!("{}", "-".repeat(72));

    for row in rows {
        println!(
            "{:<20} {:<18} {:<18} {:<12}",
            row.elements_in_thousands,
            cell(row.iterative_nanos),
            cell(row.recursive_nanos),
            row.ratio()
                .map(|r| format!("{:.3}x", r))
                .unwrap_or_else(|| "N/A".to_string()),
        );
    }
    println!("{}", "=".repeat(72));
}

/// Render the results table as CSV; missing timings are left empty
pub fn rows_to_csv(rows: &[TableRow]) -> String {
    let mut csv = String::new();
    let opt = |v: Option<u64>| v.map(|n| n.to_string()).unwrap_or_default();

    // Writing into a String cannot fail.
    let _ = writeln!(
        csv,
        "sample_index,elements_in_thousands,iterative_nanos,recursive_nanos"
    );
    for (index, row) in rows.iter().enumerate() {
        let _ = writeln!(
            csv,
            "{},{},{},{}",
            index,
            row.elements_in_thousands,
            opt(row.iterative_nanos),
            opt(row.recursive_nanos)
        );
    }

    csv
}

pub fn write_csv(path: impl AsRef<Path>, rows: &[TableRow]) -> std::io::Result<()> {
    std::fs::write(path, rows_to_csv(rows))
}
