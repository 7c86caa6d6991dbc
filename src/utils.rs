// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Misc utility functions.

use std::{fs::OpenOptions, io::Write, time::Duration};

pub const INV_ROOT2: f64 = 0.7071067811865475;

/// Append a single line to the file at `file_path`, creating it if needed.
pub fn append_line(file_path: &str, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// Print to stdout and append the same line to the result file.
/// A failed write is reported on stderr, the console output is kept.
pub fn write_and_print(line: String, file_path: &str) {
    println!("{}", line);
    if let Err(e) = append_line(file_path, &line) {
        eprintln!("Could not write to {}: {}", file_path, e);
    }
}

/// Local wall clock time for report headers.
pub fn report_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a duration with a unit that keeps the number short.
pub fn format_elapsed_time(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs >= 1.0 {
        format!("{:>8.3} s ", secs)
    } else if secs >= 1e-3 {
        format!("{:>8.3} ms", secs * 1e3)
    } else {
        format!("{:>8.3} us", secs * 1e6)
    }
}

/// Format a number of bytes into a pretty String.
/// e.g. 1048576 is 1 MiB
pub fn format_byte_count(num_bytes: usize) -> String {
    // 2**30 = 1073741824
    if num_bytes >= 1073741824 {
        format!("{:.2} GiB", (num_bytes as f64 / 1073741824.0))
    // 2**20 = 1048576
    } else if num_bytes >= 1048576 {
        format!("{:.2} MiB", (num_bytes as f64 / 1048576.0))
    // 2**10 = 1024
    } else if num_bytes >= 1024 {
        format!("{:.2} KiB", (num_bytes as f64 / 1024.0))
    } else {
        format!("{:.2} B", num_bytes as f64)
    }
}
