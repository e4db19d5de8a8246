use std::fs;
use std::path::PathBuf;

use colored::*;
use rayon::prelude::*;

use crate::cli::Cli;
use crate::error::AnalyzeError;
use crate::models::{AccessRecord, StatRequest};
use crate::parse_result::FileParseResult;
use crate::parsers::ParserRegistry;
use crate::report::ReportBuilder;

/// Run the full pipeline: expand inputs, parse every file, aggregate, and
/// write the JSON report.
///
/// Per-file and per-line failures are diagnostics, never fatal; only a bad
/// invocation (unknown format) propagates an error to the caller.
pub fn run_report(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ParserRegistry::builtin();
    let parser = registry.get(&cli.file_format)?;

    let files = expand_globs(&cli.files)?;
    if files.is_empty() {
        // Falls through to the empty-record outcome below
        eprintln!("No files matched the given patterns");
    }

    // Per-file read+parse is independent; the indexed collect keeps file
    // order, so merged record order matches sequential execution.
    let parsed: Vec<std::io::Result<FileParseResult>> = files
        .par_iter()
        .map(|path| fs::read_to_string(path).map(|content| parser.parse_file(&content)))
        .collect();

    let mut records: Vec<AccessRecord> = Vec::new();
    let mut files_skipped = 0;
    let mut content_lines = 0;
    let mut malformed_lines = 0;
    let mut blank_lines = 0;

    for (path, outcome) in files.iter().zip(parsed) {
        match outcome {
            Ok(result) => {
                for malformed in &result.malformed {
                    eprintln!(
                        "{}",
                        format!(
                            "found a malformed log line at {}:{}: {}",
                            path.display(),
                            malformed.line_number,
                            malformed.error
                        )
                        .dimmed()
                    );
                }
                content_lines += result.content_lines();
                malformed_lines += result.malformed.len();
                blank_lines += result.blank_lines;
                records.extend(result.records);
            }
            Err(error) => {
                eprintln!(
                    "{}",
                    format!("Could not open/read file {}: {}", path.display(), error).red()
                );
                files_skipped += 1;
            }
        }
    }

    print_run_summary(files.len(), files_skipped, content_lines, malformed_lines, blank_lines);

    if records.is_empty() {
        println!("{}", "no log found in files".yellow());
        return Ok(());
    }

    let request = cli.stat_request();
    if request.any() {
        print_query_traces(&request);
    }

    let built = ReportBuilder::new(request).build(&records)?;
    for warning in &built.warnings {
        eprintln!("{}", format!("Warning: {}", warning).yellow());
    }

    let json = serde_json::to_string(&built.report)?;
    println!("{}", json);

    write_report(&cli.output_file, &json);
    Ok(())
}

/// Query traces live here, not in the engine, so the computations stay pure.
fn print_query_traces(request: &StatRequest) {
    if request.most_frequent_ip {
        eprintln!("{}", "performing most frequent ip query".dimmed());
    }
    if request.least_frequent_ip {
        eprintln!("{}", "performing least frequent ip query".dimmed());
    }
    if request.total_bytes_exchanged {
        eprintln!("{}", "performing total bytes exchanged query".dimmed());
    }
    if request.event_per_seconds {
        eprintln!("{}", "performing event per seconds query".dimmed());
    }
}

/// Write the serialized report, reporting failures without aborting.
fn write_report(path: &PathBuf, json: &str) {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            let error = AnalyzeError::OutputDirMissing { path: path.display().to_string() };
            println!("{}", error.to_string().red());
            return;
        }
    }
    if let Err(error) = fs::write(path, json) {
        let error = AnalyzeError::Io {
            operation: format!("writing report to {}", path.display()),
            message: error.to_string(),
        };
        eprintln!("{}", error.to_string().red());
    }
}

/// Expand glob patterns in the input list, passing plain paths through.
///
/// A pattern that matches nothing yields nothing, and a matched path that
/// cannot be read is reported and skipped. Only a syntactically invalid
/// pattern is an error.
pub fn expand_globs(patterns: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let pattern_str = pattern.to_string_lossy();
        if pattern_str.contains('*') || pattern_str.contains('?') {
            for entry in glob::glob(&pattern_str)? {
                match entry {
                    Ok(path) => files.push(path),
                    Err(error) => {
                        eprintln!(
                            "{}",
                            format!("Could not read matched path: {}", error).red()
                        );
                    }
                }
            }
        } else {
            files.push(pattern.clone());
        }
    }
    Ok(files)
}

fn print_run_summary(
    files_total: usize,
    files_skipped: usize,
    content_lines: usize,
    malformed: usize,
    blank: usize,
) {
    eprintln!("{}", "─".repeat(50).dimmed());
    eprintln!(
        "Files:     {} ({} skipped)",
        (files_total - files_skipped).to_string().white().bold(),
        files_skipped
    );
    eprintln!(
        "Lines:     {} ({} blank)",
        content_lines.to_string().white(),
        blank
    );
    eprintln!(
        "Records:   {}",
        (content_lines - malformed).to_string().green()
    );
    eprintln!("Malformed: {}", malformed.to_string().yellow());
    eprintln!("{}", "─".repeat(50).dimmed());
}
