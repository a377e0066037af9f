//! Report formatting and printing utilities.
//!
//! Diagnostics are printed cargo-style. Every function has a `_to` variant
//! writing to any `Write` so the output can be tested.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::issues::{FileFailure, ParseWarning};
use crate::pipeline::{BatchResult, FileOutcome, FileStatus};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a whole batch: outcomes to stdout, diagnostics to stderr.
pub fn print_batch(batch: &BatchResult, verbose: bool) {
    print_batch_to(
        batch,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

pub fn print_batch_to<O: Write, E: Write>(
    batch: &BatchResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    for outcome in &batch.outcomes {
        print_outcome_to(outcome, out);
        if verbose {
            for warning in &outcome.warnings {
                print_warning_to(warning, err);
            }
        }
    }

    for failure in &batch.failures {
        print_failure_to(failure, err);
    }

    print_parse_warning_count_to(batch.files_with_warnings(), verbose, err);
}

pub fn print_outcome_to<W: Write>(outcome: &FileOutcome, writer: &mut W) {
    let messages = format!(
        "({} {})",
        outcome.message_count,
        if outcome.message_count == 1 {
            "message"
        } else {
            "messages"
        }
    );

    let line = match outcome.status {
        FileStatus::Written => format!(
            "{} Generated {} from {} {}",
            SUCCESS_MARK.green(),
            outcome.output,
            outcome.input,
            messages.dimmed()
        ),
        FileStatus::Unchanged => format!(
            "{} {} unchanged {}",
            SUCCESS_MARK.green(),
            outcome.output,
            messages.dimmed()
        ),
        FileStatus::UpToDate => format!(
            "{} {} is up to date {}",
            SUCCESS_MARK.green(),
            outcome.output,
            messages.dimmed()
        ),
        FileStatus::Stale => format!(
            "{} {} would be updated from {} {}",
            FAILURE_MARK.red(),
            outcome.output,
            outcome.input,
            messages.dimmed()
        ),
    };
    let _ = writeln!(writer, "{}", line);
}

pub fn print_warning_to<W: Write>(warning: &ParseWarning, writer: &mut W) {
    let width = warning.line.to_string().len();

    let _ = writeln!(
        writer,
        "{}: {}",
        ParseWarning::severity().to_string().bold().yellow(),
        warning.message
    );
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        warning.file_path,
        warning.line,
        warning.col
    );
    let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width);
    let _ = writeln!(
        writer,
        "{} {} {}",
        warning.line.to_string().blue(),
        "|".blue(),
        warning.source_line
    );

    // Caret pointing to the column (col is 1-based)
    let prefix: String = warning
        .source_line
        .chars()
        .take(warning.col.saturating_sub(1))
        .collect();
    let padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".yellow(),
        width = width,
        padding = padding
    );
    let _ = writeln!(writer);
}

pub fn print_failure_to<W: Write>(failure: &FileFailure, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {}",
        FileFailure::severity().to_string().bold().red(),
        failure.error
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), failure.input);
}

/// Print a warning about files with recovered syntax errors.
pub fn print_parse_warning_count_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) contain syntax errors (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

/// Print the final summary line of a run.
pub fn print_summary(batch: &BatchResult) {
    print_summary_to(batch, &mut io::stdout().lock());
}

pub fn print_summary_to<W: Write>(batch: &BatchResult, writer: &mut W) {
    let failed = batch.failures.len();
    let stale = batch.stale_count();
    let total = batch.outcomes.len() + failed;

    if failed == 0 && stale == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Processed {} {}",
                total,
                if total == 1 { "file" } else { "files" }
            )
            .green()
        );
        return;
    }

    let mut problems = Vec::new();
    if failed > 0 {
        problems.push(format!("{} failed", failed).red().to_string());
    }
    if stale > 0 {
        problems.push(format!("{} out of date", stale).yellow().to_string());
    }

    let _ = writeln!(
        writer,
        "\n{} Processed {} {} ({})",
        FAILURE_MARK.red(),
        total,
        if total == 1 { "file" } else { "files" },
        problems.join(", ")
    );
}
