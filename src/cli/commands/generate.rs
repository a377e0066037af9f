use std::{path::Path, thread};

use anyhow::{Result, bail};
use colored::Colorize;

use super::super::args::GenerateArgs;
use super::super::exit_status::ExitStatus;
use super::super::report;
use crate::{
    config::{CONFIG_FILE_NAME, ConfigLoadResult, load_config},
    pipeline::{BatchResult, GenerateOptions, Job, Mode, plan, process_batch, run_job},
    scanner::{display_path, scan_inputs},
    watch::{POLL_INTERVAL, WatchEvent, Watcher},
};

pub fn generate(root: &Path, args: GenerateArgs) -> Result<ExitStatus> {
    let ConfigLoadResult { mut config, path } = load_config(root)?;

    if args.verbose {
        match &path {
            Some(path) => eprintln!("Note: Using configuration from {}", path.display()),
            None => eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            ),
        }
    }

    // CLI > config file > defaults
    if let Some(pattern) = args.pattern {
        config.input = pattern;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    config.validate()?;

    let scan_result = scan_inputs(root, &config.input, &config.ignores, args.verbose)?;

    if scan_result.skipped_count > 0 {
        eprintln!(
            "Warning: {} path(s) skipped due to access errors{}",
            scan_result.skipped_count,
            if args.verbose { "" } else { " (use -v for details)" }
        );
    }

    if scan_result.files.is_empty() {
        bail!("No Fluent files matched \"{}\"", config.input);
    }

    let mode = if args.check { Mode::Check } else { Mode::Write };
    let options = GenerateOptions::from_config(&config, mode);

    let (jobs, collisions) = plan(root, &scan_result.files, &config.output);
    let mut batch = process_batch(root, &jobs, &options);
    batch.failures.extend(collisions);
    batch.failures.sort_by(|a, b| a.input.cmp(&b.input));

    report::print_batch(&batch, args.verbose);
    report::print_summary(&batch);

    if args.watch {
        watch(root, &jobs, &options, args.verbose);
    }

    Ok(exit_status(&batch))
}

fn exit_status(batch: &BatchResult) -> ExitStatus {
    if batch.failures.is_empty() && batch.stale_count() == 0 {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    }
}

/// Regenerate changed inputs until the process is terminated.
fn watch(root: &Path, jobs: &[Job], options: &GenerateOptions, verbose: bool) -> ! {
    let mut watcher = Watcher::new(jobs.iter().map(|job| job.input.clone()));

    println!(
        "{} Watching {} {} for changes...",
        "info:".bold().cyan(),
        jobs.len(),
        if jobs.len() == 1 { "file" } else { "files" }
    );

    loop {
        thread::sleep(POLL_INTERVAL);

        for event in watcher.poll() {
            match event {
                WatchEvent::Changed(path) => {
                    let Some(job) = jobs.iter().find(|job| job.input == path) else {
                        continue;
                    };
                    let mut batch = BatchResult::default();
                    match run_job(root, job, options) {
                        Ok(outcome) => batch.outcomes.push(outcome),
                        Err(failure) => batch.failures.push(failure),
                    }
                    report::print_batch(&batch, verbose);
                }
                WatchEvent::Removed(path) => {
                    eprintln!(
                        "{} {} was removed, waiting for it to come back",
                        "warning:".bold().yellow(),
                        display_path(root, &path)
                    );
                }
            }
        }
    }
}
