//! Per-file generation: read, generate, compare, write.
//!
//! Every input is processed independently. A failure is recorded against its
//! own input and never stops the rest of the batch.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::{Config, STEM_PLACEHOLDER};
use crate::core::{RenderOptions, generate};
use crate::issues::{FileFailure, ParseWarning};
use crate::scanner::display_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Write outputs whose content changed.
    Write,
    /// Compare only; never touch the filesystem.
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Written,
    /// Write mode, existing output already matched.
    Unchanged,
    /// Check mode, existing output matches.
    UpToDate,
    /// Check mode, output is missing or differs.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub input: String,
    pub output: String,
    pub status: FileStatus,
    pub message_count: usize,
    pub warnings: Vec<ParseWarning>,
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Destination, possibly containing [`STEM_PLACEHOLDER`].
    pub output: String,
    pub bundle_module: String,
    pub render: RenderOptions,
    pub mode: Mode,
}

impl GenerateOptions {
    pub fn from_config(config: &Config, mode: Mode) -> Self {
        Self {
            output: config.output.clone(),
            bundle_module: config.bundle_module.clone(),
            render: config.render_options(),
            mode,
        }
    }
}

/// An input paired with the file its declaration goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Default)]
pub struct BatchResult {
    pub outcomes: Vec<FileOutcome>,
    pub failures: Vec<FileFailure>,
}

impl BatchResult {
    pub fn stale_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == FileStatus::Stale)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.warnings.len()).sum()
    }

    /// Number of files with at least one parse warning.
    pub fn files_with_warnings(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| !o.warnings.is_empty())
            .count()
    }
}

pub fn output_path_for(base_dir: &Path, template: &str, input: &Path) -> PathBuf {
    let rendered = if template.contains(STEM_PLACEHOLDER) {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        template.replace(STEM_PLACEHOLDER, &stem)
    } else {
        template.to_string()
    };

    let path = Path::new(&rendered);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Pair inputs with outputs.
///
/// When several inputs expand to the same output, the first one (in the given
/// order) keeps it and the others become failures.
pub fn plan(
    base_dir: &Path,
    inputs: &[PathBuf],
    template: &str,
) -> (Vec<Job>, Vec<FileFailure>) {
    let mut owners: HashMap<PathBuf, &Path> = HashMap::new();
    let mut jobs = Vec::new();
    let mut failures = Vec::new();

    for input in inputs {
        let output = output_path_for(base_dir, template, input);
        match owners.get(&output) {
            Some(owner) => failures.push(FileFailure {
                input: display_path(base_dir, input),
                error: format!(
                    "output collision: {} is already generated from {} (use {} in the output path)",
                    display_path(base_dir, &output),
                    display_path(base_dir, owner),
                    STEM_PLACEHOLDER
                ),
            }),
            None => {
                owners.insert(output.clone(), input);
                jobs.push(Job {
                    input: input.clone(),
                    output,
                });
            }
        }
    }

    (jobs, failures)
}

pub fn process_file(
    base_dir: &Path,
    job: &Job,
    options: &GenerateOptions,
) -> Result<FileOutcome> {
    let input = display_path(base_dir, &job.input);
    let output = display_path(base_dir, &job.output);

    let source = fs::read_to_string(&job.input)
        .with_context(|| format!("Failed to read {}", input))?;

    let generated = generate(&input, &source, &options.bundle_module, &options.render);

    let up_to_date =
        fs::read_to_string(&job.output).is_ok_and(|existing| existing == generated.text);

    let status = match options.mode {
        Mode::Check if up_to_date => FileStatus::UpToDate,
        Mode::Check => FileStatus::Stale,
        Mode::Write if up_to_date => FileStatus::Unchanged,
        Mode::Write => {
            if let Some(parent) = job.output.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            fs::write(&job.output, &generated.text)
                .with_context(|| format!("Failed to write {}", output))?;
            FileStatus::Written
        }
    };

    Ok(FileOutcome {
        input,
        output,
        status,
        message_count: generated.message_count,
        warnings: generated.warnings,
    })
}

/// Run a planned job, capturing its error as a [`FileFailure`].
pub fn run_job(
    base_dir: &Path,
    job: &Job,
    options: &GenerateOptions,
) -> std::result::Result<FileOutcome, FileFailure> {
    process_file(base_dir, job, options)
        .map_err(|err| FileFailure::new(display_path(base_dir, &job.input), &err))
}

pub fn process_batch(base_dir: &Path, jobs: &[Job], options: &GenerateOptions) -> BatchResult {
    let results: Vec<_> = jobs
        .par_iter()
        .map(|job| run_job(base_dir, job, options))
        .collect();

    let mut batch = BatchResult::default();
    for result in results {
        match result {
            Ok(outcome) => batch.outcomes.push(outcome),
            Err(failure) => batch.failures.push(failure),
        }
    }
    batch
}
