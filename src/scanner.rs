use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (*, ? or [).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

/// Result of resolving the input pattern.
#[derive(Debug)]
pub struct ScanResult {
    /// Matching files, sorted and deduplicated.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Resolve an input pattern relative to `base_dir`.
///
/// A glob pattern is expanded; a literal directory is walked recursively for
/// `.ftl` files; a literal file is taken as is. Paths matching any of
/// `ignore_patterns` (relative to `base_dir`) are dropped.
pub fn scan_inputs(
    base_dir: &Path,
    pattern: &str,
    ignore_patterns: &[String],
    verbose: bool,
) -> Result<ScanResult> {
    let ignores = ignore_patterns
        .iter()
        .map(|p| {
            Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut files: BTreeSet<PathBuf> = BTreeSet::new();
    let mut skipped_count = 0;

    if is_glob_pattern(pattern) {
        let full_pattern = if Path::new(pattern).is_absolute() {
            pattern.to_string()
        } else {
            let base = Pattern::escape(&base_dir.to_string_lossy());
            format!("{}/{}", base.trim_end_matches('/'), pattern)
        };

        let entries = glob(&full_pattern)
            .with_context(|| format!("Invalid input pattern: \"{}\"", pattern))?;

        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => {
                    files.insert(path);
                }
                Ok(_) => {}
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!(
                            "{} Cannot access path: {}",
                            "warning:".bold().yellow(),
                            e
                        );
                    }
                }
            }
        }
    } else {
        let path = base_dir.join(pattern);
        if path.is_dir() {
            for entry in WalkDir::new(&path) {
                let entry = match entry {
                    Ok(e) => e,
                    Err(e) => {
                        skipped_count += 1;
                        if verbose {
                            eprintln!(
                                "{} Cannot access path: {}",
                                "warning:".bold().yellow(),
                                e
                            );
                        }
                        continue;
                    }
                };
                if entry.file_type().is_file() && is_fluent_file(entry.path()) {
                    files.insert(entry.into_path());
                }
            }
        } else if path.is_file() {
            files.insert(path);
        } else if verbose {
            eprintln!(
                "{} Input path does not exist: {}",
                "warning:".bold().yellow(),
                path.display()
            );
        }
    }

    let files = files
        .into_iter()
        .filter(|path| {
            let relative = display_path(base_dir, path);
            !ignores.iter().any(|p| p.matches(&relative))
        })
        .collect();

    Ok(ScanResult {
        files,
        skipped_count,
    })
}

fn is_fluent_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("ftl")
}

/// Path relative to `base_dir` when possible, for matching and display.
pub fn display_path(base_dir: &Path, path: &Path) -> String {
    path.strip_prefix(base_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
