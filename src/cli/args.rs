//! CLI argument definitions using clap.
//!
//! Without a subcommand the tool generates declarations:
//!
//! ```text
//! fluent-typegen [PATTERN] [-o PATH] [-w | --check] [-v]
//! ```
//!
//! `init` writes a default configuration file.

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl Arguments {
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Init) => false,
            None => self.generate.verbose,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Glob pattern, file or directory of Fluent files (overrides config file) [default: **/*.ftl]
    pub pattern: Option<String>,

    /// Output path; `{stem}` expands to the input file stem (overrides config file)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Regenerate whenever an input file changes
    #[arg(short, long, conflicts_with = "check")]
    pub watch: bool,

    /// Verify outputs are up to date without writing them
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .fluent-typegen.json configuration file
    Init,
}
