//! Dispatch parsed arguments to the matching command.
//!
//! Commands run against the current directory: the config file is searched
//! from there and relative paths resolve against it.

use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{generate::generate, init::init},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command, generate: args }: Arguments) -> Result<ExitStatus> {
    let root = env::current_dir().context("Failed to determine the current directory")?;

    match command {
        Some(Command::Init) => init(&root),
        None => generate(&root, args),
    }
}
