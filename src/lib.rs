//! fluent-typegen - TypeScript types for Fluent messages
//!
//! Reads Fluent (`.ftl`) resources, works out which variables each message
//! needs at format time, and writes a TypeScript declaration mapping message
//! ids to their argument shapes, plus a typed `FluentBundle` interface.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, variable extraction, mapping emission and rendering
//! - `issues`: Parse warnings and per-file failures
//! - `pipeline`: Per-file read/generate/write with failure isolation
//! - `scanner`: Input pattern resolution
//! - `watch`: Polling watcher behind `--watch`

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod pipeline;
pub mod scanner;
pub mod watch;
