//! Core generation engine.
//!
//! `parse` hands source text to fluent-syntax, `extract` collects each
//! message's variables, `emit` shapes the mapping and `render` prints it as
//! TypeScript. Everything here is pure; file access lives in
//! [`crate::pipeline`].

pub mod emit;
pub mod extract;
pub mod parse;
pub mod render;

pub use emit::{DEFAULT_BUNDLE_MODULE, MappingEntry, Shape, TypeModule, emit_mapping};
pub use extract::{
    MessageVariableMap, VariableSet, extract_message, extract_resource, extract_variables,
};
pub use parse::{ParsedResource, parse_resource};
pub use render::{RenderOptions, render};

use crate::issues::ParseWarning;

/// Output of one generation pass over a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub text: String,
    pub message_count: usize,
    pub warnings: Vec<ParseWarning>,
}

/// Run the whole core over one source text.
pub fn generate(
    file_path: &str,
    source: &str,
    bundle_module: &str,
    options: &RenderOptions,
) -> Generated {
    let parsed = parse_resource(file_path, source);
    let map = extract_resource(&parsed.resource);
    let module = emit_mapping(&map, bundle_module);

    Generated {
        text: render(&module, options),
        message_count: module.message_count(),
        warnings: parsed.warnings,
    }
}
