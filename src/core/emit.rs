//! Mapping emission: turns extracted variable sets into the structure of the
//! generated type declaration.

use super::extract::{MessageVariableMap, VariableSet};

/// Name of the generated message-to-variables interface.
pub const MAPPING_NAME: &str = "LocalesMap";

/// Type given to every variable field.
pub const VARIABLE_TYPE: &str = "FluentVariable";

/// Default module the bundle types are imported from.
pub const DEFAULT_BUNDLE_MODULE: &str = "@fluent/bundle";

/// Value type of one mapping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// The message accepts no arguments object.
    Never,
    /// One required field per variable, each typed [`VARIABLE_TYPE`].
    Object(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub id: String,
    pub shape: Shape,
}

/// Everything the rendered declaration file contains.
///
/// The `Message` and `TypedFluentBundle` declarations are fixed and added by
/// the renderer; only the import source and the entries vary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeModule {
    pub bundle_module: String,
    pub entries: Vec<MappingEntry>,
}

impl TypeModule {
    pub fn message_count(&self) -> usize {
        self.entries.len()
    }
}

pub fn emit_mapping(map: &MessageVariableMap, bundle_module: &str) -> TypeModule {
    let entries = map
        .iter()
        .map(|(id, variables)| MappingEntry {
            id: id.to_string(),
            shape: shape_of(variables),
        })
        .collect();

    TypeModule {
        bundle_module: bundle_module.to_string(),
        entries,
    }
}

fn shape_of(variables: &VariableSet) -> Shape {
    match variables {
        VariableSet::Parameterless => Shape::Never,
        VariableSet::Variables(names) => Shape::Object(names.iter().cloned().collect()),
    }
}
