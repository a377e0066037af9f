//! Variable extraction from Fluent message patterns.
//!
//! An element is variable-bearing when it is a placeable whose expression is,
//! or unwraps to, a variable reference, a function reference, or a select
//! expression whose selector is itself variable-bearing. Select variants and
//! named function arguments are never traversed: a variable used only there is
//! not part of the message's required arguments.

use fluent_syntax::ast::{
    Entry, Expression, InlineExpression, Message, Pattern, PatternElement, Resource,
};
use indexmap::{IndexMap, IndexSet};

/// Variables a single message needs at format time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableSet {
    /// The pattern is absent or has no variable-bearing element.
    Parameterless,
    /// Distinct names in first-encounter order.
    ///
    /// May be empty when a variable-bearing element resolves to no variable,
    /// e.g. `{ NUMBER(5) }`.
    Variables(IndexSet<String>),
}

impl VariableSet {
    pub fn is_parameterless(&self) -> bool {
        matches!(self, VariableSet::Parameterless)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        let names = match self {
            VariableSet::Parameterless => None,
            VariableSet::Variables(names) => Some(names.iter().map(String::as_str)),
        };
        names.into_iter().flatten()
    }
}

/// Message identifier to variable set, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageVariableMap {
    entries: IndexMap<String, VariableSet>,
}

impl MessageVariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message.
    ///
    /// A repeated identifier keeps its first position and takes the latest set.
    pub fn insert(&mut self, id: impl Into<String>, variables: VariableSet) {
        self.entries.insert(id.into(), variables);
    }

    pub fn get(&self, id: &str) -> Option<&VariableSet> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariableSet)> {
        self.entries.iter().map(|(id, vars)| (id.as_str(), vars))
    }
}

/// Extract the variables of every message in a resource.
///
/// Terms, comments and junk entries are skipped.
pub fn extract_resource<S: AsRef<str>>(resource: &Resource<S>) -> MessageVariableMap {
    let mut map = MessageVariableMap::new();
    for entry in &resource.body {
        if let Entry::Message(message) = entry {
            map.insert(message.id.name.as_ref(), extract_message(message));
        }
    }
    map
}

/// Extract the variables referenced by a message's value pattern.
///
/// Attributes are not inspected.
pub fn extract_message<S: AsRef<str>>(message: &Message<S>) -> VariableSet {
    extract_variables(message.value.as_ref())
}

pub fn extract_variables<S: AsRef<str>>(pattern: Option<&Pattern<S>>) -> VariableSet {
    let Some(pattern) = pattern else {
        return VariableSet::Parameterless;
    };

    let mut names = IndexSet::new();
    let mut variable_bearing = false;

    for element in &pattern.elements {
        if let PatternElement::Placeable { expression } = element {
            variable_bearing |= collect_expression(expression, &mut names);
        }
    }

    if variable_bearing {
        VariableSet::Variables(names)
    } else {
        VariableSet::Parameterless
    }
}

/// Whether a pattern element contributes to the message's argument shape.
pub fn is_variable_bearing<S: AsRef<str>>(element: &PatternElement<S>) -> bool {
    match element {
        PatternElement::TextElement { .. } => false,
        PatternElement::Placeable { expression } => {
            collect_expression(expression, &mut IndexSet::new())
        }
    }
}

// Both helpers return whether the node is variable-bearing, pushing any
// variable names found into `names`.

fn collect_expression<S: AsRef<str>>(
    expression: &Expression<S>,
    names: &mut IndexSet<String>,
) -> bool {
    match expression {
        Expression::Select { selector, .. } => collect_inline(selector, names),
        Expression::Inline(inline) => collect_inline(inline, names),
    }
}

fn collect_inline<S: AsRef<str>>(
    inline: &InlineExpression<S>,
    names: &mut IndexSet<String>,
) -> bool {
    match inline {
        InlineExpression::VariableReference { id } => {
            let name = id.name.as_ref();
            if !names.contains(name) {
                names.insert(name.to_owned());
            }
            true
        }
        InlineExpression::FunctionReference { arguments, .. } => {
            for argument in &arguments.positional {
                collect_inline(argument, names);
            }
            true
        }
        InlineExpression::Placeable { expression } => collect_expression(expression, names),
        InlineExpression::StringLiteral { .. }
        | InlineExpression::NumberLiteral { .. }
        | InlineExpression::MessageReference { .. }
        | InlineExpression::TermReference { .. } => false,
    }
}
