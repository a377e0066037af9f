//! TypeScript rendering of a [`TypeModule`].
//!
//! Output follows the layout a TypeScript formatter would give it, with the
//! indentation width and statement terminators taken from [`RenderOptions`].

use super::emit::{MAPPING_NAME, MappingEntry, Shape, TypeModule, VARIABLE_TYPE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per indentation level.
    pub tab_width: usize,
    /// Terminate statements and members with `;`.
    pub semi: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tab_width: 4,
            semi: false,
        }
    }
}

struct Writer {
    out: String,
    indent: String,
    depth: usize,
    semi: bool,
}

impl Writer {
    fn new(options: &RenderOptions) -> Self {
        Self {
            out: String::new(),
            indent: " ".repeat(options.tab_width),
            depth: 0,
            semi: options.semi,
        }
    }

    fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(&self.indent);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    /// A line that ends a statement or an interface member.
    fn statement(&mut self, text: &str) {
        if self.semi {
            self.line(&format!("{};", text));
        } else {
            self.line(text);
        }
    }

    fn open(&mut self, text: &str) {
        self.line(text);
        self.depth += 1;
    }

    fn close(&mut self, text: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.statement(text);
    }

    /// Close an interface body.
    fn end(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    fn blank(&mut self) {
        self.line("");
    }
}

/// Quote an identifier as a TypeScript string literal key.
fn quote(key: &str) -> String {
    serde_json::Value::String(key.to_string()).to_string()
}

pub fn render(module: &TypeModule, options: &RenderOptions) -> String {
    let mut w = Writer::new(options);

    render_import(&mut w, &module.bundle_module);
    w.blank();
    render_mapping(&mut w, &module.entries);
    w.blank();
    render_message(&mut w);
    w.blank();
    render_bundle(&mut w);

    w.out
}

fn render_import(w: &mut Writer, bundle_module: &str) {
    w.open("import type {");
    w.line("FluentBundle,");
    w.line(&format!("{},", VARIABLE_TYPE));
    w.line("Message as FluentMessage,");
    w.line("// @ts-ignore");
    w.close(&format!("}} from {}", quote(bundle_module)));
}

fn render_mapping(w: &mut Writer, entries: &[MappingEntry]) {
    if entries.is_empty() {
        w.line(&format!("export interface {} {{}}", MAPPING_NAME));
        return;
    }

    w.open(&format!("export interface {} {{", MAPPING_NAME));
    for entry in entries {
        let key = quote(&entry.id);
        match &entry.shape {
            Shape::Never => w.statement(&format!("{}: never", key)),
            Shape::Object(fields) if fields.is_empty() => w.statement(&format!("{}: {{}}", key)),
            Shape::Object(fields) => {
                w.open(&format!("{}: {{", key));
                for field in fields {
                    w.statement(&format!("{}: {}", quote(field), VARIABLE_TYPE));
                }
                w.close("}");
            }
        }
    }
    w.end();
}

fn render_message(w: &mut Writer) {
    w.open(&format!(
        "export interface Message<Key extends keyof {}> extends FluentMessage {{",
        MAPPING_NAME
    ));
    w.statement("id: Key");
    w.end();
}

fn render_bundle(w: &mut Writer) {
    let key = format!("Key extends keyof {}", MAPPING_NAME);
    let value = format!("{}[Key]", MAPPING_NAME);

    w.open("export interface TypedFluentBundle extends FluentBundle {");
    w.statement(&format!("getMessage<{}>(key: Key): Message<Key>", key));

    w.open(&format!("formatPattern<{}>(", key));
    w.line("key: Key,");
    w.line(&format!(
        "...args: {} extends never ? [] : [args: {}]",
        value, value
    ));
    w.close("): string");

    w.open(&format!("formatPattern<{}>(", key));
    w.line("key: Key,");
    w.line(&format!("args: {} extends never ? null : {},", value, value));
    w.line("errors?: Error[] | null,");
    w.close("): string");

    w.end();
}
