//! Fluent resource parsing.
//!
//! The parser recovers from syntax errors by turning the offending text into
//! junk entries; those errors come back as [`ParseWarning`]s and the recovered
//! resource is used as is.

use fluent_syntax::ast::Resource;
use fluent_syntax::parser::{self, ParserError};

use crate::issues::ParseWarning;

pub struct ParsedResource<'s> {
    pub resource: Resource<&'s str>,
    pub warnings: Vec<ParseWarning>,
}

pub fn parse_resource<'s>(file_path: &str, source: &'s str) -> ParsedResource<'s> {
    match parser::parse(source) {
        Ok(resource) => ParsedResource {
            resource,
            warnings: Vec::new(),
        },
        Err((resource, errors)) => ParsedResource {
            resource,
            warnings: errors
                .iter()
                .map(|err| to_warning(file_path, source, err))
                .collect(),
        },
    }
}

fn to_warning(file_path: &str, source: &str, err: &ParserError) -> ParseWarning {
    let (line, col, source_line) = locate(source, err.pos.start);
    ParseWarning {
        file_path: file_path.to_string(),
        line,
        col,
        source_line: source_line.to_string(),
        message: err.to_string(),
    }
}

/// 1-based line and column of a byte offset, plus the text of that line.
fn locate(source: &str, offset: usize) -> (usize, usize, &str) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[offset..]
        .find('\n')
        .map_or(source.len(), |i| offset + i);

    let line = source[..line_start].matches('\n').count() + 1;
    let col = source[line_start..offset].chars().count() + 1;
    let text = source[line_start..line_end].trim_end_matches('\r');

    (line, col, text)
}
