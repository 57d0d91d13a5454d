// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog descriptor file parser
//!
//! One table per line:
//!
//! ```text
//! name (field1 type1 [pk], field2 type2 [pk], ...)
//! ```
//!
//! Types are `int` or `string` in any case. The only annotation is `pk`; when
//! several fields carry it the last one wins. The whole file is parsed before
//! anything is handed to the catalog, so a bad line anywhere rejects the file.

use super::config::CatalogConfig;
use super::error::LoadError;
use crate::schema::{FieldType, SchemaDescriptor};
use nom::{
    bytes::complete::{take_till, take_while1},
    character::complete::{char, space0, space1},
    combinator::{all_consuming, opt},
    multi::separated_list1,
    sequence::{delimited, preceded, tuple},
    IResult,
};
use std::path::Path;

const PRIMARY_KEY_ANNOTATION: &str = "pk";

/// A table parsed from one descriptor line
#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    pub schema: SchemaDescriptor,
    /// Empty when no field is annotated with `pk`
    pub primary_key: String,
    /// 1-based line in the descriptor file
    pub line_number: usize,
}

struct RawField<'a> {
    name: &'a str,
    type_name: &'a str,
    annotation: Option<&'a str>,
}

struct RawTable<'a> {
    name: &'a str,
    fields: Vec<RawField<'a>>,
}

fn token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != ',' && c != '(' && c != ')')(input)
}

fn field(input: &str) -> IResult<&str, RawField<'_>> {
    let (input, (name, type_name, annotation)) = delimited(
        space0,
        tuple((token, preceded(space1, token), opt(preceded(space1, token)))),
        space0,
    )(input)?;

    Ok((
        input,
        RawField {
            name,
            type_name,
            annotation,
        },
    ))
}

fn table(input: &str) -> IResult<&str, RawTable<'_>> {
    let (input, name) = take_till(|c: char| c == '(')(input)?;
    let (input, fields) =
        delimited(char('('), separated_list1(char(','), field), char(')'))(input)?;
    let (input, _) = space0(input)?;

    Ok((
        input,
        RawTable {
            name: name.trim(),
            fields,
        },
    ))
}

/// Parse a single table line
///
/// # Returns
/// * `Err(reason)` describing why the line is not a valid table definition
pub fn parse_table_line(line: &str) -> Result<(String, SchemaDescriptor, String), String> {
    let (_, raw) = all_consuming(table)(line.trim())
        .map_err(|_| "malformed table definition".to_string())?;

    if raw.name.is_empty() {
        return Err("missing table name".to_string());
    }

    let mut types = Vec::with_capacity(raw.fields.len());
    let mut names = Vec::with_capacity(raw.fields.len());
    let mut primary_key = String::new();

    for field in &raw.fields {
        let field_type: FieldType = field
            .type_name
            .parse()
            .map_err(|_| format!("unknown type {}", field.type_name))?;

        if let Some(annotation) = field.annotation {
            if annotation != PRIMARY_KEY_ANNOTATION {
                return Err(format!("unknown annotation {}", annotation));
            }
            primary_key = field.name.to_string();
        }

        types.push(field_type);
        names.push(Some(field.name.to_string()));
    }

    let schema = SchemaDescriptor::new(types, names).map_err(|e| e.to_string())?;
    Ok((raw.name.to_string(), schema, primary_key))
}

/// Parse the full contents of a descriptor file
///
/// `path` is only used for diagnostics.
pub fn parse_descriptor(
    path: &Path,
    contents: &str,
    config: &CatalogConfig,
) -> Result<Vec<TableDefinition>, LoadError> {
    let mut definitions = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if config.skip_comments && (trimmed.is_empty() || trimmed.starts_with('#')) {
            continue;
        }

        let invalid = |reason: String| LoadError::InvalidEntry {
            path: path.to_path_buf(),
            line_number: index + 1,
            line: line.to_string(),
            reason,
        };

        let (name, schema, primary_key) = parse_table_line(line).map_err(invalid)?;
        let prefix = config.anonymous_prefix.as_str();
        if !prefix.is_empty() && name.starts_with(prefix) {
            return Err(invalid(format!(
                "table names starting with '{}' are reserved",
                prefix
            )));
        }

        definitions.push(TableDefinition {
            name,
            schema,
            primary_key,
            line_number: index + 1,
        });
    }

    Ok(definitions)
}
