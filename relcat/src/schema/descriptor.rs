// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Schema descriptor implementation
//!
//! Describes the fields of a tuple: their order, their types and their
//! (optional) names. Two descriptors are equal when they have the same number
//! of fields and every field agrees on both type and name; an absent name
//! only equals another absent name.

use super::error::{SchemaError, SchemaResult};
use super::types::FieldType;
use serde::Serialize;
use std::fmt;

/// A single field of a schema
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// The type of the field
    pub field_type: FieldType,

    /// The name of the field, `None` for anonymous fields
    pub name: Option<String>,
}

impl FieldDescriptor {
    pub fn new(field_type: FieldType, name: Option<String>) -> Self {
        Self { field_type, name }
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({})",
            self.name.as_deref().unwrap_or("null"),
            self.field_type
        )
    }
}

/// Ordered, typed shape of a tuple
///
/// Field count, types and names are fixed at construction. `byte_size` is
/// computed once and never changes afterwards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct SchemaDescriptor {
    fields: Vec<FieldDescriptor>,
    byte_size: usize,
}

impl SchemaDescriptor {
    /// Create a descriptor with named fields
    ///
    /// `names` must have one entry per type; individual entries may be `None`.
    ///
    /// # Returns
    /// * `Err(SchemaError::InvalidSchema)` if `types` is empty or the lengths differ
    pub fn new(types: Vec<FieldType>, names: Vec<Option<String>>) -> SchemaResult<Self> {
        if types.is_empty() {
            return Err(SchemaError::InvalidSchema(
                "a schema needs at least one field".to_string(),
            ));
        }
        if types.len() != names.len() {
            return Err(SchemaError::InvalidSchema(format!(
                "{} field types but {} field names",
                types.len(),
                names.len()
            )));
        }

        let fields = types
            .into_iter()
            .zip(names)
            .map(|(field_type, name)| FieldDescriptor::new(field_type, name))
            .collect();
        Ok(Self::from_fields(fields))
    }

    /// Create a descriptor whose fields are all anonymous
    pub fn unnamed(types: Vec<FieldType>) -> SchemaResult<Self> {
        let names = vec![None; types.len()];
        Self::new(types, names)
    }

    fn from_fields(fields: Vec<FieldDescriptor>) -> Self {
        let byte_size = fields.iter().map(|f| f.field_type.encoded_len()).sum();
        Self { fields, byte_size }
    }

    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// Name of the `i`th field, `Ok(None)` when the field is anonymous
    pub fn field_name(&self, i: usize) -> SchemaResult<Option<&str>> {
        self.field(i).map(|f| f.name.as_deref())
    }

    pub fn field_type(&self, i: usize) -> SchemaResult<FieldType> {
        self.field(i).map(|f| f.field_type)
    }

    fn field(&self, i: usize) -> SchemaResult<&FieldDescriptor> {
        self.fields.get(i).ok_or_else(|| {
            SchemaError::NoSuchField(format!(
                "index {} is out of range for a schema with {} fields",
                i,
                self.fields.len()
            ))
        })
    }

    /// Index of the first field named `name`
    ///
    /// Anonymous fields never match.
    pub fn field_index(&self, name: &str) -> SchemaResult<usize> {
        self.fields
            .iter()
            .position(|f| f.name.as_deref() == Some(name))
            .ok_or_else(|| SchemaError::NoSuchField(format!("no field named '{}'", name)))
    }

    /// Size in bytes of every tuple with this schema
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// Concatenate two schemas: all of `first`'s fields, then all of `second`'s
    pub fn merge(first: &SchemaDescriptor, second: &SchemaDescriptor) -> SchemaDescriptor {
        let fields = first
            .fields
            .iter()
            .chain(second.fields.iter())
            .cloned()
            .collect();
        Self::from_fields(fields)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a SchemaDescriptor {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for SchemaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.fields.iter().map(|field| field.to_string()).collect();
        write!(f, "{}", rendered.join(", "))
    }
}
