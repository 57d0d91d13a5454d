// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Field types understood by the tuple layer
//!
//! Every field type has a fixed encoded length so that a tuple's size can be
//! computed from its schema alone.

use serde::{Deserialize, Serialize};

/// Encoded length of a string field, in bytes
pub const STRING_LEN: usize = 128;

/// Encoded length of an integer field, in bytes
pub const INT_LEN: usize = 4;

/// Type of a single tuple field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// 32-bit signed integer
    Int,

    /// Fixed-length string of `STRING_LEN` bytes
    String,
}

impl FieldType {
    /// Number of bytes a value of this type occupies in an encoded tuple
    pub fn encoded_len(&self) -> usize {
        match self {
            FieldType::Int => INT_LEN,
            FieldType::String => STRING_LEN,
        }
    }
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" => Ok(FieldType::Int),
            "string" => Ok(FieldType::String),
            _ => Err(format!(
                "Unknown type: {}. Valid options: int, string",
                s
            )),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldType::Int => "INT",
            FieldType::String => "STRING",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_lengths() {
        assert_eq!(FieldType::Int.encoded_len(), 4);
        assert_eq!(FieldType::String.encoded_len(), 128);
    }

    #[test]
    fn test_field_type_parsing_is_case_insensitive() {
        assert_eq!("int".parse::<FieldType>().unwrap(), FieldType::Int);
        assert_eq!("INT".parse::<FieldType>().unwrap(), FieldType::Int);
        assert_eq!("String".parse::<FieldType>().unwrap(), FieldType::String);
        assert!("float".parse::<FieldType>().is_err());
    }
}
