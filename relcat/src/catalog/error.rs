// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for the table catalog

use crate::schema::SchemaError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No such table: {0}")]
    NoSuchTable(String),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// Failure to load a catalog descriptor file
///
/// A load that fails registers no table at all.
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    #[error("cannot read {}: {reason}", .path.display())]
    Io { path: PathBuf, reason: String },

    #[error("invalid catalog entry at {}:{line_number}: {reason}: {line}", .path.display())]
    InvalidEntry {
        path: PathBuf,
        line_number: usize,
        line: String,
        reason: String,
    },
}

impl LoadError {
    /// Offending line text, if the failure is tied to one
    pub fn line(&self) -> Option<&str> {
        match self {
            LoadError::Io { .. } => None,
            LoadError::InvalidEntry { line, .. } => Some(line),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::InvalidEntry { path, .. } => path,
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
