// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog configuration

use serde::{Deserialize, Serialize};

/// Catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Extension of the per-table data files derived by `load_schema`
    pub data_file_extension: String,

    /// Skip blank lines and `#` comments in descriptor files
    pub skip_comments: bool,

    /// Prefix of generated table names; caller-supplied names may not use it
    pub anonymous_prefix: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file_extension: "dat".to_string(),
            skip_comments: true,
            anonymous_prefix: "__anon_".to_string(),
        }
    }
}
