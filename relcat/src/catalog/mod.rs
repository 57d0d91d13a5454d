// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Table catalog
//!
//! Translates table names and table ids into storage handles, schemas and
//! primary-key designations. Tables are registered one at a time with
//! [`Catalog::add_table`] or in bulk from a descriptor file with
//! [`Catalog::load_schema`].

pub mod config;
pub mod entry;
pub mod error;
pub mod loader;
pub mod registry;

pub use config::CatalogConfig;
pub use entry::TableEntry;
pub use error::{CatalogError, CatalogResult, LoadError};
pub use loader::{parse_descriptor, parse_table_line, TableDefinition};
pub use registry::Catalog;
