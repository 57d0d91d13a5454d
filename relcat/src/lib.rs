// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! RelCat - table catalog and tuple schemas for a relational storage engine
//!
//! RelCat is the metadata layer the rest of an engine uses to interpret raw
//! tuple bytes and to resolve table names into operable storage handles.
//!
//! # Features
//!
//! - **Schema descriptors**: immutable, typed, optionally named field lists
//!   with fixed tuple sizes, merge and structural equality
//! - **Concurrent catalog**: lock-free name and id lookups shared across threads
//! - **Descriptor files**: bulk table registration that is all-or-nothing
//!
//! # Usage
//!
//! ```ignore
//! use relcat::Catalog;
//!
//! let catalog = Catalog::new();
//! catalog.load_schema("data/catalog.txt")?;
//!
//! let id = catalog.get_table_id("students")?;
//! let schema = catalog.get_tuple_desc(id)?;
//! println!("{} bytes per tuple", schema.byte_size());
//! ```

pub mod catalog;
pub mod schema;
pub mod storage;

pub use catalog::{Catalog, CatalogConfig, CatalogError, CatalogResult, LoadError, TableEntry};
pub use schema::{FieldDescriptor, FieldType, SchemaDescriptor, SchemaError, SchemaResult};
pub use storage::{HeapFile, StorageHandle, TableId};

/// RelCat version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// RelCat crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
