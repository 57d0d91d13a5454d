// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Tuple schemas
//!
//! A [`SchemaDescriptor`] is the ordered, typed shape of every tuple a table
//! holds. Descriptors are immutable once built and are shared behind `Arc`
//! between the catalog and the storage handle of the same table.

pub mod descriptor;
pub mod error;
pub mod types;

pub use descriptor::{FieldDescriptor, SchemaDescriptor};
pub use error::{SchemaError, SchemaResult};
pub use types::{FieldType, INT_LEN, STRING_LEN};
