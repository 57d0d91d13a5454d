// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Storage handles
//!
//! A storage handle owns one table's physical storage and reports the schema
//! of the tuples it holds. The catalog only needs a handle's identity and its
//! schema; page layout and file I/O stay behind the handle.

pub mod handle;
pub mod heap_file;

pub use handle::{StorageHandle, TableId};
pub use heap_file::HeapFile;
