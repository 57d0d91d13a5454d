// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Integration tests for table registration and lookup

use relcat::{Catalog, CatalogError, FieldType, HeapFile, SchemaDescriptor, StorageHandle};
use std::sync::Arc;
use tempfile::TempDir;

fn students_schema() -> Arc<SchemaDescriptor> {
    Arc::new(
        SchemaDescriptor::new(
            vec![FieldType::Int, FieldType::String],
            vec![Some("id".to_string()), Some("name".to_string())],
        )
        .unwrap(),
    )
}

fn heap_file(dir: &TempDir, file_name: &str) -> Arc<dyn StorageHandle> {
    Arc::new(HeapFile::new(dir.path().join(file_name), students_schema()).unwrap())
}

#[test]
fn test_register_students() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = Catalog::new();
    let handle = heap_file(&temp_dir, "students.dat");

    catalog.add_table(handle.clone(), "students", "id").unwrap();

    let id = catalog.get_table_id("students").unwrap();
    assert_eq!(id, handle.id());
    assert_eq!(catalog.get_primary_key(id).unwrap(), "id");
    assert_eq!(catalog.get_table_name(id).unwrap(), "students");
    assert_eq!(*catalog.get_tuple_desc(id).unwrap(), *students_schema());
}

#[test]
fn test_second_handle_under_same_name() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = Catalog::new();
    let first = heap_file(&temp_dir, "students_v1.dat");
    let second = heap_file(&temp_dir, "students_v2.dat");

    catalog.add_table(first.clone(), "students", "id").unwrap();
    catalog.add_table(second.clone(), "students", "id").unwrap();

    assert_eq!(catalog.get_table_id("students").unwrap(), second.id());
    assert!(matches!(
        catalog.get_storage_handle(first.id()),
        Err(CatalogError::NoSuchTable(_))
    ));
    assert!(matches!(
        catalog.get_primary_key(first.id()),
        Err(CatalogError::NoSuchTable(_))
    ));
    assert_eq!(catalog.table_ids().collect::<Vec<_>>(), vec![second.id()]);
}

#[test]
fn test_clear_then_lookups_fail() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = Catalog::new();
    let id = catalog
        .add_table(heap_file(&temp_dir, "a.dat"), "a", "id")
        .unwrap();

    catalog.clear();

    assert!(matches!(
        catalog.get_table_id("a"),
        Err(CatalogError::NoSuchTable(_))
    ));
    assert!(matches!(
        catalog.get_tuple_desc(id),
        Err(CatalogError::NoSuchTable(_))
    ));
    assert!(matches!(
        catalog.get_table_name(id),
        Err(CatalogError::NoSuchTable(_))
    ));

    // Usable again after clearing
    catalog
        .add_table(heap_file(&temp_dir, "a.dat"), "a", "id")
        .unwrap();
    assert_eq!(catalog.get_table_id("a").unwrap(), id);
}

#[test]
fn test_shared_schema_between_handle_and_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = Catalog::new();
    let handle = heap_file(&temp_dir, "shared.dat");
    let id = catalog.add_named_table(handle.clone(), "shared").unwrap();

    assert!(Arc::ptr_eq(
        &catalog.get_tuple_desc(id).unwrap(),
        &handle.schema()
    ));
}
