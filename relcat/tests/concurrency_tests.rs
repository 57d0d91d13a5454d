// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Concurrent access tests for the catalog

use relcat::{Catalog, FieldType, SchemaDescriptor, StorageHandle, TableId};
use std::sync::Arc;
use std::thread;

#[derive(Debug)]
struct MemoryHandle {
    id: TableId,
    schema: Arc<SchemaDescriptor>,
}

impl StorageHandle for MemoryHandle {
    fn id(&self) -> TableId {
        self.id
    }

    fn schema(&self) -> Arc<SchemaDescriptor> {
        self.schema.clone()
    }
}

fn memory_handle(id: u32) -> Arc<dyn StorageHandle> {
    Arc::new(MemoryHandle {
        id: TableId(id),
        schema: Arc::new(SchemaDescriptor::unnamed(vec![FieldType::Int]).unwrap()),
    })
}

const THREADS: u32 = 8;
const TABLES_PER_THREAD: u32 = 250;

#[test]
fn test_concurrent_distinct_registrations() {
    let catalog = Arc::new(Catalog::new());

    let workers: Vec<_> = (0..THREADS)
        .map(|t| {
            let catalog = catalog.clone();
            thread::spawn(move || {
                for i in 0..TABLES_PER_THREAD {
                    let id = t * TABLES_PER_THREAD + i;
                    catalog
                        .add_table(memory_handle(id), format!("t{}_{}", t, i), "")
                        .unwrap();
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(catalog.len(), (THREADS * TABLES_PER_THREAD) as usize);
    for t in 0..THREADS {
        for i in 0..TABLES_PER_THREAD {
            let name = format!("t{}_{}", t, i);
            let id = catalog.get_table_id(&name).unwrap();
            assert_eq!(id, TableId(t * TABLES_PER_THREAD + i));
            assert_eq!(catalog.get_table_name(id).unwrap(), name);
        }
    }
}

#[test]
fn test_readers_during_writes() {
    let catalog = Arc::new(Catalog::new());
    catalog.add_table(memory_handle(0), "base", "").unwrap();

    let writer = {
        let catalog = catalog.clone();
        thread::spawn(move || {
            for i in 1..=500 {
                catalog
                    .add_named_table(memory_handle(i), format!("w{}", i))
                    .unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let catalog = catalog.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    let id = catalog.get_table_id("base").unwrap();
                    assert_eq!(catalog.get_tuple_desc(id).unwrap().num_fields(), 1);
                    // Snapshot iteration never observes a half-registered table
                    for id in catalog.table_ids() {
                        let _ = catalog.get_table_name(id);
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(catalog.len(), 501);
}
