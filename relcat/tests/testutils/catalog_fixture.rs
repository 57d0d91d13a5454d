//! Catalog fixture for RelCat integration tests
//!
//! Writes descriptor files into an isolated temporary directory and loads
//! them into a fresh catalog through the public API only.

use relcat::{Catalog, CatalogResult, TableId};
use std::path::{Path, PathBuf};

pub struct CatalogFixture {
    catalog: Catalog,
    temp_dir: tempfile::TempDir,
}

impl CatalogFixture {
    /// Create a fixture with an empty catalog
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            catalog: Catalog::new(),
            temp_dir: tempfile::tempdir()?,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `contents` to `file_name` inside the fixture directory
    pub fn write_descriptor(
        &self,
        file_name: &str,
        contents: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.temp_dir.path().join(file_name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write a descriptor file and load it
    pub fn load(&self, contents: &str) -> CatalogResult<Vec<TableId>> {
        let path = self
            .write_descriptor("catalog.txt", contents)
            .expect("Failed to write descriptor file");
        self.catalog.load_schema(path)
    }
}
