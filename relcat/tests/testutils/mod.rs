//! Test utilities for RelCat integration tests

pub mod catalog_fixture;
