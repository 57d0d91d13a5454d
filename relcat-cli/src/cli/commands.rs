// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Inspect RelCat catalog descriptor files
#[derive(Parser, Debug)]
#[command(
    name = "relcat",
    version,
    about = "Inspect and validate RelCat catalog descriptor files"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<log::Level>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print version information
    Version,

    /// List every table defined in a descriptor file
    Tables {
        #[command(flatten)]
        source: CatalogSource,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show the fields of one table
    Describe {
        #[command(flatten)]
        source: CatalogSource,

        /// Table name
        table: String,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Validate a descriptor file without printing its tables
    Check {
        #[command(flatten)]
        source: CatalogSource,
    },
}

/// Where the catalog comes from and how to load it
#[derive(Args, Debug)]
pub struct CatalogSource {
    /// Catalog descriptor file
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Catalog configuration file (JSON)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Data file extension, overrides the configuration file
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
