// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! RelCat CLI entry point

use clap::Parser;
use colored::Colorize;

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else if let Some(level) = cli.log_level {
        level.to_level_filter()
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    match cli.command {
        Commands::Version => {
            println!("{} {}", "RelCat".bold().green(), relcat::VERSION);
            println!("Table catalog and tuple schema inspector");
            Ok(())
        }

        Commands::Tables { source, format } => cli::handle_tables(source, format),

        Commands::Describe {
            source,
            table,
            format,
        } => cli::handle_describe(source, table, format),

        Commands::Check { source } => cli::handle_check(source),
    }
}
