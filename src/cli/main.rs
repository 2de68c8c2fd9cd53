// Copyright (C) 2023-2026 The Grug Team.
// This file is part of the grug library.

// The grug library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The grug library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the grug library. If not, see <https://www.gnu.org/licenses/>.

//! Command-line interface for the grug AST serializer.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use grug_fmt::TreeOptions;

#[derive(Parser)]
#[command(name = "grug", about = "Bidirectional JSON AST serializer for grug source files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dump a single .grug source file to JSON.
    DumpFile {
        source: PathBuf,
        output: PathBuf,
    },
    /// Apply a JSON document, producing a single source file.
    ApplyFile {
        json: PathBuf,
        output: PathBuf,
    },
    /// Dump a directory tree of .grug source files to a single JSON document.
    DumpTree {
        source_dir: PathBuf,
        output: PathBuf,
        /// Iterate directory entries in sorted (not host-filesystem) order.
        #[arg(long)]
        sorted: bool,
    },
    /// Apply a tree-shaped JSON document, reconstructing a directory tree.
    ApplyTree {
        json: PathBuf,
        output_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::DumpFile { source, output } => grug_fmt::dump_file(&source, &output),
        Command::ApplyFile { json, output } => grug_fmt::apply_file(&json, &output),
        Command::DumpTree { source_dir, output, sorted } => {
            grug_fmt::dump_tree(&source_dir, &output, TreeOptions { sorted })
        }
        Command::ApplyTree { json, output_dir } => grug_fmt::apply_tree(&json, &output_dir),
    };

    match result {
        Ok(()) => {
            println!("{}", "done".green());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "operation failed");
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
