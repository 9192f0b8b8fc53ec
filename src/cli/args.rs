use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::commands;

/// Entry point for the `mindset` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "mindset",
    about = "Edit Mindcraft settings.js files without disturbing the rest of the file",
    version,
    long_about = None
)]
pub struct Cli {
    /// Optional subcommand (e.g., `list`, `set`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the settings.js file (default: first discovered installation)
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<PathBuf>,

    /// Enable verbose diagnostics on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan for Mindcraft installations with a settings.js
    Scan {
        /// Directories to scan (default: conventional locations)
        roots: Vec<PathBuf>,
    },

    /// Check whether a file is a usable settings file
    Check {
        /// File to probe
        path: PathBuf,
    },

    /// Show all settings grouped by category
    List {
        /// Emit machine-readable JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Show a single setting
    Get {
        key: String,
        /// Emit the value as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a setting's value and save the file
    Set { key: String, value: String },

    /// Add a value to a list setting (known alternatives are promoted)
    Add { key: String, value: String },

    /// Remove a value from a list setting
    Remove { key: String, value: String },

    /// Show the commented-out alternatives recorded for a list setting
    Alternatives { key: String },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        commands::run(self)
    }
}
