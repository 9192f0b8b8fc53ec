mod catalog;
mod cli;
mod discovery;
mod document;
mod error;
mod scan;
mod text;
mod value;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.run()
}
