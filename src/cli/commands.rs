use std::path::PathBuf;

use anyhow::Result;
use colored::*;

use crate::discovery::{default_candidates, discover, is_candidate};

use super::args::{Cli, Command};
use super::edit;
use super::session::EditSession;
use super::show;

pub(crate) fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        show_welcome_message();
        return Ok(());
    };

    match command {
        Command::Scan { roots } => handle_scan(roots, cli.verbose),
        Command::Check { path } => handle_check(path),
        Command::List { json } => {
            let session = EditSession::open(cli.file.as_deref(), cli.verbose)?;
            show::handle_list(&session, json)
        }
        Command::Get { key, json } => {
            let session = EditSession::open(cli.file.as_deref(), cli.verbose)?;
            show::handle_get(&session, &key, json)
        }
        Command::Alternatives { key } => {
            let session = EditSession::open(cli.file.as_deref(), cli.verbose)?;
            show::handle_alternatives(&session, &key)
        }
        Command::Set { key, value } => {
            let mut session = EditSession::open(cli.file.as_deref(), cli.verbose)?;
            edit::handle_set(&mut session, &key, &value)
        }
        Command::Add { key, value } => {
            let mut session = EditSession::open(cli.file.as_deref(), cli.verbose)?;
            edit::handle_add(&mut session, &key, &value)
        }
        Command::Remove { key, value } => {
            let mut session = EditSession::open(cli.file.as_deref(), cli.verbose)?;
            edit::handle_remove(&mut session, &key, &value)
        }
    }
}

fn handle_scan(roots: Vec<PathBuf>, verbose: bool) -> Result<()> {
    let roots = if roots.is_empty() {
        default_candidates()
    } else {
        roots
    };

    if verbose {
        for root in &roots {
            eprintln!("scanning {}", root.display());
        }
    }

    let found = discover(&roots);
    if found.is_empty() {
        println!("No Mindcraft settings files found in the scanned locations.");
        println!("Try `mindset scan <dir>` with your installation directory.");
        return Ok(());
    }

    println!("🔍 Found {} settings file(s):", found.len());
    for path in found {
        println!("   {}", path.display().to_string().green());
    }
    Ok(())
}

fn handle_check(path: PathBuf) -> Result<()> {
    if is_candidate(&path) {
        println!("✅ {} is a usable settings file", path.display());
        Ok(())
    } else {
        println!("❌ {} is not a usable settings file", path.display());
        std::process::exit(1);
    }
}

fn show_welcome_message() {
    println!("🧠 Welcome to mindset - Mindcraft Settings Editor!");
    println!();
    println!("📖 What mindset does:");
    println!("   • Finds and edits your Mindcraft settings.js");
    println!("   • Rewrites only the values you change");
    println!("   • Keeps comments, env-var overrides, and formatting intact");
    println!("   • Recovers commented-out profiles as ready-to-add alternatives");
    println!();
    println!("💡 How to use mindset:");
    println!("   mindset scan                           # Find Mindcraft installations");
    println!("   mindset list                           # Show all settings");
    println!("   mindset get max_messages               # Show one setting");
    println!("   mindset set max_messages 20            # Change a setting");
    println!("   mindset add profiles ./bob.json        # Add to a list setting");
    println!("   mindset remove profiles ./bob.json     # Remove from a list setting");
    println!("   mindset alternatives profiles          # Show commented-out candidates");
    println!("   mindset -f path/to/settings.js list    # Use an explicit file");
    println!();
    println!("❓ For more help: mindset --help");
}
