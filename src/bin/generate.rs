//! Spritesheet generator
//!
//! Regenerates the placeholder spritesheets in place. No arguments needed.
//!
//! Usage:
//!   cargo run --bin generate                    # Regenerate every sheet
//!   cargo run --bin generate sheet water steam  # Regenerate some sheets
//!   cargo run --bin generate list               # Show sheet layouts
//!   cargo run --bin generate -- --out-dir /tmp/sheets --checker

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use city_sprites::constants::{DEFAULT_OUT_DIR, OUT_DIR_ENV};
use city_sprites::generate::{self, GenerateOptions, Sheet};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate placeholder city spritesheets", long_about = None)]
struct Args {
    /// Directory the sheets are written to
    #[arg(long, global = true, env = OUT_DIR_ENV, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Paint a checkerboard under the sheets for previewing
    #[arg(long, global = true)]
    checker: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Regenerate every sheet (default)
    All,
    /// Regenerate only the named sheets
    Sheet {
        #[arg(required = true, value_parser = parse_sheet)]
        names: Vec<Sheet>,
    },
    /// Print sheet sizes and frame rectangles
    List,
}

fn parse_sheet(name: &str) -> Result<Sheet, String> {
    Sheet::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = Sheet::ALL.iter().map(|s| s.name()).collect();
        format!("unknown sheet '{}', expected one of: {}", name, known.join(", "))
    })
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let sheets = match args.command.unwrap_or(Command::All) {
        Command::All => Sheet::ALL.to_vec(),
        Command::Sheet { names } => names,
        Command::List => {
            print!("{}", generate::layout_report());
            return Ok(());
        }
    };

    let options = GenerateOptions {
        out_dir: args.out_dir,
        sheets,
        checker: args.checker,
    };
    generate::run(&options)?;

    println!("Spritesheets regenerated in: {}", options.out_dir.display());
    Ok(())
}
