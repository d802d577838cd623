//! mdx-new - next numbered MDX document from the clipboard
//!
//! Copies a title, runs `mdx-new intro`, and gets `NNN-intro.mdx` with the
//! title in its front matter plus a follow-up prompt on the clipboard.

mod config;
mod error;
mod models;
mod services;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::services::{Created, FileCreator, SystemClipboard};

/// mdx-new - create the next numbered .mdx file titled from the clipboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name part of the new file (e.g. "intro" gives 001-intro.mdx)
    name: String,

    /// Directory to number and write into (default: current directory)
    #[arg(short = 'C', long)]
    dir: Option<PathBuf>,

    /// Overwrite a file that already has the computed name
    #[arg(short, long)]
    force: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Config file path (default: ~/.config/mdx-new/config.toml)
    #[arg(short, long)]
    config: Option<String>,
}

/// Exit status for arguments clap rejected.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match usage_failure(&e) {
            Some((usage, code)) => {
                // Usage goes to stdout, like every other message of this tool
                print!("{}", usage);
                return ExitCode::from(code);
            }
            None => e.exit(),
        },
    };

    // Set up logging
    let filter = if args.debug {
        "mdx_new=debug,info"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(args) {
        Ok(created) => {
            println!("{}", report(&created));
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", failure(&e));
            ExitCode::FAILURE
        }
    }
}

/// Usage text and exit status for a rejected command line.
///
/// `None` for help and version requests, which clap prints and exits on.
fn usage_failure(err: &clap::Error) -> Option<(String, u8)> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some((err.render().to_string(), EXIT_USAGE)),
    }
}

/// The two confirmation lines of a successful run.
fn report(created: &Created) -> String {
    format!(
        "✅ Created file: {}\n📋 Copied to clipboard: {}",
        created.file_name, created.clipboard_text
    )
}

/// Single line describing a failed run, cause chain included.
fn failure(err: &anyhow::Error) -> String {
    format!("❌ {:#}", err)
}

fn run(args: Args) -> Result<Created> {
    let mut config = config::Config::load(args.config.as_deref())?;

    if args.force {
        config.files.overwrite = true;
    }

    let dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("could not determine current directory")?,
    };

    let mut clipboard = SystemClipboard::new();
    let created = FileCreator::new(dir, &config).create(&args.name, &mut clipboard)?;
    Ok(created)
}
