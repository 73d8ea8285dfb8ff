#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use dirtree::cli::{normalize_args, Args};
use dirtree::error::TreeError;
use dirtree::output::{self, Destination};
use dirtree::tree;
use std::ffi::OsString;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        match e.downcast_ref::<TreeError>() {
            Some(tree_err) => {
                eprintln!("dirtree: {tree_err}");
                std::process::exit(tree_err.exit_code());
            }
            None => {
                eprintln!("dirtree: {e:#}");
                std::process::exit(1);
            }
        }
    }
}

fn run_app() -> Result<()> {
    let raw: Vec<OsString> = std::env::args_os().collect();

    // Bare invocation shows usage, like `--help`
    if raw.len() <= 1 {
        Args::command()
            .print_help()
            .context("failed to print usage")?;
        println!();
        return Ok(());
    }

    let args = Args::parse_from(normalize_args(raw)).validated();
    init_logging(args.log_level());

    let root = dirtree::resolve_root(&args.path)?;
    let rendering = tree::render(&root, &args.render_options());

    let destination = args.destination();
    output::write_tree(&destination, &output::header_line(&root), &rendering.lines)?;
    if let Destination::File(path) = &destination {
        info!(
            "wrote {} lines to {}",
            rendering.lines.len() + 1,
            path.display()
        );
    }

    if !args.quiet {
        for failure in &rendering.failures {
            eprintln!("dirtree: {failure}");
        }
    }
    Ok(())
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
