#![forbid(unsafe_code)]
//! Writes shell completions and the `dirtree(1)` man page.
//!
//! Usage: `generate-assets [OUT_DIR]` (default `target/assets`).

use anyhow::Context;
use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use dirtree::cli::Args;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_OUT_DIR: &str = "target/assets";

// PowerShell and Elvish included since /F and /A make the tool usable from Windows shells
const SHELLS: [Shell; 5] = [
    Shell::Bash,
    Shell::Zsh,
    Shell::Fish,
    Shell::PowerShell,
    Shell::Elvish,
];

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

    write_completions(&out_dir.join("completions"))?;
    let man_page = write_man_page(&out_dir.join("man").join("man1"))?;

    eprintln!(
        "completions in {}, man page at {}",
        out_dir.join("completions").display(),
        man_page.display()
    );
    Ok(())
}

fn write_completions(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    let mut cmd = Args::command();
    for shell in SHELLS {
        generate_to(shell, &mut cmd, "dirtree", dir)
            .with_context(|| format!("failed to write {shell} completions"))?;
    }
    Ok(())
}

fn write_man_page(dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    let mut buffer = Vec::new();
    Man::new(Args::command()).render(&mut buffer)?;
    let path = dir.join("dirtree.1");
    fs::write(&path, buffer).with_context(|| format!("{}: cannot write", path.display()))?;
    Ok(path)
}
