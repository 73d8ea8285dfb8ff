use crate::output::Destination;
use crate::tree::RenderOptions;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  dirtree .                 Directories under the current directory
  dirtree -f src            Include files
  dirtree /F /A src         Same switches, Windows style, with ASCII connectors
  dirtree -L 1 -o tree.txt  Two levels, written to tree.txt";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirtree",
    version,
    about = "Print a directory hierarchy as a tree",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Directory to display (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Show files as well as directories (also /F)
    #[arg(short = 'f', long = "files")]
    pub show_files: bool,

    /// Use ASCII characters instead of box-drawing glyphs (also /A)
    #[arg(short = 'a', long = "ascii")]
    pub ascii: bool,

    /// Write the tree to FILE instead of standard output
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Deepest level to list; 0 lists only the top-level entries
    #[arg(short = 'L', long = "level", alias = "max-depth", value_name = "N")]
    pub max_depth: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress diagnostics for unreadable directories
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_files: self.show_files,
            use_ascii: self.ascii,
            max_depth: self.max_depth,
        }
    }

    pub fn destination(&self) -> Destination {
        match &self.output {
            Some(path) => Destination::File(path.clone()),
            None => Destination::Stdout,
        }
    }

    /// Default log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Rewrite Windows `tree` style switches (`/F`, `/A`, `/?`) into their long forms.
///
/// The first element is the program name and is left untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 {
                return arg;
            }
            match arg.to_str() {
                Some("/F" | "/f") => OsString::from("--files"),
                Some("/A" | "/a") => OsString::from("--ascii"),
                Some("/?") => OsString::from("--help"),
                _ => arg,
            }
        })
        .collect()
}
