// crates/cli/src/args.rs
use clap::{Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "list_files",
    version = crate::VERSION,
    about = "List directory contents"
)]
pub struct Args {
    /// Use the long listing format (permissions, links, owner, group, size, mtime)
    #[arg(short = 'l')]
    pub long: bool,

    /// Include the `.` and `..` directory entries
    #[arg(short = 'a')]
    pub all: bool,

    /// Paths to list; defaults to the current directory
    #[arg(value_name = "PATH", value_hint = ValueHint::AnyPath)]
    pub paths: Vec<String>,
}
