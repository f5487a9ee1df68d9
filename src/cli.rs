use std::path::PathBuf;

use clap::Parser;

/// Launcher arguments.
///
/// Every task operation happens inside the TUI; the command line only
/// selects where state lives.
#[derive(Parser)]
#[command(name = "tsugi")]
#[command(about = "A terminal todo list with category filters")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Use FILE as the task store instead of the configured location
    #[arg(long, short = 'f', value_name = "FILE")]
    pub file: Option<PathBuf>,
}
