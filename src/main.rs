use clap::Parser;
use log::info;

use crate::app::App;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::storage::JsonStorage;

mod app;
mod cli;
mod config;
mod error;
mod logging;
mod storage;
mod ui;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg: Config = confy::load("tsugi", None)?;
    let store_path = cli.file.unwrap_or_else(|| cfg.store_path());

    // File logging is best-effort; the app works without it. The handle
    // must outlive the TUI loop, dropping it stops the logger.
    let logger = logging::init(&cfg.log_dir());
    if let Err(e) = &logger {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    info!(
        "starting tsugi v{} with store file {}",
        env!("CARGO_PKG_VERSION"),
        store_path.display()
    );

    let mut app = App::new(JsonStorage::new(store_path));
    app::run(&mut app)?;

    info!("exiting with {} task(s)", app.store.len());
    Ok(())
}
