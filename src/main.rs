//! tewduwu Entry Point
//!
//! Terminal shell for the hierarchical to-do list. Reads one key per line
//! from stdin ('?' lists the keys) and prints the list after every key.

mod app;
mod config;
mod error;
mod glow;
mod keymap;
mod view;

use std::io;

use app::App;
use config::AppConfig;
use error::AppResult;

fn main() {
    if let Err(e) = run() {
        // Fails when the error came before the logger was up
        let _ = rolling_logger::error(&format!("Fatal: {}", e));
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let mut config = AppConfig::load()?;
    // First argument overrides the data file
    if let Some(path) = std::env::args_os().nth(1) {
        config.data_file = path.into();
    }

    rolling_logger::init_logger(&config.log_dir, "tewduwu")?;
    log::info!("Using list file {}", config.data_file.display());

    let mut app = App::open(config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    app.run(stdin.lock(), stdout.lock())?;
    let _ = rolling_logger::info(&format!("Exiting with {} task(s)", app.list().len()));
    Ok(())
}
