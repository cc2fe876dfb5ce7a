use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use log::info;

use pixeltodo::config::Config;
use pixeltodo::logger;
use pixeltodo::storage::LocalStorage;
use pixeltodo::ui::{self, AppComponent};

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    if let Some(arg) = args.next() {
        match arg.as_str() {
            "--generate-config" => {
                let path = match args.next() {
                    Some(path) => PathBuf::from(path),
                    None => Config::get_default_config_path()?,
                };
                return Config::generate_default_config(path);
            }
            "-h" | "--help" => {
                println!("Usage: pixeltodo [--generate-config [PATH]]");
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {other}");
                eprintln!("Usage: pixeltodo [--generate-config [PATH]]");
                std::process::exit(2);
            }
        }
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    // Storage is required before the terminal is taken over
    let database_path = config.storage.resolve_database_path()?;
    let storage = match LocalStorage::open(&database_path).await {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("Error: storage unavailable: {e:#}");
            std::process::exit(1);
        }
    };
    info!("Opened database at {}", database_path.display());

    let mut app = AppComponent::new(Arc::new(storage), &config.ui);
    if let Err(e) = app.load().await {
        eprintln!("Error: failed to load goals: {e}");
        std::process::exit(1);
    }

    ui::run_app(app, &config.ui).await
}
