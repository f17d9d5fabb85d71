// Exploration Log - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Opening the persisted planet log
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can
// use `crate::app::...`, `crate::ui::...` etc.
pub use exploration_log::app;
pub use exploration_log::platform;
pub use exploration_log::ui;
pub use exploration_log::util;

use app::log_manager::LogManager;
use app::persistence::StoragePersister;
use clap::Parser;
use platform::storage::{FileStore, KeyValueStore};
use std::path::PathBuf;

/// Exploration Log - record, edit and browse the planets you discover.
#[derive(Parser, Debug)]
#[command(name = "exploration-log", version, about)]
struct Cli {
    /// Directory holding the saved log (defaults to the platform data dir).
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,

    /// Storage key the log is saved under.
    #[arg(short = 'k', long = "storage-key")]
    storage_key: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config comes first: it may set the log level.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_path = platform_paths.config_file();
    let (config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "Exploration Log starting"
    );
    for warning in &config_warnings {
        tracing::warn!(path = %config_path.display(), error = %warning, "Config warning; using default");
    }

    // Storage location: CLI override > platform default.
    let data_dir = cli.data_dir.unwrap_or(platform_paths.data_dir);
    let storage_key = match cli.storage_key {
        Some(key) if platform::storage::is_valid_key(&key) => key,
        Some(key) => {
            tracing::warn!(
                key = %key,
                fallback = %config.storage_key,
                "Invalid --storage-key; using configured key"
            );
            config.storage_key.clone()
        }
        None => config.storage_key.clone(),
    };

    let file_store = FileStore::with_quota(data_dir, config.max_value_bytes);
    let dir = file_store.dir().to_path_buf();
    let store: Box<dyn KeyValueStore> = Box::new(file_store);
    let persister = StoragePersister::new(store, storage_key);
    tracing::info!(
        dir = %dir.display(),
        key = persister.key(),
        quota = config.max_value_bytes,
        "Opening log"
    );
    let log = LogManager::open(persister);

    let mut state = app::state::AppState::new(log, cli.debug);
    state.dark_mode = config.dark_mode;
    state.font_size = config.font_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, state.dark_mode, state.font_size);
            Ok(Box::new(gui::ExplorationLogApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Exploration Log GUI: {e}");
        std::process::exit(1);
    }
}
