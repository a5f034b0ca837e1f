use clap::Parser;
use helpdesk::core::config::{self, CliOverrides};
use helpdesk::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "helpdesk", about = "Terminal helpdesk ticket manager")]
struct Args {
    /// Directory holding the persisted ticket store
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Storage key the ticket list is saved under
    #[arg(short, long)]
    key: Option<String>,

    /// Alternate config file (defaults to ~/.helpdesk/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config errors can't be logged yet, so hold on to them until the logger exists
    let (file_config, config_error) = match config::load_config(args.config.as_deref()) {
        Ok(c) => (c, None),
        Err(e) => (config::HelpdeskConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            data_dir: args.data_dir,
            storage_key: args.key,
        },
    );

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(parent) = resolved.log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "Helpdesk starting up (data dir: {}, key: {})",
        resolved.data_dir.display(),
        resolved.storage_key
    );

    tui::run(resolved)
}
