#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use edupath::client::App;
use edupath::domain::config::{AppConfig, LoggingConfig};
use edupath::kernel::config::load_config;
use edupath::kernel::haptics::{Haptics, WebviewHaptics};
use edupath_desktop::DesktopApp;
use edupath_logger::{Logger, LoggerError};

fn main() -> anyhow::Result<()> {
    let config: AppConfig = load_config(None::<&str>).context("Failed to load configuration")?;
    let _logger = init_logger(&config.logging)?;

    let haptics =
        if config.window.haptics { Haptics::select(WebviewHaptics) } else { Haptics::disabled() };
    let window = DesktopApp::from_config(&config.window);
    let platform = edupath::init(config, haptics).context("Failed to initialize platform")?;

    window.launch(platform, App);
    Ok(())
}

fn init_logger(config: &LoggingConfig) -> Result<Logger, LoggerError> {
    let builder =
        Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).env_filter(&config.level);

    match &config.directory {
        Some(directory) => builder.path(directory).json(config.json).init(),
        None => builder.init(),
    }
}
