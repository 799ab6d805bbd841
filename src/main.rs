mod app;
mod bootstrap;
mod components;
mod config;
mod controller;
mod error;
mod store;
mod theme;
mod view_state;

use log::{error, warn};

use config::ThemeConfig;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = web_sys::window()
        .and_then(|w| w.document())
        .map(|doc| config::load_from_document(&doc));
    let (config, config_error) = match loaded {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (ThemeConfig::default(), Some(e)),
        None => (ThemeConfig::default(), None),
    };

    let _ = console_log::init_with_level(config.log_level());
    if let Some(e) = config_error {
        warn!("{}; using default theme settings", e);
    }

    if let Err(e) = bootstrap::start(config) {
        error!("Theme switch failed to start: {}", e);
    }
}
