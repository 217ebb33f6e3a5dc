#![warn(clippy::all)]

use life_editor::{init_logging, App, Config, ConfigError, LifeConfig};
use std::path::Path;
use tracing::info;

/// Reads `life-config.yaml` from the working directory, if there is one.
fn load_config() -> Result<LifeConfig, ConfigError> {
    let path = Path::new(Config::CONFIG_FILE);
    if path.exists() {
        info!(path = %path.display(), "loading configuration");
        LifeConfig::from_file(path)
    } else {
        info!("no configuration file, using defaults");
        Ok(LifeConfig::default())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use eframe::egui::{vec2, ViewportBuilder};

    init_logging("info");

    let config = load_config()?;
    info!(
        width = config.width,
        height = config.height,
        fill_rate = config.fill_rate,
        speed_level = config.speed_level,
        "configuration loaded"
    );

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1280., 800.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, &config)?))),
    )?;
    Ok(())
}
