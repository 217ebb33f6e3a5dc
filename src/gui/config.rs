use eframe::egui::{Color32, TextureOptions};

pub struct Config;

impl Config {
    pub const CONFIG_FILE: &'static str = "life-config.yaml";

    pub const MAX_FPS: f64 = 60.;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const HUD_GAP: f32 = 8.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const EDIT_LABEL_COLOR: Color32 = Color32::DARK_RED;
    pub const BACKGROUND_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(0xf0, 0xf0, 0xf0);
    // dead cells alternate in a checkerboard
    pub const DEAD_COLOR: Color32 = Color32::from_rgb(0x20, 0x20, 0x28);
    pub const DEAD_COLOR_ALT: Color32 = Color32::from_rgb(0x2c, 0x2c, 0x36);

    pub const TEXTURE_OPTIONS: TextureOptions = TextureOptions::NEAREST;
}
