use super::{App, Config};
use crate::{CellStatus, HudView};
use eframe::egui::{
    pos2, vec2, Align2, Color32, ColorImage, Context, Rect, RichText, Sense, Ui, Window,
};

fn cell_color(x: usize, y: usize, status: CellStatus) -> Color32 {
    match status {
        CellStatus::Alive => Config::ALIVE_COLOR,
        CellStatus::Dead if (x + y) % 2 == 0 => Config::DEAD_COLOR,
        CellStatus::Dead => Config::DEAD_COLOR_ALT,
    }
}

/// CPU-side copy of the field texture, painted cell by cell.
///
/// Texture rows run top to bottom while board rows run upwards, so row 0
/// is the last texture row.
pub struct FieldImage {
    pub(super) image: ColorImage,
    dirty: bool,
}

impl FieldImage {
    pub fn new(width: usize, height: usize) -> Self {
        let mut field = Self {
            image: ColorImage::new([width, height], Config::DEAD_COLOR),
            dirty: true,
        };
        for y in 0..height {
            for x in 0..width {
                field.paint(x, y, CellStatus::Dead);
            }
        }
        field
    }

    pub fn paint(&mut self, x: usize, y: usize, status: CellStatus) {
        let [width, height] = self.image.size;
        let idx = x + (height - 1 - y) * width;
        self.image.pixels[idx] = cell_color(x, y, status);
        self.dirty = true;
    }
}

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn draw_hud(&self, ui: &mut Ui, hud: &HudView) {
        ui.horizontal(|ui| {
            ui.label(Self::new_text(&hud.speed_text()));
            ui.add_space(Config::FRAME_MARGIN);
            ui.label(Self::new_text(&hud.generation_text()));
            ui.add_space(Config::FRAME_MARGIN);
            ui.label(Self::new_text(&format!(
                "FPS: {:3}",
                self.fps_limiter.fps().round() as u32
            )));
            if hud.edit_label_visible {
                ui.add_space(Config::FRAME_MARGIN);
                ui.label(
                    Self::new_text("EDIT MODE  (click cells, C clears, Space leaves)")
                        .color(Config::EDIT_LABEL_COLOR),
                );
            }
        });
    }

    fn draw_gol_field(&mut self, ui: &mut Ui) {
        {
            let mut field = self.field.borrow_mut();
            if std::mem::take(&mut field.dirty) {
                self.texture.set(field.image.clone(), Config::TEXTURE_OPTIONS);
            }
        }

        // largest whole-board rectangle with square cells
        let (width, height) = self.engine.board().size();
        let area = ui.available_size();
        let cell_px = (area.x / width as f32).min(area.y / height as f32).max(1.);
        let size = vec2(cell_px * width as f32, cell_px * height as f32);

        let (rect, _) = ui.allocate_exact_size(size, Sense::click());
        let uv = Rect::from_min_max(pos2(0., 0.), pos2(1., 1.));
        ui.painter().image(self.texture.id(), rect, uv, Color32::WHITE);
        self.field_rect.replace(rect);
    }

    pub(super) fn draw_pause_menu(&self, ctx: &Context) {
        let hud = self.engine.hud();
        if !hud.pause_menu_visible {
            return;
        }
        Window::new("Paused")
            .anchor(Align2::CENTER_CENTER, vec2(0., 0.))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                for line in [
                    "Esc: resume",
                    "Space: edit mode",
                    "R: new random board",
                    "+ / -: faster / slower",
                    "Q: quit",
                ] {
                    ui.label(line);
                }
            });
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let hud = self.engine.hud();
        ui.vertical(|ui| {
            self.draw_hud(ui, &hud);
            ui.add_space(Config::HUD_GAP);
            self.draw_gol_field(ui);
        });
    }
}
