use super::{Config, FieldImage, FpsLimiter};
use crate::{CellStatus, Command, ConfigError, LifeConfig, SimulationEngine};
use eframe::egui::{
    CentralPanel, Context, Frame, Key, Margin, Pos2, Rect, TextureHandle, ViewportCommand,
};
use std::{cell::RefCell, rc::Rc};
use tracing::info;

/// Converts a screen position inside `rect`, which shows a board `width`
/// cells wide, into world coordinates. Cell `(i, j)` is centred on `(i, j)`
/// and world y grows upwards, so row 0 sits at the bottom of the field.
fn screen_to_world(rect: Rect, width: usize, pos: Pos2) -> (f64, f64) {
    let cell_px = (rect.width() / width as f32) as f64;
    let x = (pos.x - rect.min.x) as f64 / cell_px - 0.5;
    let y = (rect.max.y - pos.y) as f64 / cell_px - 0.5;
    (x, y)
}

pub struct App {
    pub(super) engine: SimulationEngine, // Conway's GoL engine with its state machine.
    pub(super) field: Rc<RefCell<FieldImage>>, // Pixels kept in sync by the engine's listener.
    pub(super) texture: TextureHandle, // Texture handle of Conway's GoL field.
    pub(super) field_rect: Option<Rect>, // Part of the window displaying the field.
    pub(super) fps_limiter: FpsLimiter, // Limits the frame rate and provides the tick length.
}

impl App {
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the engine cannot be built from `config`.
    pub fn new(ctx: &Context, config: &LifeConfig) -> Result<Self, ConfigError> {
        let field = Rc::new(RefCell::new(FieldImage::new(config.width, config.height)));
        let sink = Rc::clone(&field);
        let engine = SimulationEngine::new(config)?.with_listener(
            move |x: usize, y: usize, status: CellStatus| sink.borrow_mut().paint(x, y, status),
        );
        let texture = ctx.load_texture(
            "Conway's GoL field",
            field.borrow().image.clone(),
            Config::TEXTURE_OPTIONS,
        );
        Ok(Self {
            engine,
            field,
            texture,
            field_rect: None,
            fps_limiter: FpsLimiter::new(Config::MAX_FPS),
        })
    }

    /// Decodes this frame's keyboard and mouse input.
    fn poll_input(&self, ctx: &Context) -> Vec<Command> {
        ctx.input(|input| {
            let mut commands = vec![];
            if input.pointer.primary_clicked() {
                let click = input.pointer.interact_pos().zip(self.field_rect);
                if let Some((pos, rect)) = click.filter(|(pos, rect)| rect.contains(*pos)) {
                    let (width, _) = self.engine.board().size();
                    let (x, y) = screen_to_world(rect, width, pos);
                    commands.push(Command::CellClick { x, y });
                }
            }
            let bindings = [
                (Key::Escape, Command::PauseToggle),
                (Key::Q, Command::Quit),
                (Key::C, Command::ClearAll),
                (Key::Plus, Command::SpeedUp),
                (Key::Equals, Command::SpeedUp),
                (Key::Minus, Command::SpeedDown),
                (Key::R, Command::Reset),
                (Key::Space, Command::ToggleEditMode),
            ];
            commands.extend(
                bindings
                    .into_iter()
                    .filter(|&(key, _)| input.key_pressed(key))
                    .map(|(_, command)| command),
            );
            commands
        })
    }

    fn update_engine(&mut self, ctx: &Context) {
        self.engine.tick(self.fps_limiter.last_frametime());
        for command in self.poll_input(ctx) {
            self.engine.apply(command);
        }
        if self.engine.quit_requested() {
            info!(generation = self.engine.generation(), "closing window");
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.update_engine(ctx);

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();
                self.draw(ui);
            });
        self.draw_pause_menu(ctx);

        self.fps_limiter.end_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn bottom_left_cell_is_the_origin() {
        // 4x2 board drawn with 10px cells
        let rect = Rect::from_min_max(pos2(100., 50.), pos2(140., 70.));
        let (x, y) = screen_to_world(rect, 4, pos2(105., 65.));
        assert!((x - 0.).abs() < 1e-9 && (y - 0.).abs() < 1e-9);

        let (x, y) = screen_to_world(rect, 4, pos2(135., 55.));
        assert!((x - 3.).abs() < 1e-9 && (y - 1.).abs() < 1e-9);
    }
}
