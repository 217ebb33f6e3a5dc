mod speed;
mod state;
mod view;

pub use speed::SpeedLevel;
pub use state::{Command, ResumeTarget, SimulationState};
pub use view::HudView;

use crate::{Board, CellStatus, ConfigError, LifeConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

/// Seconds a freshly generated board is shown before the first generation
/// when the engine goes straight to [`SimulationState::Running`].
pub const FRESH_BOARD_DELAY: f64 = 1.;

/// Receives every change of a cell's displayed status.
pub trait CellListener {
    fn on_cell_status_changed(&mut self, x: usize, y: usize, status: CellStatus);
}

impl<F: FnMut(usize, usize, CellStatus)> CellListener for F {
    fn on_cell_status_changed(&mut self, x: usize, y: usize, status: CellStatus) {
        self(x, y, status)
    }
}

fn notify(listener: &mut Option<Box<dyn CellListener>>, x: usize, y: usize, status: CellStatus) {
    if let Some(listener) = listener {
        listener.on_cell_status_changed(x, y, status);
    }
}

/// Conway's GoL on a torus, driven by ticks and user requests.
pub struct SimulationEngine {
    board: Board,
    state: SimulationState,
    after_generate: ResumeTarget, // Where the next `Generating` tick lands.
    after_edit: ResumeTarget,     // Where leaving edit mode lands.
    generation: u64,
    speed: SpeedLevel,
    since_last_step: f64, // Seconds accumulated while running.
    fill_rate: f64,
    rng: ChaCha8Rng,
    quit_requested: bool,
    listener: Option<Box<dyn CellListener>>,
}

impl SimulationEngine {
    /// Allocates the board; the first [`tick`](Self::tick) fills it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` does not pass
    /// [`LifeConfig::validate`].
    pub fn new(config: &LifeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let speed = SpeedLevel::new(config.speed_level)
            .ok_or(ConfigError::InvalidSpeedLevel(config.speed_level))?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let after_generate = if config.start_paused {
            ResumeTarget::Paused
        } else {
            ResumeTarget::Running
        };
        info!(
            width = config.width,
            height = config.height,
            seed = ?config.seed,
            "simulation engine created"
        );
        Ok(Self {
            board: Board::blank(config.width, config.height)?,
            state: SimulationState::Generating,
            after_generate,
            after_edit: ResumeTarget::Paused,
            generation: 0,
            speed,
            since_last_step: 0.,
            fill_rate: config.fill_rate,
            rng,
            quit_requested: false,
            listener: None,
        })
    }

    pub fn with_listener(mut self, listener: impl CellListener + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    pub fn set_listener(&mut self, listener: impl CellListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn speed(&self) -> SpeedLevel {
        self.speed
    }

    pub fn speed_label(&self) -> &'static str {
        self.speed.label()
    }

    pub fn population(&self) -> usize {
        self.board.population()
    }

    /// Cells outside the board are reported dead.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.board.contains(x, y) && self.board.status(x, y).is_alive()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn hud(&self) -> HudView {
        HudView::new(self)
    }

    fn transition(&mut self, to: SimulationState) {
        info!(from = ?self.state, to = ?to, generation = self.generation, "state transition");
        self.state = to;
    }

    /// Advances the state machine by `dt` seconds.
    ///
    /// Negative or non-finite `dt` values are dropped so they cannot stall
    /// the accumulator.
    pub fn tick(&mut self, dt: f64) {
        if !(dt.is_finite() && dt >= 0.) {
            debug!(dt, "tick with invalid frame time ignored");
            return;
        }
        match self.state {
            SimulationState::Generating => self.generate(),
            SimulationState::Running => {
                self.since_last_step += dt;
                if self.since_last_step > self.speed.interval() {
                    // leftover time is dropped, not carried over
                    self.since_last_step = 0.;
                    self.step();
                }
            }
            SimulationState::EditMode | SimulationState::Paused => {}
        }
    }

    fn generate(&mut self) {
        self.generation = 0;
        self.board.randomize(&mut self.rng, self.fill_rate);
        self.notify_all();
        self.board.compute_next();

        let target = self.after_generate;
        if target == ResumeTarget::Paused {
            self.after_generate = ResumeTarget::Running;
        } else {
            self.since_last_step = -FRESH_BOARD_DELAY;
        }
        self.transition(target.into());
    }

    /// One generation: commit the staged statuses, then stage the next ones.
    fn step(&mut self) {
        let listener = &mut self.listener;
        let changed = self
            .board
            .commit(|x, y, status| notify(listener, x, y, status));
        self.board.compute_next();
        self.generation += 1;
        trace!(generation = self.generation, changed, "generation computed");
    }

    fn notify_all(&mut self) {
        if let Some(listener) = &mut self.listener {
            for (x, y, status) in self.board.iter() {
                listener.on_cell_status_changed(x, y, status);
            }
        }
    }

    fn ignored(&self, request: &str) {
        debug!(request, state = ?self.state, "request ignored");
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::ToggleEditMode => self.request_toggle_edit_mode(),
            Command::ClearAll => self.request_clear_all(),
            Command::Reset => self.request_reset(),
            Command::SpeedUp => self.request_speed_up(),
            Command::SpeedDown => self.request_speed_down(),
            Command::CellClick { x, y } => self.request_cell_click(x, y),
            Command::PauseToggle => self.request_pause_toggle(),
            Command::Quit => self.request_quit(),
        }
    }

    pub fn request_toggle_edit_mode(&mut self) {
        match self.state {
            SimulationState::Running => {
                self.after_edit = ResumeTarget::Running;
                self.transition(SimulationState::EditMode);
            }
            SimulationState::Paused => {
                self.after_edit = ResumeTarget::Paused;
                self.transition(SimulationState::EditMode);
            }
            SimulationState::EditMode => {
                // manual edits must be reflected in what runs next
                self.board.compute_next();
                self.transition(self.after_edit.into());
            }
            SimulationState::Generating => self.ignored("toggle edit mode"),
        }
    }

    /// Kills every cell. Only valid in edit mode.
    pub fn request_clear_all(&mut self) {
        if self.state != SimulationState::EditMode {
            return self.ignored("clear all");
        }
        self.board.clear();
        self.notify_all();
        info!("board cleared");
    }

    pub fn request_reset(&mut self) {
        if self.state == SimulationState::Generating {
            return self.ignored("reset");
        }
        self.after_generate = if self.state == SimulationState::Paused {
            ResumeTarget::Paused
        } else {
            ResumeTarget::Running
        };
        self.transition(SimulationState::Generating);
    }

    pub fn request_speed_up(&mut self) {
        self.change_speed(self.speed.faster());
    }

    pub fn request_speed_down(&mut self) {
        self.change_speed(self.speed.slower());
    }

    fn change_speed(&mut self, speed: SpeedLevel) {
        if self.state == SimulationState::Generating {
            return self.ignored("change speed");
        }
        if speed != self.speed {
            debug!(from = %self.speed, to = %speed, "speed changed");
            self.speed = speed;
        }
    }

    /// Toggles the cell under the world point `(world_x, world_y)`.
    ///
    /// Cell `(i, j)` covers `[i - 0.5, i + 0.5)` on each axis. Only valid in
    /// edit mode; points outside the board are ignored.
    pub fn request_cell_click(&mut self, world_x: f64, world_y: f64) {
        if self.state != SimulationState::EditMode {
            return self.ignored("cell click");
        }
        let to_cell = |coord: f64| {
            let cell = (coord + 0.5).floor();
            // `as` saturates, so huge values still land outside the board
            coord.is_finite().then_some(cell as i64)
        };
        let Some((x, y)) = to_cell(world_x)
            .zip(to_cell(world_y))
            .and_then(|(x, y)| self.board.checked_coords(x, y))
        else {
            return self.ignored("cell click outside the board");
        };
        let status = self.board.status(x, y).toggled();
        self.board.set_status(x, y, status);
        notify(&mut self.listener, x, y, status);
    }

    /// Sets a single cell directly. Only valid in edit mode.
    ///
    /// Returns `false` if the request was ignored.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) -> bool {
        if self.state != SimulationState::EditMode {
            self.ignored("set cell");
            return false;
        }
        if !self.board.contains(x, y) {
            self.ignored("set cell outside the board");
            return false;
        }
        let status = CellStatus::from(alive);
        if self.board.set_status(x, y, status) {
            notify(&mut self.listener, x, y, status);
        }
        true
    }

    pub fn request_pause_toggle(&mut self) {
        match self.state {
            SimulationState::Running => self.transition(SimulationState::Paused),
            SimulationState::Paused => self.transition(SimulationState::Running),
            SimulationState::EditMode | SimulationState::Generating => {
                self.ignored("pause toggle")
            }
        }
    }

    pub fn request_quit(&mut self) {
        info!(generation = self.generation, "quit requested");
        self.quit_requested = true;
    }
}
