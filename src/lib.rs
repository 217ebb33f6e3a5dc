mod board;
mod cell;
mod engine;
mod gui;
mod utils;

pub use board::Board;
pub use cell::{Cell, CellStatus};
pub use engine::{
    CellListener, Command, HudView, ResumeTarget, SimulationEngine, SimulationState, SpeedLevel,
    FRESH_BOARD_DELAY,
};
pub use gui::{App, Config};
pub use utils::{init_logging, ConfigError, LifeConfig};
