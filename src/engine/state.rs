/// Lifecycle of the simulation. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SimulationState {
    /// A fresh random board is built on the next tick.
    Generating,
    /// Generations are frozen and cells can be toggled by hand.
    EditMode,
    /// Generations advance at the current speed.
    Running,
    Paused,
}

/// State to return to once a transient state (generating, editing) is done.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResumeTarget {
    Running,
    Paused,
}

impl From<ResumeTarget> for SimulationState {
    fn from(target: ResumeTarget) -> Self {
        match target {
            ResumeTarget::Running => Self::Running,
            ResumeTarget::Paused => Self::Paused,
        }
    }
}

/// Decoded user input, handed to [`SimulationEngine::apply`](super::SimulationEngine::apply).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    ToggleEditMode,
    ClearAll,
    Reset,
    SpeedUp,
    SpeedDown,
    /// World coordinates; cell `(i, j)` is centred on `(i as f64, j as f64)`.
    CellClick { x: f64, y: f64 },
    PauseToggle,
    Quit,
}
