use super::{SimulationEngine, SimulationState};

/// What the on-screen displays show, derived from the engine on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HudView {
    pub state: SimulationState,
    pub generation: u64,
    pub speed_label: &'static str,
    pub pause_menu_visible: bool,
    pub edit_label_visible: bool,
}

impl HudView {
    pub fn new(engine: &SimulationEngine) -> Self {
        let state = engine.state();
        Self {
            state,
            generation: engine.generation(),
            speed_label: engine.speed_label(),
            pause_menu_visible: state == SimulationState::Paused,
            edit_label_visible: state == SimulationState::EditMode,
        }
    }

    pub fn speed_text(&self) -> String {
        format!("Simulation Speed: {}", self.speed_label)
    }

    pub fn generation_text(&self) -> String {
        format!("Generation: {}", self.generation)
    }
}
