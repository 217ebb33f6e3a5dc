#[cfg(test)]
mod tests {
    use life_editor::{
        CellStatus, Command, LifeConfig, SimulationEngine, SimulationState, FRESH_BOARD_DELAY,
    };
    use std::{cell::RefCell, rc::Rc};

    const CONFIG: &str = "
width: 12
height: 8
fill_rate: 0.25
seed: 7
speed_level: 2
start_paused: true
";

    #[test]
    fn test_engine_from_yaml() {
        let config = LifeConfig::parse(CONFIG).unwrap();
        let mut engine = SimulationEngine::new(&config).unwrap();
        assert_eq!(engine.board().size(), (12, 8));
        assert_eq!(engine.speed_label(), "Faster");

        engine.tick(0.);
        assert_eq!(engine.state(), SimulationState::Paused);

        // same seed, same board
        let mut again = SimulationEngine::new(&config).unwrap();
        again.tick(0.);
        assert_eq!(engine.board(), again.board());
    }

    #[test]
    fn test_session() {
        let config = LifeConfig::parse(CONFIG).unwrap();
        let painted = Rc::new(RefCell::new(vec![CellStatus::Dead; 12 * 8]));
        let sink = Rc::clone(&painted);
        let mut engine = SimulationEngine::new(&config).unwrap().with_listener(
            move |x: usize, y: usize, status: CellStatus| {
                sink.borrow_mut()[x + y * 12] = status;
            },
        );

        let in_sync = |engine: &SimulationEngine| {
            engine
                .board()
                .iter()
                .all(|(x, y, s)| painted.borrow()[x + y * 12] == s)
        };

        engine.tick(0.);
        assert!(in_sync(&engine));

        // draw a glider by hand
        engine.apply(Command::ToggleEditMode);
        engine.apply(Command::ClearAll);
        for (x, y) in [(1., 0.), (2., 1.), (0., 2.), (1., 2.), (2., 2.)] {
            engine.apply(Command::CellClick { x, y });
        }
        engine.apply(Command::ToggleEditMode);
        assert_eq!(engine.state(), SimulationState::Paused);
        assert_eq!(engine.population(), 5);
        assert!(in_sync(&engine));

        engine.apply(Command::PauseToggle);
        for _ in 0..40 {
            engine.tick(0.1);
            assert!(in_sync(&engine));
        }
        assert_eq!(engine.generation(), 40);
        assert_eq!(engine.population(), 5);

        // reset while running comes back running, after a short delay
        engine.apply(Command::Reset);
        engine.tick(0.);
        assert_eq!(engine.state(), SimulationState::Running);
        assert_eq!(engine.generation(), 0);
        assert!(in_sync(&engine));
        engine.tick(FRESH_BOARD_DELAY);
        assert_eq!(engine.generation(), 0);
        engine.tick(0.1);
        assert_eq!(engine.generation(), 1);
        assert!(in_sync(&engine));

        engine.apply(Command::Quit);
        assert!(engine.quit_requested());
    }
}
