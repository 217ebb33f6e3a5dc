use life_editor::{init_logging, LifeConfig, SimulationEngine, SimulationState};
use std::time::Instant;

const SIDE: usize = 1024;
const GENERATIONS: u64 = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("warn");

    let config = LifeConfig {
        width: SIDE,
        height: SIDE,
        fill_rate: 0.3,
        seed: Some(42),
        speed_level: 1,
        start_paused: false,
        ..LifeConfig::default()
    };

    let timer = Instant::now();
    let mut engine = SimulationEngine::new(&config)?;
    engine.tick(0.);
    assert_eq!(engine.state(), SimulationState::Running);
    println!("Time to generate {SIDE}x{SIDE} board: {:?}", timer.elapsed());

    // get past the pause that follows a fresh board
    engine.tick(life_editor::FRESH_BOARD_DELAY);

    let timer = Instant::now();
    while engine.generation() < GENERATIONS {
        engine.tick(1.);
    }
    let elapsed = timer.elapsed();
    println!(
        "Time on {GENERATIONS} generations: {:?} ({:?} per generation), population {}",
        elapsed,
        elapsed / GENERATIONS as u32,
        engine.population()
    );
    Ok(())
}
