//! Basic example of driving the Tower of Hanoi engine

use hanoi_core::{format_time, Engine, ManualClock, SequenceRng};

fn print_pegs(engine: &Engine<SequenceRng, ManualClock>) {
    for (i, peg) in engine.pegs().iter().enumerate() {
        let marker = if i == engine.target_peg() { "*" } else { " " };
        println!("  {}peg {}: {:?}", marker, i + 1, peg);
    }
}

fn main() {
    // All discs on peg 1, target peg 3
    let clock = ManualClock::new(0);
    let mut engine = Engine::new(SequenceRng::new(vec![0, 1]), clock.clone());
    if let Err(rejection) = engine.set_disc_count(3) {
        println!("Could not configure discs: {}", rejection);
        return;
    }
    engine.start_game();

    println!("New game with {} discs:", engine.disc_count());
    print_pegs(&engine);

    if let Some(hint) = engine.get_hint() {
        println!("\nHint: move from peg {} to peg {}", hint.from + 1, hint.to + 1);
    }

    println!("\nTrying to move from an empty peg...");
    if let Err(rejection) = engine.make_move(1, 2) {
        println!("  refused: {}", rejection);
    }

    println!("\nPlaying the optimal solution:");
    for (from, to) in [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)] {
        clock.advance(1_500);
        match engine.make_move(from, to) {
            Ok(record) => println!("  disc {} : peg {} -> peg {}", record.disc, from + 1, to + 1),
            Err(rejection) => println!("  refused: {}", rejection),
        }
    }

    println!();
    print_pegs(&engine);
    println!("\nSolved: {}", engine.is_completed());
    println!(
        "Moves: {} (minimum {}), efficiency {}%",
        engine.move_count(),
        engine.min_moves(),
        engine.efficiency()
    );
    println!("Time: {}", format_time(engine.game_time()));

    println!("\nSnapshot as JSON:");
    match serde_json::to_string_pretty(&engine.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("failed to serialize: {}", e),
    }
}
