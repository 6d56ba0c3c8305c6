//! Perft runner for the three-player board.
//!
//! Usage:
//! `cargo run --release --bin tri_perft`
//! `cargo run --release --bin tri_perft -- --depth 3 --board board.json`

use std::time::Instant;

use tri_chess::errors::TriChessErrors;
use tri_chess::game_state::board_topology::{BoardDefinition, BoardTopology};
use tri_chess::game_state::game_state::GameState;
use tri_chess::move_generation::legal_move_generator::FastLegalMoveGenerator;
use tri_chess::move_generation::perft::perft;
use tri_chess::utils::render_game_state::render_game_state;

fn arg_value(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn load_definition() -> Result<BoardDefinition, TriChessErrors> {
    match arg_value("--board") {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| TriChessErrors::Serialization(format!("{path}: {e}")))?;
            BoardDefinition::from_json(&json)
        }
        None => Ok(BoardDefinition::standard()),
    }
}

fn main() -> Result<(), TriChessErrors> {
    let depth = arg_value("--depth")
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(2)
        .max(1);

    let definition = load_definition()?;
    let topology = BoardTopology::build(&definition)?;
    let state = GameState::new_game(&topology)?;

    println!("{}", render_game_state(&topology, &state));
    for d in 1..=depth {
        let started = Instant::now();
        let counts = perft(&FastLegalMoveGenerator, &topology, &state, d);
        println!(
            "depth={d} nodes={} captures={} promotions={} eliminations={} checks={} elapsed_ms={}",
            counts.nodes,
            counts.captures,
            counts.promotions,
            counts.eliminations,
            counts.checks,
            started.elapsed().as_millis()
        );
    }
    Ok(())
}
