//! Terminal-oriented text board renderer.
//!
//! Two characters per square: color letter (`w`, `b`, `g`) and piece letter.
//! Empty squares print as `..`, holes in the board as blanks.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board top row first, with row numbers on the left.
pub fn render_game_state(topology: &BoardTopology, game_state: &GameState) -> String {
    let mut out = String::new();

    for y in (0..topology.height()).rev() {
        out.push_str(&format!("{y:>2} "));
        for x in 0..topology.width() {
            match topology.id_at(Coord::new(x, y)) {
                Some(id) => match game_state.piece_at(id) {
                    Some(piece) => {
                        out.push(piece.color.letter());
                        out.push(piece.kind.letter());
                    }
                    None => out.push_str(".."),
                },
                None => out.push_str("  "),
            }
            if x + 1 < topology.width() {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str("   ");
    for x in 0..topology.width() {
        out.push_str(&format!("{x:<2}"));
        if x + 1 < topology.width() {
            out.push(' ');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_rows() {
        let topology = BoardTopology::standard().expect("standard board should build");
        let state = GameState::new_game(&topology).expect("standard setup");
        let rendered = render_game_state(&topology, &state);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], " 7 bR bN bB bQ bK bB bN bR .. .. .. ..");
        assert_eq!(lines[5], " 2 gR gP .. .. .. .. .. .. .. .. gP gK");
        assert_eq!(lines[7], " 0 wR wN wB wQ wK wB wN wR .. .. .. ..");
        assert!(lines[8].starts_with("   0  1  2"));
    }
}
