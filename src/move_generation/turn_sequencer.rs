//! Turn rotation over the surviving colors.

use std::collections::BTreeSet;

use crate::game_state::chess_types::Color;

/// Next color after `active` in the rotation that is not eliminated.
///
/// The full cycle is tried, the last candidate being `active` itself, so a
/// lone survivor keeps the move. If every color is eliminated `active` is
/// returned unchanged.
pub fn next_active_color(active: Color, eliminated: &BTreeSet<Color>) -> Color {
    let mut candidate = active;
    for _ in 0..Color::ROTATION.len() {
        candidate = candidate.next();
        if !eliminated.contains(&candidate) {
            return candidate;
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(colors: &[Color]) -> BTreeSet<Color> {
        colors.iter().copied().collect()
    }

    #[test]
    fn plain_rotation() {
        let none = set(&[]);
        assert_eq!(next_active_color(Color::White, &none), Color::Black);
        assert_eq!(next_active_color(Color::Black, &none), Color::Gold);
        assert_eq!(next_active_color(Color::Gold, &none), Color::White);
    }

    #[test]
    fn eliminated_colors_are_skipped() {
        let black_out = set(&[Color::Black]);
        assert_eq!(next_active_color(Color::White, &black_out), Color::Gold);
        assert_eq!(next_active_color(Color::Gold, &black_out), Color::White);
    }

    #[test]
    fn sole_survivor_keeps_moving() {
        let two_out = set(&[Color::White, Color::Gold]);
        assert_eq!(next_active_color(Color::Black, &two_out), Color::Black);
        // The survivor also takes over from a color eliminated on this move.
        assert_eq!(next_active_color(Color::Gold, &two_out), Color::Black);
    }

    #[test]
    fn everyone_eliminated_leaves_active_unchanged() {
        let all = set(&Color::ROTATION);
        assert_eq!(next_active_color(Color::Gold, &all), Color::Gold);
    }
}
