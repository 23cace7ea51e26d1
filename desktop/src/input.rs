use eframe::egui;
use snake_engine::game::Direction;

/// Arrow keys and WASD alias to the same four directions.
pub const KEY_BINDINGS: &[(egui::Key, Direction)] = &[
    (egui::Key::ArrowLeft, Direction::Left),
    (egui::Key::ArrowRight, Direction::Right),
    (egui::Key::ArrowUp, Direction::Up),
    (egui::Key::ArrowDown, Direction::Down),
    (egui::Key::A, Direction::Left),
    (egui::Key::D, Direction::Right),
    (egui::Key::W, Direction::Up),
    (egui::Key::S, Direction::Down),
];

pub fn direction_for_key(key: egui::Key) -> Option<Direction> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, direction)| *direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_alias() {
        assert_eq!(direction_for_key(egui::Key::ArrowLeft), Some(Direction::Left));
        assert_eq!(direction_for_key(egui::Key::A), Some(Direction::Left));
        assert_eq!(direction_for_key(egui::Key::ArrowUp), Some(Direction::Up));
        assert_eq!(direction_for_key(egui::Key::W), Some(Direction::Up));
        assert_eq!(direction_for_key(egui::Key::ArrowRight), Some(Direction::Right));
        assert_eq!(direction_for_key(egui::Key::D), Some(Direction::Right));
        assert_eq!(direction_for_key(egui::Key::ArrowDown), Some(Direction::Down));
        assert_eq!(direction_for_key(egui::Key::S), Some(Direction::Down));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(direction_for_key(egui::Key::Space), None);
        assert_eq!(direction_for_key(egui::Key::Q), None);
    }
}
