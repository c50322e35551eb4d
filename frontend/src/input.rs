use shared::shared_2048_game::Direction;

/// Arrow keys, WASD, IJKL and the numpad all steer the board.
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" | "i" | "I" | "8" | "Numpad8" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" | "k" | "K" | "2" | "Numpad2" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" | "j" | "J" | "4" | "Numpad4" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" | "l" | "L" | "6" | "Numpad6" => Some(Direction::Right),
        _ => None,
    }
}

/// Maps a touch delta (screen coordinates, y grows downward) to a direction.
/// The dominant axis wins; swipes shorter than `min_distance` are ignored.
pub fn direction_for_swipe(delta_x: f64, delta_y: f64, min_distance: f64) -> Option<Direction> {
    if delta_x.abs() > delta_y.abs() {
        if delta_x > min_distance {
            Some(Direction::Right)
        } else if delta_x < -min_distance {
            Some(Direction::Left)
        } else {
            None
        }
    } else if delta_y > min_distance {
        Some(Direction::Down)
    } else if delta_y < -min_distance {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Drops inputs arriving faster than the cooldown.
#[derive(Debug, Clone, Copy)]
pub struct MoveThrottle {
    cooldown_ms: f64,
    last_accepted: Option<f64>,
}

impl MoveThrottle {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms,
            last_accepted: None,
        }
    }

    /// Records `now` and returns true when the input may go through.
    pub fn try_accept(&mut self, now: f64) -> bool {
        match self.last_accepted {
            Some(last) if now - last < self.cooldown_ms => false,
            _ => {
                self.last_accepted = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_directions() {
        assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(direction_for_key("a"), Some(Direction::Left));
        assert_eq!(direction_for_key("K"), Some(Direction::Down));
        assert_eq!(direction_for_key("Numpad6"), Some(Direction::Right));
        assert_eq!(direction_for_key("Enter"), None);
        assert_eq!(direction_for_key("q"), None);
    }

    #[test]
    fn swipe_uses_dominant_axis() {
        assert_eq!(direction_for_swipe(80.0, 20.0, 30.0), Some(Direction::Right));
        assert_eq!(direction_for_swipe(-80.0, 79.0, 30.0), Some(Direction::Left));
        assert_eq!(direction_for_swipe(10.0, 45.0, 30.0), Some(Direction::Down));
        assert_eq!(direction_for_swipe(10.0, -45.0, 30.0), Some(Direction::Up));
    }

    #[test]
    fn short_swipes_are_ignored() {
        assert_eq!(direction_for_swipe(25.0, 3.0, 30.0), None);
        assert_eq!(direction_for_swipe(0.0, -30.0, 30.0), None);
        assert_eq!(direction_for_swipe(0.0, 0.0, 30.0), None);
    }

    #[test]
    fn throttle_drops_rapid_inputs() {
        let mut throttle = MoveThrottle::new(100.0);
        assert!(throttle.try_accept(1000.0));
        assert!(!throttle.try_accept(1050.0));
        assert!(throttle.try_accept(1100.0));
        assert!(!throttle.try_accept(1199.0));
    }
}
