//! Keyboard input mapping

/// What a key does in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Up,
    Down,
    Restart,
    None,
}

/// Map a `KeyboardEvent.key` value to an action
pub fn classify(key: &str) -> KeyAction {
    match key {
        "w" | "W" | "ArrowUp" => KeyAction::Up,
        "s" | "S" | "ArrowDown" => KeyAction::Down,
        "r" | "R" => KeyAction::Restart,
        _ => KeyAction::None,
    }
}

/// Arrow keys would scroll the page; the host should suppress their default
pub fn suppresses_default(key: &str) -> bool {
    matches!(key, "ArrowUp" | "ArrowDown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("w"), KeyAction::Up);
        assert_eq!(classify("W"), KeyAction::Up);
        assert_eq!(classify("ArrowUp"), KeyAction::Up);
        assert_eq!(classify("s"), KeyAction::Down);
        assert_eq!(classify("ArrowDown"), KeyAction::Down);
        assert_eq!(classify("R"), KeyAction::Restart);
        assert_eq!(classify("Enter"), KeyAction::None);
        assert_eq!(classify("ArrowLeft"), KeyAction::None);
    }

    #[test]
    fn test_only_vertical_arrows_suppressed() {
        assert!(suppresses_default("ArrowUp"));
        assert!(suppresses_default("ArrowDown"));
        assert!(!suppresses_default("w"));
        assert!(!suppresses_default("ArrowLeft"));
    }
}
