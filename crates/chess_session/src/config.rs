use chess_core::STARTING_FEN;

/// How a new game is set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board description handed to `Position::load`.
    pub start_fen: String,
    /// Start with the board flipped (Black at the bottom).
    pub flipped: bool,
}

impl GameConfig {
    /// Reads `CHESS_START_FEN` and `CHESS_FLIPPED`, falling back to the
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            start_fen: lookup("CHESS_START_FEN")
                .filter(|fen| !fen.trim().is_empty())
                .unwrap_or(defaults.start_fen),
            flipped: lookup("CHESS_FLIPPED")
                .and_then(|value| parse_flag(&value))
                .unwrap_or(defaults.flipped),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_fen: STARTING_FEN.to_string(),
            flipped: false,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
