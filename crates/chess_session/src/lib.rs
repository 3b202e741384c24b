// Click-driven game session on top of the rules
pub mod config;
pub mod session;

pub use config::GameConfig;
pub use session::{ClickOutcome, GameSession, GameStatus};
