use chess_core::{Color, Position, Result, Square};
use chess_rules::{checkers, is_in_check, is_in_checkmate, is_valid_move, legal_destinations};
use log::{debug, info};

use crate::config::GameConfig;

/// What a click did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The game is over, input no longer changes anything.
    Ignored,
    Selected(Square),
    Deselected,
    Moved { from: Square, to: Square },
    /// The selected piece may not go there; the selection is dropped.
    Rejected { from: Square, to: Square },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check.
    Check { color: Color },
    Checkmate { winner: Color },
}

/// A game driven by square clicks, the way a board UI would drive it.
///
/// The session owns the authoritative [`Position`] and only mutates it
/// through the moves the rules approve.
#[derive(Debug, Clone)]
pub struct GameSession {
    position: Position,
    winner: Option<Color>,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        let mut position = Position::from_fen(&config.start_fen);
        if config.flipped {
            position.flip();
        }
        Self::from_position(position)
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            winner: None,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Left click on `square`.
    ///
    /// Without a selection, picks up a piece of the side to move. With one,
    /// plays the move if it is legal. Either way a second click clears the
    /// selection.
    pub fn click(&mut self, square: Square) -> Result<ClickOutcome> {
        if self.is_over() {
            return Ok(ClickOutcome::Ignored);
        }

        if !square.is_on_board() {
            self.position.reset_selection();
            return Ok(ClickOutcome::Deselected);
        }

        let from = match self.position.selected() {
            Some(from) => from,
            None => return Ok(self.select(square)),
        };

        let verdict = is_valid_move(&self.position, from, square);
        self.position.reset_selection();

        if !verdict? {
            debug!("rejected {}-{}", from, square);
            return Ok(ClickOutcome::Rejected { from, to: square });
        }

        let mover = self.position.turn();
        self.position.move_piece(from, square);
        self.position.change_turn();
        info!("{} played {}-{}", mover, from, square);

        Ok(ClickOutcome::Moved { from, to: square })
    }

    fn select(&mut self, square: Square) -> ClickOutcome {
        match self.position.piece_at(square) {
            Some(piece) if piece.color == self.position.turn() => {
                self.position.set_selection(square);
                ClickOutcome::Selected(square)
            }
            _ => {
                self.position.reset_selection();
                ClickOutcome::Deselected
            }
        }
    }

    pub fn cancel(&mut self) {
        self.position.reset_selection();
    }

    pub fn flip(&mut self) {
        self.position.flip();
        self.position.reset_selection();
    }

    /// Selects `from` and clicks `to`. True if the move was played.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<bool> {
        self.position.reset_selection();
        match self.click(from)? {
            ClickOutcome::Selected(_) => {}
            _ => return Ok(false),
        }
        Ok(matches!(self.click(to)?, ClickOutcome::Moved { .. }))
    }

    pub fn hints(&self) -> Result<Vec<Square>> {
        match self.position.selected() {
            Some(from) => legal_destinations(&self.position, from),
            None => Ok(Vec::new()),
        }
    }

    /// Evaluates the board after an input event. Black being mated is
    /// looked at first; once a winner is found it sticks.
    pub fn refresh(&mut self) -> Result<GameStatus> {
        if let Some(winner) = self.winner {
            return Ok(GameStatus::Checkmate { winner });
        }

        for loser in [Color::Black, Color::White] {
            if is_in_checkmate(&self.position, loser)? {
                let winner = loser.opposite();
                info!("{} wins", winner);
                self.winner = Some(winner);
                return Ok(GameStatus::Checkmate { winner });
            }
        }

        let to_move = self.position.turn();
        if is_in_check(&self.position, to_move)? {
            debug!(
                "{} in check from {:?}",
                to_move,
                checkers(&self.position, to_move)?
            );
            return Ok(GameStatus::Check { color: to_move });
        }

        Ok(GameStatus::Ongoing)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
