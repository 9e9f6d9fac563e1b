use crate::error::MoveError;

use super::board::COLS;
use super::{Board, LegalActions, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of `board` as it stands, looking for either player's four.
    pub fn of(board: &Board) -> GameOutcome {
        if board.has_four_in_a_row(Player::Red.to_cell()) {
            GameOutcome::Winner(Player::Red)
        } else if board.has_four_in_a_row(Player::Yellow.to_cell()) {
            GameOutcome::Winner(Player::Yellow)
        } else if board.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }
}

/// Where the turn state machine currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(Player),
    Over(GameOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: GameOutcome,
}

impl GameState {
    /// Fresh game with `first` to move.
    pub fn new(first: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: first,
            outcome: GameOutcome::InProgress,
        }
    }

    /// Create initial game state with Red to move
    pub fn initial() -> Self {
        Self::new(Player::Red)
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn phase(&self) -> Phase {
        match self.outcome {
            GameOutcome::InProgress => Phase::AwaitingMove(self.current_player),
            outcome => Phase::Over(outcome),
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome != GameOutcome::InProgress
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> LegalActions {
        if self.is_terminal() {
            return LegalActions::new();
        }
        self.board.valid_moves()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place. On error the state is left untouched.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= COLS {
            return Err(MoveError::InvalidColumn { column });
        }

        let mover = self.current_player;
        self.board.drop_piece(column, mover.to_cell())?;

        if self.board.has_four_in_a_row(mover.to_cell()) {
            self.outcome = GameOutcome::Winner(mover);
        } else if self.board.is_full() {
            self.outcome = GameOutcome::Draw;
        } else {
            self.current_player = mover.other();
        }

        Ok(())
    }
}
