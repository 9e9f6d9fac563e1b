//! Core Connect Four game logic: board representation, win detection, move
//! generation, player types, and the turn state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, LegalActions, Window, COLS, CONNECT, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, Phase};
