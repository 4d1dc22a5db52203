//! Core Connect Four game logic: board representation, player roster, and the
//! session state machine driven by move attempts.

mod board;
mod player;
mod state;

pub use board::{Board, BoardConfig, Cell, MoveError, COLS, LINE_LENGTH, ROWS};
pub use player::{PlayerIndex, Players};
pub use state::{GameState, MoveOutcome, MoveReport, Rejection, Stage};
