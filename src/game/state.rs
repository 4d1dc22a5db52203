use super::{Board, BoardConfig, MoveError, PlayerIndex, Players};

/// Lifecycle of a session. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Starting,
    Running,
    Ended,
}

/// Why a move attempt changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    NotRunning,
    NotYourTurn,
    InvalidColumn,
    ColumnFull,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome<P> {
    /// Piece placed, turn passed to the next player
    Continued,
    /// Piece placed and it completed a line
    Won(P),
    /// Illegal input, nothing changed
    NoOp(Rejection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport<P> {
    pub outcome: MoveOutcome<P>,
    /// The piece landed in the top row, so its column takes no more moves
    pub filled_column: bool,
}

impl<P> MoveReport<P> {
    fn rejected(reason: Rejection) -> Self {
        MoveReport {
            outcome: MoveOutcome::NoOp(reason),
            filled_column: false,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self.outcome, MoveOutcome::NoOp(_))
    }
}

/// A single game session.
///
/// `H` is the handle of whatever the adapter uses to display the game (a chat
/// message id, say). The session only stores it so the adapter can match
/// incoming events against it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState<P, H = ()> {
    board: Board,
    players: Players<P>,
    turn: usize,
    stage: Stage,
    handle: Option<H>,
}

impl<P: Clone + PartialEq, H> GameState<P, H> {
    /// Create a session with an empty board, waiting to be presented
    pub fn new(players: Players<P>, config: BoardConfig) -> Self {
        GameState {
            board: Board::new(config),
            players,
            turn: 0,
            stage: Stage::Starting,
            handle: None,
        }
    }

    /// Move from `Starting` to `Running`. Returns false if already started.
    pub fn start(&mut self) -> bool {
        if self.stage != Stage::Starting {
            return false;
        }
        self.stage = Stage::Running;
        true
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// 0-based turn pointer
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Player whose move is next, or the winner once the game has ended
    pub fn current_player(&self) -> &P {
        self.players
            .get(self.turn)
            .expect("turn pointer stays within the roster")
    }

    pub fn current_piece(&self) -> PlayerIndex {
        PlayerIndex::from_turn(self.turn)
    }

    pub fn winner(&self) -> Option<&P> {
        (self.stage == Stage::Ended).then(|| self.current_player())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &Players<P> {
        &self.players
    }

    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub fn set_handle(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    pub fn has_presentation(&self) -> bool {
        self.handle.is_some()
    }

    /// Pure scan of the board for a completed line
    pub fn check_winner(&self) -> Option<PlayerIndex> {
        self.board.winner()
    }

    /// Try to drop the acting player's piece into `column`.
    ///
    /// Illegal input (game not running, out of turn, unknown or full column)
    /// leaves the session untouched and reports `NoOp`. Moving on a session
    /// that was never started, or as someone outside the roster, is a caller
    /// bug and asserts in debug builds.
    pub fn attempt_move(&mut self, column: usize, player: &P) -> MoveReport<P> {
        debug_assert!(
            self.stage != Stage::Starting,
            "attempt_move on a session that was never started"
        );
        debug_assert!(
            self.players.contains(player),
            "attempt_move by a player outside the roster"
        );

        if self.stage != Stage::Running {
            return MoveReport::rejected(Rejection::NotRunning);
        }
        if self.current_player() != player {
            return MoveReport::rejected(Rejection::NotYourTurn);
        }

        let row = match self.board.drop_piece(column, self.current_piece()) {
            Ok(row) => row,
            Err(MoveError::InvalidColumn) => return MoveReport::rejected(Rejection::InvalidColumn),
            Err(MoveError::ColumnFull) => return MoveReport::rejected(Rejection::ColumnFull),
        };
        let filled_column = row == 0;

        if self.board.winner().is_some() {
            // Turn pointer stays on the winner
            self.stage = Stage::Ended;
            return MoveReport {
                outcome: MoveOutcome::Won(self.current_player().clone()),
                filled_column,
            };
        }

        self.turn = (self.turn + 1) % self.players.len();
        MoveReport {
            outcome: MoveOutcome::Continued,
            filled_column,
        }
    }
}
