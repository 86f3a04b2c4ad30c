//! Game state module - the engine
//!
//! `GameState` is the sole authority over the board: it owns the grid of locked
//! cells, the single falling piece and the game-over flag. Every mutation goes
//! through [`Board::is_valid_position`] first; rejected intents leave the state
//! untouched. Once the game is over only queries and `restart` have any effect.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::piece::Piece;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::source::{PieceSource, RandomSource};
use crate::types::{GameAction, GRID_HEIGHT, GRID_WIDTH};

/// What a call to [`GameState::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game already over; nothing changed
    Idle,
    /// The falling piece moved down one row
    Fell,
    /// The piece could not fall: it was locked, rows were cleared and a new
    /// piece spawned in a valid position
    Locked { rows_cleared: usize },
    /// The piece was locked but the next piece's spawn position is blocked
    ToppedOut { rows_cleared: usize },
}

/// Emitted after a piece locks (consumed by observers such as the driver's logger).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub rows_cleared: usize,
    pub topped_out: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomSource> {
    board: Board,
    active: Piece,
    source: S,
    game_over: bool,
    /// Monotonic id for spawned pieces, including the one that topped out.
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<RandomSource> {
    /// Default-sized game whose pieces come from a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self::with_source(GRID_WIDTH, GRID_HEIGHT, RandomSource::seeded(seed))
    }
}

impl Default for GameState<RandomSource> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Empty `width x height` board with the first piece already spawned
    pub fn with_source(width: u8, height: u8, source: S) -> Self {
        Self::with_board(Board::new(width, height), source)
    }

    /// Start from a prepared board. If the first piece does not fit, the game
    /// begins already over.
    pub fn with_board(board: Board, mut source: S) -> Self {
        let active = Piece::spawn(&mut source, board.width());
        let mut state = Self {
            board,
            active,
            source,
            game_over: false,
            piece_id: 1,
            last_event: None,
        };
        if !state.is_valid_position(&active, 0, 0) {
            info!(x = active.x, y = active.y, "game over: first piece does not fit");
            state.game_over = true;
        }
        state
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// Validity check for `piece` shifted by `(dx, dy)` against the current board
    pub fn is_valid_position(&self, piece: &Piece, dx: i16, dy: i16) -> bool {
        self.board.is_valid_position(piece, dx, dy)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.grid.clear();
        out.grid.extend_from_slice(self.board.cells());
        out.active = Some(ActiveSnapshot::from(self.active));
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::new(self.board.width(), self.board.height());
        self.snapshot_into(&mut s);
        s
    }

    /// Replace the falling piece with a fresh one from the source.
    /// Returns false (and ends the game) if it does not fit.
    fn spawn_piece(&mut self) -> bool {
        self.active = Piece::spawn(&mut self.source, self.board.width());
        self.piece_id = self.piece_id.wrapping_add(1);

        if !self.is_valid_position(&self.active, 0, 0) {
            info!(
                piece_id = self.piece_id,
                x = self.active.x,
                y = self.active.y,
                "game over: spawn position blocked"
            );
            self.game_over = true;
            return false;
        }
        true
    }

    /// Lock the falling piece, clear rows and spawn the next one
    fn lock_active(&mut self) -> TickOutcome {
        let piece = self.active;
        self.board.lock(&piece);
        let rows_cleared = self.board.clear_completed_rows();
        debug!(
            piece_id = self.piece_id,
            x = piece.x,
            y = piece.y,
            rows_cleared,
            "piece locked"
        );

        let spawned = self.spawn_piece();
        self.last_event = Some(LockEvent {
            rows_cleared,
            topped_out: !spawned,
        });

        if spawned {
            TickOutcome::Locked { rows_cleared }
        } else {
            TickOutcome::ToppedOut { rows_cleared }
        }
    }

    /// One fall-interval step: drop the piece a row, or lock it when it cannot fall.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Idle;
        }

        if self.is_valid_position(&self.active, 0, 1) {
            self.active = self.active.translate(0, 1);
            return TickOutcome::Fell;
        }

        self.lock_active()
    }

    /// Commit `candidate` as the falling piece if it fits
    fn try_commit(&mut self, candidate: Piece) -> bool {
        if self.game_over {
            return false;
        }
        if !self.is_valid_position(&candidate, 0, 0) {
            trace!(x = candidate.x, y = candidate.y, "move rejected");
            return false;
        }
        self.active = candidate;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_commit(self.active.translate(-1, 0))
    }

    pub fn move_right(&mut self) -> bool {
        self.try_commit(self.active.translate(1, 0))
    }

    /// Move the piece down one row. Never locks; locking only happens on `tick`.
    pub fn soft_drop(&mut self) -> bool {
        self.try_commit(self.active.translate(0, 1))
    }

    /// Rotate clockwise in place. No kicks: the rotated shape must fit at the
    /// same top-left anchor or the rotation is rejected.
    pub fn rotate(&mut self) -> bool {
        self.try_commit(self.active.rotated())
    }

    /// Empty the board and start a new game with the same piece source.
    pub fn restart(&mut self) {
        self.board.clear();
        self.game_over = false;
        self.last_event = None;
        self.piece_id = 0;
        self.spawn_piece();
        info!("game restarted");
    }

    /// Apply a player intent. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => {
                if !self.game_over {
                    return false;
                }
                self.restart();
                true
            }
        }
    }
}
