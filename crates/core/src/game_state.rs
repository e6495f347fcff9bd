//! Game state module - the fixed-tick game loop
//!
//! `GameState` owns the board, the falling piece, the score, and the gravity
//! timer. Player actions are validated against the board before they touch the
//! piece; gravity drops the piece one row per interval and, once it cannot
//! fall, runs lock → clear → spawn. If the freshly spawned piece already
//! collides, the board and score are wiped and play continues immediately.

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{GameAction, PieceKind};

/// What a gravity tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece locked and a new piece spawned
    Locked { lines_cleared: u32 },
    /// The piece locked, the next piece did not fit, and the board and score
    /// were reset
    Reset { lines_cleared: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    piece: Piece,
    score: u32,
    /// Time accumulated toward the next gravity tick
    gravity_timer: Duration,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game with the default config and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::from_valid_config(GameConfig::default(), seed)
    }

    /// Create a new game, rejecting configs that fail [`GameConfig::validate`]
    pub fn with_config(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config, seed))
    }

    fn from_valid_config(config: GameConfig, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let piece = Piece::spawn(rng.next_kind(), config.spawn_x(), config.spawn_y);
        trace!(kind = piece.kind.as_str(), "first piece");

        Self {
            board: Board::new(config.width, config.height),
            piece,
            score: 0,
            gravity_timer: Duration::ZERO,
            rng,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Replace the falling piece with a fresh one at the spawn point.
    ///
    /// `kind` forces the shape; `None` picks one at random. Returns whether the
    /// new piece fits where it spawned. The board is not touched.
    pub fn spawn_piece(&mut self, kind: Option<PieceKind>) -> bool {
        let kind = kind.unwrap_or_else(|| self.rng.next_kind());
        self.piece = Piece::spawn(kind, self.config.spawn_x(), self.config.spawn_y);
        trace!(kind = kind.as_str(), x = self.piece.x, y = self.piece.y, "spawned piece");

        !self.board.check_collision(&self.piece, 0, 0)
    }

    /// Move the piece if the destination is free
    pub(crate) fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.board.check_collision(&self.piece, dx, dy) {
            return false;
        }
        self.piece = self.piece.shifted(dx, dy);
        true
    }

    /// Rotate the piece if the rotated mask fits in place. No kicks.
    pub(crate) fn try_rotate(&mut self) -> bool {
        let rotated = self.piece.rotated();
        if self.board.check_collision(&rotated, 0, 0) {
            return false;
        }
        self.piece = rotated;
        true
    }

    /// Apply a player action. Returns whether the piece changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Advance the gravity timer by one frame's worth of time.
    ///
    /// Once the accumulated time exceeds the gravity delay the timer restarts
    /// from zero and exactly one gravity tick runs, however long the frame was.
    pub fn update(&mut self, elapsed: Duration) -> Option<TickOutcome> {
        self.gravity_timer += elapsed;
        if self.gravity_timer <= self.config.gravity_delay() {
            return None;
        }

        self.gravity_timer = Duration::ZERO;
        Some(self.gravity_tick())
    }

    /// One gravity step: fall a row, or lock, clear, and spawn.
    pub fn gravity_tick(&mut self) -> TickOutcome {
        if self.try_move(0, 1) {
            return TickOutcome::Fell;
        }

        // The piece sits where every move and rotation was validated, so it
        // does not collide at (0, 0).
        self.board.lock(&self.piece);
        let lines_cleared = self.board.clear_lines();
        self.score = self
            .score
            .saturating_add(lines_cleared.saturating_mul(self.config.points_per_line));
        debug!(
            kind = self.piece.kind.as_str(),
            x = self.piece.x,
            y = self.piece.y,
            lines_cleared,
            score = self.score,
            "piece locked"
        );

        if self.spawn_piece(None) {
            return TickOutcome::Locked { lines_cleared };
        }

        info!(score = self.score, "spawn blocked, resetting board");
        self.board.reset();
        self.score = 0;
        TickOutcome::Reset { lines_cleared }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.piece = Some(PieceSnapshot::from(self.piece));
        out.score = self.score;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
