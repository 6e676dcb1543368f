//! Game state module - manages the complete game state
//!
//! Ties together board, piece, placement checks and the bag queue. It owns the
//! falling piece, the score and the game-over flag, advances gravity on
//! [`GameState::tick`] and applies player input through
//! [`GameState::apply_action`].
//!
//! Locking is synchronous: the tick or action that finds no legal step down
//! merges the piece into the board, clears rows, scores, and spawns the next
//! piece before returning.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::piece::Tetromino;
use crate::pieces::{rotation_rule, spawn_shape, PieceShape, RotationRule};
use crate::placement;
use crate::rng::PieceQueue;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Observable phases of a game.
///
/// Locking happens inside a single call and is never observable between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// A piece is falling and input is accepted.
    Falling,
    /// Only [`GameAction::Reset`] is accepted.
    GameOver,
}

/// Complete game state
///
/// State changes only through [`start`](Self::start), [`tick`](Self::tick),
/// [`apply_action`](Self::apply_action) and [`reset`](Self::reset). Locking
/// and spawning happen inside those calls:
///
/// ```compile_fail
/// let mut game = blockfall_core::GameState::new(1);
/// game.start();
/// game.lock_piece();
/// ```
///
/// ```compile_fail
/// let mut game = blockfall_core::GameState::new(1);
/// game.start();
/// game.spawn_piece();
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    piece_queue: PieceQueue,
    config: GameConfig,
    /// Monotonic id for spawned pieces (increments only on successful spawn).
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<CoreLastEvent>,
    score: u32,
    lines: u32,
    drop_timer_ms: u32,
    soft_dropping: bool,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed and default timing
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::with_seed(seed))
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::with_board(config, Board::new())
    }

    /// Start from a prepared board instead of an empty one.
    pub fn with_board(config: GameConfig, board: Board) -> Self {
        let piece_queue = match config.seed {
            Some(seed) => PieceQueue::new(seed),
            None => PieceQueue::from_entropy(),
        };

        Self {
            board,
            active: None,
            piece_queue,
            config,
            piece_id: 0,
            last_event: None,
            score: 0,
            lines: 0,
            drop_timer_ms: 0,
            soft_dropping: false,
            game_over: false,
            started: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        info!("game started (seed {})", self.piece_queue.seed());
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Falling
        }
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn seed(&self) -> u64 {
        self.piece_queue.seed()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Identity of the piece that spawns after the current one locks
    pub fn next_piece(&self) -> PieceKind {
        self.piece_queue.peek()
    }

    /// Canonical offsets of the next piece, for the preview
    pub fn next_shape(&self) -> PieceShape {
        spawn_shape(self.next_piece())
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.soft_dropping
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost = self
            .active
            .map(|p| placement::landing_position(&p, &self.board).cells());
        out.next = self.next_piece();
        out.next_shape = self.next_shape();
        out.game_over = self.game_over;
        out.seed = self.piece_queue.seed();
        out.piece_id = self.piece_id;
        out.score = self.score;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a new piece from the queue at the spawn anchor.
    ///
    /// Returns false and ends the game if the new piece overlaps the stack.
    pub(crate) fn spawn_piece(&mut self) -> bool {
        let kind = self.piece_queue.draw();
        let piece = Tetromino::new(kind);

        if !placement::is_legal(&piece, &self.board) {
            self.active = None;
            self.game_over = true;
            info!(
                "game over: {} spawn blocked (score {}, lines {})",
                kind.as_str(),
                self.score,
                self.lines
            );
            return false;
        }

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        self.drop_timer_ms = 0;
        true
    }

    /// Current gravity interval, honoring a held soft drop
    pub fn drop_interval_ms(&self) -> u32 {
        let interval = if self.soft_dropping {
            self.config.soft_drop_ms
        } else {
            self.config.gravity_ms
        };
        interval.max(1)
    }

    /// Replace the active piece with `change(active)` if the result is legal.
    fn commit(&mut self, change: impl FnOnce(&Tetromino) -> Option<Tetromino>) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        match placement::try_apply(&active, &self.board, change) {
            Some(next) => {
                self.active = Some(next);
                true
            }
            None => false,
        }
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        self.commit(|p| Some(p.moved(dx, dy)))
    }

    /// Try to rotate the active piece
    pub(crate) fn try_rotate(&mut self, spin: Spin) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        // O piece doesn't rotate
        if rotation_rule(active.kind) == RotationRule::Fixed {
            return false;
        }

        self.commit(|p| p.rotated(spin))
    }

    /// Drop the active piece to the lowest legal row and lock it.
    /// Returns the number of rows dropped.
    pub(crate) fn hard_drop(&mut self) -> u32 {
        if self.active.is_none() {
            return 0;
        }

        let mut drop_distance = 0;
        while self.try_move(0, 1) {
            drop_distance += 1;
        }

        self.lock_piece();
        drop_distance
    }

    /// Lock the active piece onto the board, clear completed rows and spawn
    /// the next piece.
    pub(crate) fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let cells = active.cells();
        for &(x, y) in &cells {
            self.board.lock_cell(x, y, active.kind);
        }

        // Only rows the piece touched can have become full.
        let mut touched: ArrayVec<usize, 4> = ArrayVec::new();
        for &(_, y) in &cells {
            let y = y as usize;
            if !touched.contains(&y) {
                touched.push(y);
            }
        }

        let mut full: ArrayVec<usize, 4> = ArrayVec::new();
        let mut lines_cleared = 0;
        for &y in &touched {
            if self.board.is_row_full(y) {
                lines_cleared += self.board.clear_row(y);
                full.push(y);
            }
        }

        let mut line_clear_score = 0;
        if lines_cleared > 0 {
            self.board.compact(&full);
            line_clear_score = lines_cleared.saturating_mul(self.config.line_reward);
            self.lines = self.lines.saturating_add(lines_cleared);
            self.score = self.score.saturating_add(line_clear_score);
            debug!(
                "cleared rows {:?} (+{}, score {})",
                full.as_slice(),
                line_clear_score,
                self.score
            );
        }

        debug!(
            "locked {} at ({}, {})",
            active.kind.as_str(),
            active.x,
            active.y
        );

        let spawned = self.spawn_piece();

        self.last_event = Some(CoreLastEvent {
            lines_cleared,
            line_clear_score,
            game_over: !spawned,
        });
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<CoreLastEvent> {
        self.last_event.take()
    }

    /// Check if the active piece is resting on something
    pub fn is_grounded(&self) -> bool {
        self.active
            .is_some_and(|piece| placement::is_grounded(&piece, &self.board))
    }

    /// Row the active piece's anchor would land on
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(placement::landing_position(&active, &self.board).y)
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Steps the piece down once per elapsed interval; a step that is not
    /// legal locks the piece instead. Returns true if anything changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over || !self.started || self.active.is_none() {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);

        let mut changed = false;
        while self.drop_timer_ms >= self.drop_interval_ms() {
            self.drop_timer_ms -= self.drop_interval_ms();
            changed = true;

            if !self.try_move(0, 1) {
                self.lock_piece();
                self.drop_timer_ms = 0;
                break;
            }
        }

        changed
    }

    /// Hold or release the soft-drop modifier.
    pub fn set_soft_drop(&mut self, held: bool) -> bool {
        if self.soft_dropping == held {
            return false;
        }
        self.soft_dropping = held;
        // Time already waited counts toward the new interval, capped one
        // millisecond short of a step.
        self.drop_timer_ms = self.drop_timer_ms.min(self.drop_interval_ms() - 1);
        true
    }

    /// Clear everything and start a new game with a reshuffled queue.
    pub fn reset(&mut self) {
        self.board.clear();
        self.piece_queue.reshuffle();
        self.active = None;
        self.last_event = None;
        self.score = 0;
        self.lines = 0;
        self.drop_timer_ms = 0;
        self.soft_dropping = false;
        self.game_over = false;
        self.started = true;
        info!("game reset");
        self.spawn_piece();
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Reset => {
                self.reset();
                true
            }
            _ if self.game_over || !self.started => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::RotateCw => self.try_rotate(Spin::Cw),
            GameAction::RotateCcw => self.try_rotate(Spin::Ccw),
            GameAction::SoftDropOn => self.set_soft_drop(true),
            GameAction::SoftDropOff => self.set_soft_drop(false),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Check if piece can move in given direction
    pub fn can_move(&self, dx: i8, dy: i8) -> bool {
        self.active
            .is_some_and(|p| placement::is_legal(&p.moved(dx, dy), &self.board))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
