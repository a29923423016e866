//! Fixed-depth move selection
//!
//! The searcher explores the move tree exhaustively to a fixed depth and
//! scores every visited position from one fixed perspective: the disc
//! differential of the searching player. There is no adversarial sign flip
//! between plies; the search is a forward-looking maximization of the
//! player's own differential across the whole tree. This matches the
//! historical playing behavior and must not be "corrected" to min/max
//! alternation, which would change move choice.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::board::{Board, Color};
use crate::core::moves::Move;
use crate::engine::movegen::MoveGen;

/// Search depth in plies used by the tournament player
pub const DEFAULT_DEPTH: u32 = 3;

/// Search configuration
#[derive(Clone, Debug)]
pub struct SearchLimits {
    /// Plies of lookahead below the root candidates
    pub depth: u32,
    /// Optional soft deadline. When it passes mid-search the searcher stops
    /// deepening and the best move found so far is returned. `None` (the
    /// default) searches the full fixed depth.
    pub movetime: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            movetime: None,
        }
    }
}

/// Counters for diagnostics
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    /// Positions to which a candidate move was applied
    pub nodes: u64,
}

/// Disc differential of `perspective`, using the offset scores
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    match perspective {
        Color::White => board.white_score() - board.black_score(),
        Color::Black => board.black_score() - board.white_score(),
    }
}

pub struct Searcher {
    pub stats: SearchStats,
    start_time: Instant,
    time_limit: Option<Duration>,
}

impl Searcher {
    pub fn new() -> Self {
        Searcher {
            stats: SearchStats::default(),
            start_time: Instant::now(),
            time_limit: None,
        }
    }

    fn should_stop(&self) -> bool {
        match self.time_limit {
            Some(limit) => self.start_time.elapsed() >= limit,
            None => false,
        }
    }

    /// Select a move for `perspective` from `board`. Returns `None` only
    /// when the position has no legal move, which under the game rules
    /// means the board is full.
    pub fn search(
        &mut self,
        board: &Board,
        perspective: Color,
        limits: &SearchLimits,
    ) -> Option<Move> {
        self.stats = SearchStats::default();
        self.start_time = Instant::now();
        self.time_limit = limits.movetime;

        let (mv, score) = self.best_line(board, limits.depth, perspective)?;
        debug!(chosen = %mv, score, nodes = self.stats.nodes, "search finished");
        Some(mv)
    }

    /// Best move and score among the legal moves of `board`, evaluated for
    /// the fixed `perspective`.
    ///
    /// Each candidate is applied to a copy of the board and scored by the
    /// immediate disc differential; with remaining depth the subtree score
    /// replaces the immediate one. A subtree with no legal continuation is
    /// terminal and keeps the immediate score. Ties keep the earliest move
    /// in row-major scan order.
    fn best_line(&mut self, board: &Board, depth: u32, perspective: Color) -> Option<(Move, i32)> {
        let moves = MoveGen::legal_moves(board);
        let mut best: Option<(Move, i32)> = None;

        for &mv in moves.iter() {
            self.stats.nodes += 1;
            let mut child = *board;
            child.apply_move(mv);

            let mut score = evaluate(&child, perspective);
            if depth > 0 && !self.should_stop() {
                if let Some((_, deep)) = self.best_line(&child, depth - 1, perspective) {
                    score = deep;
                }
            }

            match best {
                Some((_, s)) if score <= s => {}
                _ => best = Some((mv, score)),
            }
        }

        best
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
