//! Game player
//!
//! A `Player` owns the authoritative board for one game, knows which color
//! it plays, and exposes the two operations the protocol layer needs:
//! apply a (validated) opponent move, and compute-and-apply its own move.

use tracing::debug;

use crate::core::board::{Board, Color, GameError, Square};
use crate::core::moves::Move;
use crate::engine::movegen::MoveGen;
use crate::engine::search::{SearchLimits, Searcher};

pub struct Player {
    board: Board,
    color: Color,
    searcher: Searcher,
    limits: SearchLimits,
}

impl Player {
    pub fn new(color: Color) -> Self {
        Self::with_limits(color, SearchLimits::default())
    }

    pub fn with_limits(color: Color, limits: SearchLimits) -> Self {
        Player {
            board: Board::new(),
            color,
            searcher: Searcher::new(),
            limits,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Switch a default-black player to white. The protocol layer learns
    /// its color only from the referee's first token, before any move is
    /// played.
    pub fn set_white(&mut self) {
        self.color = Color::White;
    }

    /// Apply a move requested from outside (the opponent, via the referee).
    ///
    /// The target must be in the current legal-move list; otherwise the
    /// board is left untouched and the caller is expected to re-request
    /// input. Returns the applied move with its flip set.
    pub fn apply_external_move(&mut self, col: u8, row: u8) -> Result<Move, GameError> {
        let target = Square::from_col_row(col, row);
        let moves = MoveGen::legal_moves(&self.board);
        for &mv in moves.iter() {
            if mv.square == target {
                self.board.apply_move(mv);
                return Ok(mv);
            }
        }
        Err(GameError::IllegalMove(target))
    }

    /// Compute this player's move, apply it, and return it for
    /// transmission. `None` only when the board is already full.
    ///
    /// The legality cross-check against the generated move list guards an
    /// internal-consistency invariant; it is active in debug and test
    /// builds and compiles out of release builds.
    pub fn select_and_apply_move(&mut self) -> Option<Move> {
        let mv = self.searcher.search(&self.board, self.color, &self.limits)?;

        debug_assert!(
            MoveGen::legal_moves(&self.board)
                .iter()
                .any(|m| m.square == mv.square && m.flips == mv.flips),
            "search selected an illegal move: {mv}"
        );

        self.board.apply_move(mv);
        debug!(mv = %mv, ply = self.board.ply, "played own move");
        Some(mv)
    }
}
