//! Move generation
//!
//! Capture computation scans outward from the placement square along the 8
//! compass directions. Legal-move enumeration applies the forced-capture
//! rule: if any frontier square captures, only capturing placements are
//! legal; otherwise every frontier square is a legal zero-flip placement.

use crate::core::bitboard::Bitboard;
use crate::core::board::{Board, Color, Square};
use crate::core::moves::{Move, MoveList};

/// The 8 compass directions as (column delta, row delta), in scan order
pub const DIRECTIONS: [(i8, i8); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub struct MoveGen;

impl MoveGen {
    /// Squares captured by placing a `color` piece on `sq` and scanning in
    /// one direction.
    ///
    /// The scan walks contiguous occupied squares, accumulating opponent
    /// discs. The first same-colored disc closes the run and the
    /// accumulated set is the capture; hitting an empty square or the board
    /// edge first means nothing is captured in this direction. A capturing
    /// run is therefore always bounded by same-colored discs on both ends.
    pub fn flips_in_direction(
        board: &Board,
        sq: Square,
        (dcol, drow): (i8, i8),
        color: Color,
    ) -> Bitboard {
        let mut col = sq.col() as i8 + dcol;
        let mut row = sq.row() as i8 + drow;
        let mut run = Bitboard::EMPTY;

        while (0..8).contains(&col) && (0..8).contains(&row) {
            let here = Square::from_col_row(col as u8, row as u8);
            if !board.has_piece(here) {
                break;
            }
            if board.is_white_piece(here) == (color == Color::White) {
                return run;
            }
            run |= here.bitboard();
            col += dcol;
            row += drow;
        }

        Bitboard::EMPTY
    }

    /// Total capture set for placing a `color` piece on `sq`: the union of
    /// the per-direction captures.
    pub fn flips(board: &Board, sq: Square, color: Color) -> Bitboard {
        let mut flips = Bitboard::EMPTY;
        for dir in DIRECTIONS {
            flips |= Self::flips_in_direction(board, sq, dir, color);
        }
        flips
    }

    /// Legal moves for the side to move, in row-major scan order (row
    /// outer, column inner).
    ///
    /// Captures are mandatory: when at least one frontier square captures,
    /// the list holds exactly the capturing moves. A placement without a
    /// capture is only legal when no square on the board would capture.
    pub fn legal_moves(board: &Board) -> MoveList {
        let color = board.side_to_move();
        let mut capturing = MoveList::new();
        let mut quiet = MoveList::new();

        for sq in board.frontier.iter() {
            let sq = Square::new(sq);
            let flips = Self::flips(board, sq, color);
            if flips.is_empty() {
                quiet.push(Move::new(sq, flips));
            } else {
                capturing.push(Move::new(sq, flips));
            }
        }

        if capturing.is_empty() { quiet } else { capturing }
    }
}
