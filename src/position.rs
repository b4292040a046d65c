//! A puzzle position: one white piece against an ordered list of black pieces.

use crate::board::{Board, Color, Piece, PieceRecord};
use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub white: PieceRecord,
    /// Black pieces in placement order; evaluation results follow this order.
    pub black: Vec<PieceRecord>,
}

impl Position {
    /// Build the board from the records. Records whose label does not parse
    /// are kept as given but not placed.
    pub fn from_records(white: PieceRecord, black: Vec<PieceRecord>) -> Result<Self, EngineError> {
        let mut board = Board::new();
        if let Some(sq) = white.square() {
            board.place(sq, Piece::new(white.kind, Color::White))?;
        }
        for rec in &black {
            if let Some(sq) = rec.square() {
                board.place(sq, Piece::new(rec.kind, Color::Black))?;
            }
        }
        Ok(Self {
            board,
            white,
            black,
        })
    }
}
