//! Engine error types

use thiserror::Error;

use crate::board::{PieceKind, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    #[error("unknown piece: {0:?}")]
    UnknownPiece(String),

    #[error("malformed piece record: {0:?} (expected kind:square, e.g. rook:a4)")]
    MalformedRecord(String),

    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    #[error("a white {0} cannot be used in capture mode (king or pawn only)")]
    UnsupportedCapturer(PieceKind),

    #[error("at most {max} black {kind}(s) may be placed")]
    TooMany { kind: PieceKind, max: usize },

    #[error("at most {0} black pieces may be placed")]
    TooManyPieces(usize),

    #[error("the black king on {black} may not stand next to the white king on {white}")]
    KingsAdjacent { white: Square, black: Square },

    #[error("place at least one black piece")]
    NoBlackPieces,
}
