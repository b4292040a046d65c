//! Placement rules a puzzle position must satisfy before it is evaluated.
//!
//! Square collisions are already rejected by [`Position::from_records`];
//! this module adds the per-mode limits on the black side.

use crate::board::PieceKind;
use crate::error::EngineError;
use crate::position::Position;

/// Which evaluation a position is set up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleMode {
    Checkmate,
    Capture,
}

/// Capture mode takes any mix of black pieces up to this many.
pub const MAX_BLACK_PIECES: usize = 16;

/// Most black pieces of `kind` a checkmate puzzle may hold.
pub fn max_black(kind: PieceKind) -> usize {
    match kind {
        PieceKind::Pawn => 8,
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook => 2,
        PieceKind::Queen | PieceKind::King => 1,
    }
}

/// Check the black side of `position` against the rules of `mode`.
///
/// Records with unparsable squares still count toward the limits; the
/// evaluators skip them later.
pub fn validate(mode: PuzzleMode, position: &Position) -> Result<(), EngineError> {
    if position.black.is_empty() {
        return Err(EngineError::NoBlackPieces);
    }

    match mode {
        PuzzleMode::Capture => {
            if position.black.len() > MAX_BLACK_PIECES {
                return Err(EngineError::TooManyPieces(MAX_BLACK_PIECES));
            }
        }
        PuzzleMode::Checkmate => {
            for kind in PieceKind::ALL {
                let count = position.black.iter().filter(|r| r.kind == kind).count();
                let max = max_black(kind);
                if count > max {
                    return Err(EngineError::TooMany { kind, max });
                }
            }
            check_kings_apart(position)?;
        }
    }
    Ok(())
}

// A black king may not stand next to the white king
fn check_kings_apart(position: &Position) -> Result<(), EngineError> {
    let Some(white) = position.white.square() else {
        return Ok(());
    };
    let near = white.neighbors();
    let black_king = position
        .black
        .iter()
        .filter(|r| r.kind == PieceKind::King)
        .filter_map(|r| r.square())
        .find(|sq| near.contains(sq));

    match black_king {
        Some(black) => Err(EngineError::KingsAdjacent { white, black }),
        None => Ok(()),
    }
}
