//! Capture mode: which black pieces a lone white king or pawn can take.

use tracing::{debug, warn};

use crate::attacks::attacks;
use crate::board::{Board, Color, PieceKind, PieceRecord, Square};
use crate::error::EngineError;

/// White pieces playable in capture mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capturer {
    King,
    Pawn,
}

impl Capturer {
    pub fn kind(self) -> PieceKind {
        match self {
            Capturer::King => PieceKind::King,
            Capturer::Pawn => PieceKind::Pawn,
        }
    }
}

impl TryFrom<PieceKind> for Capturer {
    type Error = EngineError;

    fn try_from(kind: PieceKind) -> Result<Self, Self::Error> {
        match kind {
            PieceKind::King => Ok(Capturer::King),
            PieceKind::Pawn => Ok(Capturer::Pawn),
            other => Err(EngineError::UnsupportedCapturer(other)),
        }
    }
}

/// Black pieces the white `capturer` on `white_label` attacks, in input order.
///
/// Neither capturer slides, so no board is consulted. An unparsable white
/// square gives an empty list; unparsable black squares are skipped.
pub fn find_captures(capturer: Capturer, white_label: &str, black: &[PieceRecord]) -> Vec<PieceRecord> {
    let Some(from) = Square::parse(white_label) else {
        warn!(label = white_label, "white piece square does not parse");
        return Vec::new();
    };

    let empty = Board::new();
    let captures: Vec<PieceRecord> = black
        .iter()
        .filter(|rec| match rec.square() {
            Some(to) => attacks(capturer.kind(), Color::White, from, to, &empty),
            None => {
                warn!(piece = %rec.kind, label = %rec.label, "skipping black piece with invalid square");
                false
            }
        })
        .cloned()
        .collect();

    debug!(capturer = %capturer.kind(), from = %from, found = captures.len(), "capture scan");
    captures
}
