//! Attack geometry shared by both evaluation modes.
//!
//! King, knight and pawn attacks are single-step table lookups. Bishop, rook
//! and queen attacks additionally need a clear line between the two squares,
//! which is only expressible through [`Line`].

use crate::board::{Board, Color, PieceKind, Square};
use crate::utils::{king_attacks, knight_attacks, pawn_attacks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Orthogonal,
    Diagonal,
}

/// Two distinct squares sharing a rank, file or diagonal.
///
/// Only [`Line::between`] builds one, so a path query on unaligned squares
/// cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    from: Square,
    to: Square,
    kind: LineKind,
}

impl Line {
    pub fn between(from: Square, to: Square) -> Option<Line> {
        let dx = to.file() - from.file();
        let dy = to.rank() - from.rank();
        let kind = if dx == 0 && dy == 0 {
            return None;
        } else if dx == 0 || dy == 0 {
            LineKind::Orthogonal
        } else if dx.abs() == dy.abs() {
            LineKind::Diagonal
        } else {
            return None;
        };
        Some(Line { from, to, kind })
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Squares strictly between the endpoints, walking from `from` toward `to`.
    pub fn interior(&self) -> impl Iterator<Item = Square> {
        let step_x = (self.to.file() - self.from.file()).signum();
        let step_y = (self.to.rank() - self.from.rank()).signum();
        let to = self.to;
        let mut cur = self.from.offset(step_x, step_y);
        std::iter::from_fn(move || {
            let sq = cur.filter(|&sq| sq != to)?;
            cur = sq.offset(step_x, step_y);
            Some(sq)
        })
    }
}

/// True iff no square strictly between the line's endpoints is occupied.
/// The endpoints themselves are never inspected.
pub fn clear_path(line: Line, board: &Board) -> bool {
    line.interior().all(|sq| !board.is_occupied(sq))
}

/// Whether a `color` piece of `kind` on `from` attacks `to`.
///
/// Color only matters for pawns: white pawns attack toward rank 8, black
/// pawns toward rank 1.
pub fn attacks(kind: PieceKind, color: Color, from: Square, to: Square, board: &Board) -> bool {
    if from == to {
        return false;
    }
    match kind {
        PieceKind::King => king_attacks(from.index()) & to.bit() != 0,
        PieceKind::Knight => knight_attacks(from.index()) & to.bit() != 0,
        PieceKind::Pawn => pawn_attacks(from.index(), color) & to.bit() != 0,
        PieceKind::Bishop => slides(from, to, board, |k| k == LineKind::Diagonal),
        PieceKind::Rook => slides(from, to, board, |k| k == LineKind::Orthogonal),
        PieceKind::Queen => slides(from, to, board, |_| true),
    }
}

fn slides(from: Square, to: Square, board: &Board, moves_along: impl Fn(LineKind) -> bool) -> bool {
    match Line::between(from, to) {
        Some(line) if moves_along(line.kind()) => clear_path(line, board),
        _ => false,
    }
}
