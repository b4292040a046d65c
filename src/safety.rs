//! White king safety: check, checkmate, stalemate and escape squares.

use tracing::{debug, trace, warn};

use crate::attacks::attacks;
use crate::board::{Board, Color, Piece, PieceKind, PieceRecord, Square};
use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KingStatus {
    Safe,
    /// In check; the squares the king can step to without being attacked.
    Check(Vec<Square>),
    Checkmate,
    Stalemate,
    /// The king's square label did not parse.
    Invalid,
}

impl KingStatus {
    pub fn tag(&self) -> &'static str {
        match self {
            KingStatus::Safe => "safe",
            KingStatus::Check(_) => "check",
            KingStatus::Checkmate => "checkmate",
            KingStatus::Stalemate => "stalemate",
            KingStatus::Invalid => "invalid",
        }
    }

    pub fn escape_squares(&self) -> &[Square] {
        match self {
            KingStatus::Check(squares) => squares,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Attacker {
    kind: PieceKind,
    square: Square,
}

// Rollback entry for one scratch edit
enum Undo {
    Lifted(Square, Piece),
    Captured { index: usize, attacker: Attacker },
    Removed(Square, Piece),
    Placed(Square),
}

/// Scoped edits to the board and the live attacker list. Every edit is
/// logged and rolled back, newest first, when the guard is dropped.
struct Scratch<'a> {
    board: &'a mut Board,
    attackers: &'a mut Vec<Attacker>,
    undo: Vec<Undo>,
}

impl<'a> Scratch<'a> {
    fn new(board: &'a mut Board, attackers: &'a mut Vec<Attacker>) -> Self {
        Self {
            board,
            attackers,
            undo: Vec::new(),
        }
    }

    /// A nested scope whose edits are undone before this one's.
    fn child(&mut self) -> Scratch<'_> {
        Scratch::new(&mut *self.board, &mut *self.attackers)
    }

    fn lift(&mut self, sq: Square) {
        if let Some(piece) = self.board.remove(sq) {
            self.undo.push(Undo::Lifted(sq, piece));
        }
    }

    /// The white king takes whatever black piece stands on `sq`.
    fn capture_with_king(&mut self, sq: Square) {
        if let Some(index) = self.attackers.iter().position(|a| a.square == sq) {
            let attacker = self.attackers.remove(index);
            self.undo.push(Undo::Captured { index, attacker });
        }
        if let Some(piece) = self.board.remove(sq) {
            self.undo.push(Undo::Removed(sq, piece));
        }
        if self
            .board
            .place(sq, Piece::new(PieceKind::King, Color::White))
            .is_ok()
        {
            self.undo.push(Undo::Placed(sq));
        }
    }

    fn attacked(&self, target: Square) -> bool {
        is_attacked(self.board, self.attackers, target)
    }

    fn is_escape(&mut self, to: Square) -> bool {
        if self.board.color_occupied(Color::White) & to.bit() != 0 {
            return false;
        }
        if self.board.color_occupied(Color::Black) & to.bit() == 0 {
            return !self.attacked(to);
        }
        let mut capture = self.child();
        capture.capture_with_king(to);
        !capture.attacked(to)
    }
}

impl Drop for Scratch<'_> {
    fn drop(&mut self) {
        while let Some(entry) = self.undo.pop() {
            match entry {
                Undo::Placed(sq) => {
                    self.board.remove(sq);
                }
                Undo::Lifted(sq, piece) | Undo::Removed(sq, piece) => {
                    if let Err(err) = self.board.place(sq, piece) {
                        warn!(%err, piece = %piece.kind, "scratch rollback could not restore square");
                    }
                }
                Undo::Captured { index, attacker } => self.attackers.insert(index, attacker),
            }
        }
    }
}

fn is_attacked(board: &Board, attackers: &[Attacker], target: Square) -> bool {
    attackers
        .iter()
        .any(|a| attacks(a.kind, Color::Black, a.square, target, board))
}

// Black records with usable squares, in input order
fn live_attackers(black: &[PieceRecord]) -> Vec<Attacker> {
    black
        .iter()
        .filter_map(|rec| match rec.square() {
            Some(square) => Some(Attacker {
                kind: rec.kind,
                square,
            }),
            None => {
                warn!(piece = %rec.kind, label = %rec.label, "skipping black piece with invalid square");
                None
            }
        })
        .collect()
}

fn escape_squares(board: &mut Board, attackers: &mut Vec<Attacker>, king: Square) -> Vec<Square> {
    let mut scratch = Scratch::new(board, attackers);
    // A slider checking along a line also covers the square behind the king.
    scratch.lift(king);

    let escapes: Vec<Square> = king
        .neighbors()
        .into_iter()
        .filter(|&to| {
            let safe = scratch.is_escape(to);
            trace!(square = %to, safe, "escape candidate");
            safe
        })
        .collect();
    escapes
}

/// Classify the white king of `position` against its black pieces.
///
/// The white record is taken to be the king. The board is edited while
/// captures are simulated and is restored before this returns.
pub fn classify(position: &mut Position) -> KingStatus {
    let Some(king) = position.white.square() else {
        warn!(label = %position.white.label, "white king square does not parse");
        return KingStatus::Invalid;
    };

    let mut attackers = live_attackers(&position.black);
    let in_check = is_attacked(&position.board, &attackers, king);
    let escapes = escape_squares(&mut position.board, &mut attackers, king);

    let status = match (in_check, escapes.is_empty()) {
        (true, true) => KingStatus::Checkmate,
        (true, false) => KingStatus::Check(escapes),
        (false, true) => KingStatus::Stalemate,
        (false, false) => KingStatus::Safe,
    };
    debug!(king = %king, status = status.tag(), "classified position");
    status
}
