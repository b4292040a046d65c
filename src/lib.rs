//! Static chess puzzle evaluation: which black pieces a lone white king or
//! pawn can capture, and whether a lone white king is safe, in check,
//! checkmated or stalemated.

pub mod attacks;
pub mod board;
pub mod capture;
pub mod error;
pub mod placement;
pub mod position;
pub mod safety;
pub mod utils;

pub use attacks::{attacks, clear_path, Line, LineKind};
pub use board::{Board, Color, Piece, PieceKind, PieceRecord, Square};
pub use capture::{find_captures, Capturer};
pub use error::EngineError;
pub use placement::{validate, PuzzleMode};
pub use position::Position;
pub use safety::{classify, KingStatus};

pub fn init() {
    utils::init_attack_tables();
}
