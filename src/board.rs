// Square mapping: A1=0, B1=1, ..., H8=63 (index = rank * 8 + file)

use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;
use crate::utils::{iter_bits, KING_OFFSETS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "white",
            Color::Black => "black",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

// Name and abbreviation per kind, indexed by `PieceKind as usize`
static PIECE_TABLE: [(PieceKind, &str, char); 6] = [
    (PieceKind::Pawn, "pawn", 'P'),
    (PieceKind::Knight, "knight", 'N'),
    (PieceKind::Bishop, "bishop", 'B'),
    (PieceKind::Rook, "rook", 'R'),
    (PieceKind::Queen, "queen", 'Q'),
    (PieceKind::King, "king", 'K'),
];

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn name(self) -> &'static str {
        PIECE_TABLE[self as usize].1
    }

    /// Uppercase display letter (`N` for knight).
    pub fn abbrev(self) -> char {
        PIECE_TABLE[self as usize].2
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PIECE_TABLE
            .iter()
            .find(|(_, name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|(kind, _, _)| *kind)
            .ok_or_else(|| EngineError::UnknownPiece(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// FEN-style letter: uppercase for white, lowercase for black.
    pub fn letter(self) -> char {
        match self.color {
            Color::White => self.kind.abbrev(),
            Color::Black => self.kind.abbrev().to_ascii_lowercase(),
        }
    }
}

/// One of the 64 board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Build from zero-based file and rank; `None` when either is off the board.
    pub fn new(file: i8, rank: i8) -> Option<Square> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    pub fn from_index(index: usize) -> Option<Square> {
        (index < 64).then_some(Square(index as u8))
    }

    /// Parse a label such as `e4`. Anything that is not exactly a file letter
    /// `a`-`h` followed by a rank digit `1`-`8` yields `None`.
    pub fn parse(text: &str) -> Option<Square> {
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Square::new((file - b'a') as i8, (rank - b'1') as i8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn file(self) -> i8 {
        (self.0 % 8) as i8
    }

    pub fn rank(self) -> i8 {
        (self.0 / 8) as i8
    }

    pub fn bit(self) -> u64 {
        1u64 << self.0
    }

    pub fn offset(self, dx: i8, dy: i8) -> Option<Square> {
        Square::new(self.file() + dx, self.rank() + dy)
    }

    /// Squares at Chebyshev distance 1, clipped to the board, file-major then rank-minor.
    pub fn neighbors(self) -> Vec<Square> {
        KING_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.offset(dx, dy))
            .collect()
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_char = (b'a' + self.file() as u8) as char;
        let rank_char = (b'1' + self.rank() as u8) as char;
        write!(f, "{}{}", file_char, rank_char)
    }
}

impl FromStr for Square {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::parse(s).ok_or_else(|| EngineError::InvalidSquare(s.to_string()))
    }
}

/// A piece as handed over by the placement flow: its kind and the square
/// label exactly as it was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceRecord {
    pub kind: PieceKind,
    pub label: String,
}

impl PieceRecord {
    pub fn new(kind: PieceKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }

    pub fn square(&self) -> Option<Square> {
        Square::parse(&self.label)
    }
}

impl fmt::Display for PieceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.label)
    }
}

/// Parses `kind:square` or `kind@square`, e.g. `rook:a4`. The square label is
/// kept verbatim; it is not required to be valid.
impl FromStr for PieceRecord {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, label) = s
            .split_once(|c: char| c == ':' || c == '@')
            .ok_or_else(|| EngineError::MalformedRecord(s.to_string()))?;
        Ok(PieceRecord::new(kind.parse()?, label.trim().to_ascii_lowercase()))
    }
}

// Index into piece_bb: white piece = kind as usize; black piece = 6 + kind as usize
fn piece_index(kind: PieceKind, color: Color) -> usize {
    (color as usize) * 6 + (kind as usize)
}

/// Occupancy of all 64 squares, at most one piece per square.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    // 12 bitboards: 0-5 = white p,n,b,r,q,k; 6-11 = black p,n,b,r,q,k
    piece_bb: [u64; 12],
    white_occ: u64,
    black_occ: u64,
    occ: u64,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn piece_bb(&self, kind: PieceKind, color: Color) -> u64 {
        self.piece_bb[piece_index(kind, color)]
    }

    pub fn occupied(&self) -> u64 {
        self.occ
    }

    pub fn color_occupied(&self, color: Color) -> u64 {
        match color {
            Color::White => self.white_occ,
            Color::Black => self.black_occ,
        }
    }

    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occ & sq.bit() != 0
    }

    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        let mask = sq.bit();
        if self.occ & mask == 0 {
            return None;
        }
        let color = if self.white_occ & mask != 0 {
            Color::White
        } else {
            Color::Black
        };
        PieceKind::ALL
            .into_iter()
            .find(|&kind| self.piece_bb(kind, color) & mask != 0)
            .map(|kind| Piece::new(kind, color))
    }

    /// Put a piece on an empty square.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Result<(), EngineError> {
        if self.is_occupied(sq) {
            return Err(EngineError::SquareOccupied(sq));
        }
        self.piece_bb[piece_index(piece.kind, piece.color)] |= sq.bit();
        match piece.color {
            Color::White => self.white_occ |= sq.bit(),
            Color::Black => self.black_occ |= sq.bit(),
        }
        self.occ |= sq.bit();
        Ok(())
    }

    /// Clear a square, returning whatever stood on it.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_on(sq)?;
        let clear = !sq.bit();
        self.piece_bb[piece_index(piece.kind, piece.color)] &= clear;
        self.white_occ &= clear;
        self.black_occ &= clear;
        self.occ &= clear;
        Some(piece)
    }

    /// Occupied squares with their pieces, in ascending square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        iter_bits(self.occ).filter_map(move |i| {
            let sq = Square::from_index(i)?;
            self.piece_on(sq).map(|p| (sq, p))
        })
    }
}

// Plain text diagram, rank 8 at the top
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                match Square::new(file, rank).and_then(|sq| self.piece_on(sq)) {
                    Some(piece) => write!(f, "{} ", piece.letter())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
