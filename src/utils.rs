// Bitboard masks, iterators and precomputed attack tables

use crate::board::Color;

// File masks (A is column 0, H column 7)
pub const FILE_A: u64 = 0x0101010101010101;
pub const FILE_H: u64 = 0x8080808080808080;

pub const NOT_FILE_A: u64 = !FILE_A;
pub const NOT_FILE_H: u64 = !FILE_H;

/// King steps in file-major, rank-minor order: (file delta, rank delta).
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

// Bit operations
#[inline]
pub fn pop_lsb(bb: &mut u64) -> Option<usize> {
    if *bb == 0 {
        return None;
    }
    let lsb = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    Some(lsb)
}

pub struct BitIter {
    bb: u64,
}

impl Iterator for BitIter {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        pop_lsb(&mut self.bb)
    }
}

#[inline]
pub fn iter_bits(bb: u64) -> BitIter {
    BitIter { bb }
}

// Precomputed attack tables using OnceLock for thread safety
use std::sync::OnceLock;

static KNIGHT_ATTACKS: OnceLock<[u64; 64]> = OnceLock::new();
static KING_ATTACKS: OnceLock<[u64; 64]> = OnceLock::new();

fn build_step_table(offsets: &[(i8, i8); 8]) -> [u64; 64] {
    let mut attacks = [0u64; 64];

    for (sq, mask) in attacks.iter_mut().enumerate() {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;

        for (dx, dy) in offsets {
            let new_file = file + dx;
            let new_rank = rank + dy;
            if (0..8).contains(&new_file) && (0..8).contains(&new_rank) {
                *mask |= 1u64 << (new_rank as usize * 8 + new_file as usize);
            }
        }
    }
    attacks
}

pub fn init_attack_tables() {
    KNIGHT_ATTACKS.get_or_init(|| build_step_table(&KNIGHT_OFFSETS));
    KING_ATTACKS.get_or_init(|| build_step_table(&KING_OFFSETS));
}

#[inline]
pub fn knight_attacks(sq: usize) -> u64 {
    KNIGHT_ATTACKS.get_or_init(|| build_step_table(&KNIGHT_OFFSETS))[sq]
}

#[inline]
pub fn king_attacks(sq: usize) -> u64 {
    KING_ATTACKS.get_or_init(|| build_step_table(&KING_OFFSETS))[sq]
}

/// Squares a pawn of `color` standing on `sq` attacks (diagonal captures only).
#[inline]
pub fn pawn_attacks(sq: usize, color: Color) -> u64 {
    let pawn = 1u64 << sq;
    match color {
        Color::White => ((pawn & NOT_FILE_A) << 7) | ((pawn & NOT_FILE_H) << 9),
        Color::Black => ((pawn & NOT_FILE_A) >> 9) | ((pawn & NOT_FILE_H) >> 7),
    }
}
