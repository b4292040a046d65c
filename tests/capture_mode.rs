use scacco::{find_captures, Capturer, EngineError, PieceKind, PieceRecord};

fn parse_all(list: &[&str]) -> Vec<PieceRecord> {
    list.iter()
        .map(|s| s.parse().expect("well-formed record"))
        .collect()
}

fn labels(records: &[PieceRecord]) -> Vec<&str> {
    records.iter().map(|r| r.label.as_str()).collect()
}

#[test]
fn king_captures_every_adjacent_piece() {
    let black = parse_all(&["pawn:d4", "pawn:d5", "pawn:f5", "pawn:f4"]);
    let found = find_captures(Capturer::King, "e4", &black);
    assert_eq!(labels(&found), vec!["d4", "d5", "f5", "f4"]);
}

#[test]
fn pawn_captures_diagonally_forward() {
    let black = parse_all(&["knight:d5", "rook:e5", "bishop:f5"]);
    let found = find_captures(Capturer::Pawn, "e4", &black);
    assert_eq!(labels(&found), vec!["d5", "f5"]);
}

#[test]
fn pawn_never_captures_backwards() {
    let black = parse_all(&["queen:d3", "queen:f3", "rook:d4"]);
    assert!(find_captures(Capturer::Pawn, "e4", &black).is_empty());
}

#[test]
fn edge_pawn_has_one_diagonal() {
    let black = parse_all(&["pawn:b3", "pawn:h3"]);
    let found = find_captures(Capturer::Pawn, "a2", &black);
    assert_eq!(labels(&found), vec!["b3"]);
}

#[test]
fn sliding_pieces_in_the_way_do_not_matter() {
    // a king reaches adjacent squares regardless of what stands around it
    let black = parse_all(&["rook:e5", "rook:e6", "queen:e3"]);
    let found = find_captures(Capturer::King, "e4", &black);
    assert_eq!(labels(&found), vec!["e5", "e3"]);
}

#[test]
fn white_piece_must_be_king_or_pawn() {
    let white: PieceRecord = "queen:d1".parse().expect("well-formed record");
    assert_eq!(
        Capturer::try_from(white.kind),
        Err(EngineError::UnsupportedCapturer(PieceKind::Queen))
    );
}
