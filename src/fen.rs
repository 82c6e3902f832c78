// This file is part of the tabiya library.
// Copyright (C) 2026 The tabiya authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Parse and write Forsyth-Edwards-Notation.
//!
//! Castling rights use the standard `KQkq` letters where unambiguous, or
//! a file letter naming the exact rook (Shredder-FEN, as used by UCI for
//! Chess960) where more than one rook stands on the relevant side of the
//! king. Parsing is deliberately permissive: beyond the basic structure,
//! fabricated or hand-edited input is accepted and odd castling letters
//! fall back to the conventional files instead of failing.

use std::{error::Error, fmt};

use crate::{
    color::Color,
    position::Position,
    square::Square,
    types::{CastlingMode, CastlingRights, CastlingSide, Piece},
};

/// Errors that can occur when parsing FENs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParseFenError {
    /// Fewer than the four required space-separated fields.
    MissingFields,
    /// The board field does not consist of exactly eight ranks.
    InvalidBoard,
}

impl fmt::Display for ParseFenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseFenError::MissingFields => "missing fields in fen",
            ParseFenError::InvalidBoard => "invalid board in fen",
        })
    }
}

impl Error for ParseFenError {}

fn rooks_sorted_by_file(pos: &Position, color: Color) -> Vec<Square> {
    let mut rooks: Vec<Square> = (pos.rooks & pos.by_color(color)).collect();
    rooks.sort_by_key(|sq| sq.file());
    rooks
}

/// Resolves one castling-rights letter (already lowercased) against the
/// king and the army's rooks sorted by file. Returns the wing and the
/// rook the letter names, or `None` for a letter that is not a castling
/// letter at all. A missing king or rook yields a conventional-wing
/// fallback with no rook rather than a failure.
fn castling_from_fen(
    ch: char,
    king: Option<Square>,
    rooks: &[Square],
) -> Option<(CastlingSide, Option<Square>)> {
    if !matches!(ch, 'k' | 'q' | 'a'..='h') {
        return None;
    }

    let fallback = match ch {
        'k' => CastlingSide::KingSide,
        'q' => CastlingSide::QueenSide,
        file => {
            if file >= 'e' {
                CastlingSide::KingSide
            } else {
                CastlingSide::QueenSide
            }
        }
    };

    // Support ill-formed and fabricated FENs.
    let king = match king {
        Some(king) if !rooks.is_empty() => king,
        _ => return Some((fallback, None)),
    };

    match ch {
        'k' => Some((CastlingSide::KingSide, rooks.last().copied())),
        'q' => Some((CastlingSide::QueenSide, rooks.first().copied())),
        file => {
            let file = file as u8 - b'a';
            match rooks.iter().find(|sq| sq.file() == file) {
                Some(rook) => {
                    let side = if rook.file() > king.file() {
                        CastlingSide::KingSide
                    } else {
                        CastlingSide::QueenSide
                    };
                    Some((side, Some(*rook)))
                }
                None => Some((fallback, None)),
            }
        }
    }
}

/// The letter encoding one available castling right: the standard letter
/// when the recorded rook is the outermost one on its side of the king,
/// otherwise the rook's file letter (the Chess960 ambiguity).
fn castling_to_fen(
    side: CastlingSide,
    king: Option<Square>,
    rooks: &[Square],
    recorded_file: u8,
) -> char {
    let standard = side.fold('k', 'q');

    let king = match king {
        Some(king) if !rooks.is_empty() => king,
        _ => return standard,
    };

    let wing: Vec<u8> = rooks
        .iter()
        .map(|sq| sq.file())
        .filter(|file| match side {
            CastlingSide::KingSide => *file > king.file(),
            CastlingSide::QueenSide => *file < king.file(),
        })
        .collect();

    let outermost = match side {
        CastlingSide::KingSide => wing.last(),
        CastlingSide::QueenSide => wing.first(),
    };

    match outermost {
        Some(outer) if *outer == recorded_file => standard,
        _ if wing.contains(&recorded_file) => (b'a' + recorded_file) as char,
        _ => standard,
    }
}

pub(crate) fn parse(text: &str, mode: CastlingMode) -> Result<Position, ParseFenError> {
    let mut pos = Position::empty(mode);
    let mut parts = text.split_ascii_whitespace();

    let board_part = parts.next().ok_or(ParseFenError::MissingFields)?;
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ParseFenError::InvalidBoard);
    }

    for (i, rank) in ranks.iter().enumerate() {
        let r = 7 - i as u8;
        let mut file: u32 = 0;
        for ch in rank.chars() {
            if let Some(blanks) = ch.to_digit(10) {
                file += blanks;
            } else if let Some(piece) = Piece::from_char(ch) {
                if file < 8 {
                    pos.put_piece(Square::new(file as u8, r), piece.color, piece.role);
                }
                file += 1;
            }
            // anything else in a rank is ignored
        }
    }

    let turn_part = parts.next().ok_or(ParseFenError::MissingFields)?;
    pos.turn = if turn_part == "b" {
        Color::Black
    } else {
        Color::White
    };

    let white_king = (pos.kings & pos.white).first();
    let black_king = (pos.kings & pos.black).first();
    debug_assert!(white_king.is_some(), "white has no king");
    debug_assert!(black_king.is_some(), "black has no king");
    let white_rooks = rooks_sorted_by_file(&pos, Color::White);
    let black_rooks = rooks_sorted_by_file(&pos, Color::Black);

    let castling_part = parts.next().ok_or(ParseFenError::MissingFields)?;
    if castling_part != "-" {
        for ch in castling_part.chars() {
            let color = Color::from_white(ch.is_ascii_uppercase());
            let (king, rooks) = match color {
                Color::White => (white_king, &white_rooks),
                Color::Black => (black_king, &black_rooks),
            };

            if let Some((side, rook)) = castling_from_fen(ch.to_ascii_lowercase(), king, rooks) {
                pos.castling.insert(CastlingRights::flag(color, side));
                let file = rook.map_or(side.fold(7, 0), Square::file);
                match side {
                    CastlingSide::KingSide => pos.file_of_kings_rook = file,
                    CastlingSide::QueenSide => pos.file_of_queens_rook = file,
                }
            }
        }
    }

    let ep_part = parts.next().ok_or(ParseFenError::MissingFields)?;
    if ep_part != "-" {
        pos.en_passant = ep_part.parse().ok();
    }

    if let Some(halfmove_part) = parts.next() {
        pos.halfmove_clock = btoi::btoi(halfmove_part.as_bytes()).unwrap_or(0);
    }

    if let Some(fullmove_part) = parts.next() {
        pos.halfmove_number = 2 * btoi::btoi::<u32>(fullmove_part.as_bytes()).unwrap_or(1);
    }

    Ok(pos)
}

pub(crate) fn write(pos: &Position, include_counters: bool) -> String {
    let mut fen = String::with_capacity(90);

    for rank in (0..8).rev() {
        let mut blanks = 0;
        for file in 0..8 {
            match pos.piece_at(Square::new(file, rank)) {
                Some(piece) => {
                    if blanks > 0 {
                        fen.push((b'0' + blanks) as char);
                        blanks = 0;
                    }
                    fen.push(piece.char());
                }
                None => blanks += 1,
            }
        }
        if blanks > 0 {
            fen.push((b'0' + blanks) as char);
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(pos.turn.char());

    let white_king = (pos.kings & pos.white).first();
    let black_king = (pos.kings & pos.black).first();
    let white_rooks = rooks_sorted_by_file(pos, Color::White);
    let black_rooks = rooks_sorted_by_file(pos, Color::Black);

    let mut castling = String::with_capacity(4);
    if pos.is_castle_available(Color::White, CastlingSide::KingSide) {
        castling.push(
            castling_to_fen(
                CastlingSide::KingSide,
                white_king,
                &white_rooks,
                pos.file_of_kings_rook,
            )
            .to_ascii_uppercase(),
        );
    }
    if pos.is_castle_available(Color::White, CastlingSide::QueenSide) {
        castling.push(
            castling_to_fen(
                CastlingSide::QueenSide,
                white_king,
                &white_rooks,
                pos.file_of_queens_rook,
            )
            .to_ascii_uppercase(),
        );
    }
    if pos.is_castle_available(Color::Black, CastlingSide::KingSide) {
        castling.push(castling_to_fen(
            CastlingSide::KingSide,
            black_king,
            &black_rooks,
            pos.file_of_kings_rook,
        ));
    }
    if pos.is_castle_available(Color::Black, CastlingSide::QueenSide) {
        castling.push(castling_to_fen(
            CastlingSide::QueenSide,
            black_king,
            &black_rooks,
            pos.file_of_queens_rook,
        ));
    }
    if castling.is_empty() {
        castling.push('-');
    }
    fen.push(' ');
    fen.push_str(&castling);

    fen.push(' ');
    match pos.en_passant {
        Some(sq) => fen.push_str(&sq.to_string()),
        None => fen.push('-'),
    }

    if include_counters {
        fen.push_str(&format!(" {} {}", pos.halfmove_clock, pos.fullmoves()));
    }

    fen
}
