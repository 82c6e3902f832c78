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

use bitflags::bitflags;

use crate::{color::Color, role::Role};

/// A piece with [`Color`] and [`Role`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// The FEN letter, uppercase for white and lowercase for black.
    pub fn char(self) -> char {
        self.color
            .fold(self.role.upper_char(), self.role.char())
    }

    /// Gets the piece from its FEN letter.
    pub fn from_char(ch: char) -> Option<Piece> {
        Role::from_char(ch)
            .map(|role| role.of(Color::from_white(ch.is_ascii_uppercase())))
    }
}

/// `KingSide` (O-O) or `QueenSide` (O-O-O).
#[allow(missing_docs)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastlingSide {
    #[default]
    KingSide,
    QueenSide,
}

impl CastlingSide {
    #[inline]
    pub const fn is_king_side(self) -> bool {
        matches!(self, CastlingSide::KingSide)
    }

    #[inline]
    pub const fn is_queen_side(self) -> bool {
        matches!(self, CastlingSide::QueenSide)
    }

    /// Selects `king_side` or `queen_side` depending on the wing.
    #[inline]
    pub fn fold<T>(self, king_side: T, queen_side: T) -> T {
        match self {
            CastlingSide::KingSide => king_side,
            CastlingSide::QueenSide => queen_side,
        }
    }

    /// The file the king lands on when castling to this wing, `6` or `2`.
    #[inline]
    pub fn king_to_file(self) -> u8 {
        self.fold(6, 2)
    }

    /// The file the castling rook lands on, `5` or `3`.
    #[inline]
    pub fn rook_to_file(self) -> u8 {
        self.fold(5, 3)
    }

    /// `KingSide` and `QueenSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];
}

/// `Standard` or `Chess960`.
///
/// Decides how king moves are interpreted when completing a partial move:
/// in Chess960 a king move onto one of its own castling rooks is a castle.
/// Threaded explicitly into [`Position`](crate::Position) construction so
/// that concurrent searches can run with different variant settings.
#[allow(missing_docs)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastlingMode {
    #[default]
    Standard,
    Chess960,
}

impl CastlingMode {
    pub const fn from_chess960(chess960: bool) -> CastlingMode {
        if chess960 {
            CastlingMode::Chess960
        } else {
            CastlingMode::Standard
        }
    }

    #[inline]
    pub const fn is_standard(self) -> bool {
        matches!(self, CastlingMode::Standard)
    }

    #[inline]
    pub const fn is_chess960(self) -> bool {
        matches!(self, CastlingMode::Chess960)
    }
}

bitflags! {
    /// The four independent castling permissions, one per army and wing.
    ///
    /// Tracks only whether a right has been forfeited. Which file the
    /// corresponding rook started on is remembered separately by the
    /// position, since Chess960 start positions place rooks on arbitrary
    /// files.
    #[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
    pub struct CastlingRights: u8 {
        const WHITE_KING_SIDE = 1;
        const WHITE_QUEEN_SIDE = 1 << 1;
        const BLACK_KING_SIDE = 1 << 2;
        const BLACK_QUEEN_SIDE = 1 << 3;
    }
}

impl CastlingRights {
    /// The flag for one army and wing.
    pub fn flag(color: Color, side: CastlingSide) -> CastlingRights {
        match (color, side) {
            (Color::White, CastlingSide::KingSide) => CastlingRights::WHITE_KING_SIDE,
            (Color::White, CastlingSide::QueenSide) => CastlingRights::WHITE_QUEEN_SIDE,
            (Color::Black, CastlingSide::KingSide) => CastlingRights::BLACK_KING_SIDE,
            (Color::Black, CastlingSide::QueenSide) => CastlingRights::BLACK_QUEEN_SIDE,
        }
    }

    /// Both flags of one army.
    pub fn both(color: Color) -> CastlingRights {
        CastlingRights::flag(color, CastlingSide::KingSide)
            | CastlingRights::flag(color, CastlingSide::QueenSide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_char() {
        assert_eq!(Piece::from_char('K'), Some(Role::King.of(Color::White)));
        assert_eq!(Piece::from_char('p'), Some(Role::Pawn.of(Color::Black)));
        assert_eq!(Piece::from_char('-'), None);
        assert_eq!(Role::Queen.of(Color::Black).char(), 'q');
        assert_eq!(Role::Queen.of(Color::White).char(), 'Q');
    }

    #[test]
    fn test_castling_files() {
        assert_eq!(CastlingSide::KingSide.king_to_file(), 6);
        assert_eq!(CastlingSide::KingSide.rook_to_file(), 5);
        assert_eq!(CastlingSide::QueenSide.king_to_file(), 2);
        assert_eq!(CastlingSide::QueenSide.rook_to_file(), 3);
    }

    #[test]
    fn test_rights_flags() {
        let mut rights = CastlingRights::all();
        rights.remove(CastlingRights::both(Color::White));
        assert!(!rights.contains(CastlingRights::WHITE_KING_SIDE));
        assert!(!rights.contains(CastlingRights::WHITE_QUEEN_SIDE));
        assert!(rights.contains(CastlingRights::flag(Color::Black, CastlingSide::KingSide)));
        assert!(rights.contains(CastlingRights::flag(Color::Black, CastlingSide::QueenSide)));
    }
}
