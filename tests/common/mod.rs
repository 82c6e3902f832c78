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

use tabiya::{AttackTables, Bitboard, Color, Piece, Role, Square};

/// Ray-walking stand-in for the engine's pre-tabulated move generation
/// component. Slow but obviously correct.
pub struct Tables;

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

fn shift(sq: Square, file_delta: i8, rank_delta: i8) -> Option<Square> {
    let file = sq.file() as i8 + file_delta;
    let rank = sq.rank() as i8 + rank_delta;
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some(Square::new(file as u8, rank as u8))
    } else {
        None
    }
}

fn leaper(sq: Square, deltas: &[(i8, i8)], friends: Bitboard) -> Bitboard {
    let mut bits = Bitboard::EMPTY;
    for &(df, dr) in deltas {
        if let Some(dest) = shift(sq, df, dr) {
            if !friends.contains(dest) {
                bits.add(dest);
            }
        }
    }
    bits
}

fn slider(sq: Square, dirs: &[(i8, i8)], friends: Bitboard, enemies: Bitboard) -> Bitboard {
    let mut bits = Bitboard::EMPTY;
    for &(df, dr) in dirs {
        let mut current = sq;
        while let Some(dest) = shift(current, df, dr) {
            if friends.contains(dest) {
                break;
            }
            bits.add(dest);
            if enemies.contains(dest) {
                break;
            }
            current = dest;
        }
    }
    bits
}

impl AttackTables for Tables {
    fn attacks(
        &self,
        piece: Piece,
        square: Square,
        friends: Bitboard,
        enemies: Bitboard,
    ) -> Bitboard {
        match piece.role {
            Role::King => leaper(square, &KING_DELTAS, friends),
            Role::Knight => leaper(square, &KNIGHT_DELTAS, friends),
            Role::Bishop => slider(square, &BISHOP_DIRS, friends, enemies),
            Role::Rook => slider(square, &ROOK_DIRS, friends, enemies),
            Role::Queen => {
                slider(square, &BISHOP_DIRS, friends, enemies)
                    | slider(square, &ROOK_DIRS, friends, enemies)
            }
            Role::Pawn => {
                let dir = piece.color.fold(1, -1);
                leaper(square, &[(-1, dir), (1, dir)], friends) & enemies
            }
        }
    }

    fn pawn_pushes(
        &self,
        color: Color,
        square: Square,
        friends: Bitboard,
        enemies: Bitboard,
    ) -> Bitboard {
        let occupied = friends | enemies;
        let dir = color.fold(1, -1);
        let mut bits = Bitboard::EMPTY;

        if let Some(one) = shift(square, 0, dir) {
            if !occupied.contains(one) {
                bits.add(one);
            }
        }

        // The double push is offered whenever its destination is free;
        // rejecting a blocked jumped-over square is the engine's job.
        if square.rank() == color.fold(1, 6) {
            if let Some(two) = shift(square, 0, 2 * dir) {
                if !occupied.contains(two) {
                    bits.add(two);
                }
            }
        }

        bits
    }
}
