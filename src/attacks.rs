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

//! The seam to the external attack-table component.

use crate::{bitboard::Bitboard, color::Color, square::Square, types::Piece};

/// Per-piece reachability, supplied by an external, typically
/// pre-tabulated move-generation component.
///
/// Both methods are pure functions of the arguments: the position engine
/// calls them square by square and aggregates the results into attack
/// boards, so implementations must not assume anything about the board
/// beyond the two occupancy masks passed in.
pub trait AttackTables {
    /// The squares a piece standing on `square` attacks, given the
    /// occupancy of its own army (`friends`, excluded from the result)
    /// and of the opposing army (`enemies`, blocking but capturable).
    ///
    /// For pawns this is the capture pattern only: the diagonal squares
    /// ahead, intersected with `enemies`. Quiet pawn advances go through
    /// [`pawn_pushes`](AttackTables::pawn_pushes) instead.
    fn attacks(&self, piece: Piece, square: Square, friends: Bitboard, enemies: Bitboard)
        -> Bitboard;

    /// The quiet forward moves of a pawn: the single push, plus the double
    /// push from the pawn's starting rank. Occupied destinations are
    /// excluded; rejecting a double push whose jumped-over square is
    /// occupied is the caller's job.
    fn pawn_pushes(
        &self,
        color: Color,
        square: Square,
        friends: Bitboard,
        enemies: Bitboard,
    ) -> Bitboard;
}
