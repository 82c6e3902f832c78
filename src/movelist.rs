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

use arrayvec::ArrayVec;

use crate::moves::Move;

/// A container for moves that can be stored inline on the stack.
pub type MoveList = ArrayVec<Move, 512>;

/// Receiver for generated moves.
///
/// [`Position::pseudo_legal_moves`](crate::Position::pseudo_legal_moves)
/// hands every generated move to the sink exactly once, in generation
/// order. A search tree node under construction implements this to build
/// its children; [`MoveList`] and `Vec<Move>` are provided for plain
/// collection.
pub trait MoveSink {
    /// Called once per generated move.
    fn accept(&mut self, mv: Move);
}

impl MoveSink for MoveList {
    fn accept(&mut self, mv: Move) {
        self.push(mv);
    }
}

impl MoveSink for Vec<Move> {
    fn accept(&mut self, mv: Move) {
        self.push(mv);
    }
}
