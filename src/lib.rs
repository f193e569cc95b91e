// Boggler – A solver for word-search dice puzzles
// Copyright (C) 2026  The Boggler authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

pub mod face;
pub mod lexer;
pub mod trie;
pub mod trie_format;
pub mod board;
pub mod dice;
pub mod feasibility;
pub mod error;
pub mod path;
pub mod word_search;
pub mod trie_search;
pub mod timer;
pub mod solution;
pub mod solve;
pub mod word_list;

pub use face::Face;
pub use board::{Board, Cell, BoardParseError};
pub use error::{SearchError, SolveError};
pub use path::Path;
pub use solution::Solution;
pub use solve::{solve_trie, solve_words, SolveOptions};
pub use trie::Trie;
