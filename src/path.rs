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

use std::sync::Arc;
use serde::Serialize;
use super::board::Cell;
use super::error::SearchError;
use super::face::Face;
use super::lexer;

/// A route through the board that spells, or is on the way to
/// spelling, a word. The word and its faces are shared between all of
/// the paths of one search.
#[derive(Debug, Clone, Serialize)]
pub struct Path {
    word: Arc<str>,
    faces: Arc<[Face]>,
    cells: Vec<Cell>,
}

impl Path {
    pub fn new(word: Arc<str>, faces: Arc<[Face]>) -> Path {
        Path {
            word,
            faces,
            cells: Vec::new(),
        }
    }

    /// Makes a complete path out of a list of cells. The word is
    /// whatever the faces of the cells spell.
    pub fn from_cells(cells: Vec<Cell>) -> Path {
        let faces = cells.iter().map(|cell| cell.face).collect::<Arc<[Face]>>();
        let word = lexer::faces_to_word(faces.iter().copied());

        Path {
            word: word.into(),
            faces,
            cells,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn last_cell(&self) -> Option<&Cell> {
        self.cells.last()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.len() == self.faces.len()
    }

    /// The face that the next cell added to the path has to have.
    pub fn next_face(&self) -> Result<Face, SearchError> {
        self.faces.get(self.cells.len())
            .copied()
            .ok_or_else(|| SearchError::PathComplete {
                word: self.word.to_string(),
                length: self.faces.len(),
            })
    }

    pub fn extend(&self, cell: Cell) -> Path {
        let mut cells = Vec::with_capacity(self.cells.len() + 1);
        cells.extend_from_slice(&self.cells);
        cells.push(cell);

        Path {
            word: Arc::clone(&self.word),
            faces: Arc::clone(&self.faces),
            cells,
        }
    }

    pub fn positions(&self) -> Vec<(usize, usize)> {
        self.cells.iter().map(|cell| (cell.x, cell.y)).collect()
    }
}
