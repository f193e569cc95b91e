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

use super::face::{Face, N_FACES};
use super::lexer;
use super::error::SearchError;

/// The number of times each face appears in a word or on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCounts {
    counts: [u32; N_FACES],
}

impl FaceCounts {
    pub fn new() -> FaceCounts {
        FaceCounts { counts: [0; N_FACES] }
    }

    pub fn from_faces<I>(faces: I) -> FaceCounts
    where
        I: IntoIterator<Item = Face>
    {
        let mut counts = FaceCounts::new();

        for face in faces {
            counts.push(face);
        }

        counts
    }

    pub fn push(&mut self, face: Face) {
        self.counts[face.index()] += 1;
    }

    pub fn count(&self, face: Face) -> u32 {
        self.counts[face.index()]
    }

    /// Returns true if every face in `other` appears in `self` at
    /// least as many times.
    pub fn covers(&self, other: &FaceCounts) -> bool {
        self.counts.iter()
            .zip(other.counts.iter())
            .all(|(have, need)| have >= need)
    }
}

impl Default for FaceCounts {
    fn default() -> FaceCounts {
        FaceCounts::new()
    }
}

/// Quick check to reject words that can’t be made from the faces on
/// the board no matter how they are arranged. A true result doesn’t
/// mean the word can be found.
pub fn is_possible<I>(word: &str, board_faces: I) -> Result<bool, SearchError>
where
    I: IntoIterator<Item = Face>
{
    let faces = lexer::word_faces(word)?;

    if faces.is_empty() {
        return Err(SearchError::EmptyWord);
    }

    Ok(is_possible_faces(&faces, &FaceCounts::from_faces(board_faces)))
}

pub fn is_possible_faces(faces: &[Face], inventory: &FaceCounts) -> bool {
    inventory.covers(&FaceCounts::from_faces(faces.iter().copied()))
}
