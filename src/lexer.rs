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

use std::fmt;
use std::iter::{Enumerate, Peekable};
use std::str::Chars;
use super::face::Face;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    UnexpectedCharacter(usize, char),
}

/// Iterator over the faces needed to spell a word. A “q” followed by
/// a “u” becomes a single `Face::Qu`. Any other “q” stays on its own.
pub struct Faces<'a> {
    chars: Peekable<Enumerate<Chars<'a>>>,
}

impl<'a> Faces<'a> {
    pub fn new(word: &'a str) -> Faces<'a> {
        Faces { chars: word.chars().enumerate().peekable() }
    }
}

impl<'a> Iterator for Faces<'a> {
    type Item = Result<Face, WordError>;

    fn next(&mut self) -> Option<Result<Face, WordError>> {
        let (pos, ch) = self.chars.next()?;

        let Some(face) = Face::from_letter(ch)
        else {
            return Some(Err(WordError::UnexpectedCharacter(pos, ch)));
        };

        if face == Face::Q {
            if let Some(&(_, next_ch)) = self.chars.peek() {
                if next_ch.eq_ignore_ascii_case(&'u') {
                    self.chars.next();
                    return Some(Ok(Face::Qu));
                }
            }
        }

        Some(Ok(face))
    }
}

pub fn word_faces(word: &str) -> Result<Vec<Face>, WordError> {
    Faces::new(word).collect()
}

pub fn faces_to_word<I>(faces: I) -> String
where
    I: IntoIterator<Item = Face>
{
    faces.into_iter().map(Face::as_str).collect()
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WordError::UnexpectedCharacter(pos, ch) => {
                write!(f, "position {}: unexpected character: ", pos + 1)?;

                if ch.is_control() {
                    write!(f, "U+{:04x}", *ch as u32)
                } else {
                    write!(f, "{}", ch)
                }
            },
        }
    }
}

impl std::error::Error for WordError {}
