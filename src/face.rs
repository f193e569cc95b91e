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
use std::str::FromStr;
use serde::{Serialize, Serializer, Deserialize, Deserializer, de};

pub const N_FACES: usize = 27;

/// The face of a die. Every letter can be a face on its own and “qu”
/// is an extra face that is always spelled as one unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, Qu, R, S, T, U, V, W, X, Y, Z,
}

static FACES: [Face; N_FACES] = [
    Face::A, Face::B, Face::C, Face::D, Face::E, Face::F, Face::G,
    Face::H, Face::I, Face::J, Face::K, Face::L, Face::M, Face::N,
    Face::O, Face::P, Face::Q, Face::Qu, Face::R, Face::S, Face::T,
    Face::U, Face::V, Face::W, Face::X, Face::Y, Face::Z,
];

static FACE_TEXT: [&str; N_FACES] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n",
    "o", "p", "q", "qu", "r", "s", "t", "u", "v", "w", "x", "y", "z",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceParseError(pub String);

impl Face {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Face> {
        FACES.get(index).copied()
    }

    pub fn all() -> impl Iterator<Item = Face> {
        FACES.iter().copied()
    }

    /// Returns the single-letter face for a letter. This never returns
    /// `Face::Qu` because that needs two letters.
    pub fn from_letter(ch: char) -> Option<Face> {
        let ch = ch.to_ascii_lowercase();

        if !ch.is_ascii_lowercase() {
            return None;
        }

        let offset = (ch as u8 - b'a') as usize;

        // Everything after “q” is shifted along by one to make room
        // for “qu”
        if ch > 'q' {
            Face::from_index(offset + 1)
        } else {
            Face::from_index(offset)
        }
    }

    pub fn as_str(self) -> &'static str {
        FACE_TEXT[self.index()]
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Face {
    type Err = FaceParseError;

    fn from_str(s: &str) -> Result<Face, FaceParseError> {
        Face::all()
            .find(|face| s.eq_ignore_ascii_case(face.as_str()))
            .ok_or_else(|| FaceParseError(s.into()))
    }
}

impl fmt::Display for FaceParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "“{}” is not a die face", self.0)
    }
}

impl std::error::Error for FaceParseError {}

impl Serialize for Face {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

struct FaceVisitor;

impl<'de> de::Visitor<'de> for FaceVisitor {
    type Value = Face;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a single letter or “qu”")
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Face, E> {
        s.parse::<Face>().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Face {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Face, D::Error> {
        deserializer.deserialize_str(FaceVisitor)
    }
}
