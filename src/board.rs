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
use super::face::Face;
use super::feasibility::FaceCounts;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub face: Face,
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn same_position(&self, other: &Cell) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// A rectangular grid of die faces. (0, 0) is the top-left.
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    // Row-major
    cells: Vec<Cell>,
    inventory: FaceCounts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    BadFace(usize, String),
    RaggedLine(usize),
    Empty,
}

// Offsets to the eight neighbours, going along the row above, then
// the same row and then the row below
static DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

impl Board {
    /// Builds a board from a list of rows. All of the rows must have
    /// the same length.
    pub fn from_rows<R>(rows: &[R]) -> Board
    where
        R: AsRef<[Face]>
    {
        let width = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        let height = if width == 0 { 0 } else { rows.len() };

        debug_assert!(
            rows.iter().all(|row| row.as_ref().len() == width),
            "board rows must all have the same length",
        );

        let cells = rows.iter()
            .take(height)
            .enumerate()
            .flat_map(|(y, row)| {
                row.as_ref().iter().enumerate().map(move |(x, &face)| {
                    Cell { face, x, y }
                })
            })
            .collect::<Vec<Cell>>();

        let mut board = Board {
            width,
            height,
            cells,
            inventory: FaceCounts::new(),
        };

        board.inventory = FaceCounts::from_faces(board.faces());

        board
    }

    fn check_rows(rows: &[Vec<Face>]) -> Result<(), BoardParseError> {
        let Some(first) = rows.first()
        else {
            return Err(BoardParseError::Empty);
        };

        if first.is_empty() {
            return Err(BoardParseError::Empty);
        }

        match rows.iter().position(|row| row.len() != first.len()) {
            Some(line_num) => Err(BoardParseError::RaggedLine(line_num)),
            None => Ok(()),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[y * self.width + x])
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.cells.iter().map(|cell| cell.face)
    }

    /// How many times each face appears on the board
    pub fn inventory(&self) -> &FaceCounts {
        &self.inventory
    }

    /// Iterates the cells touching (x, y), including diagonally,
    /// skipping any cell whose position is in `exclude`.
    pub fn neighbors<'a>(
        &'a self,
        x: usize,
        y: usize,
        exclude: &'a [Cell],
    ) -> Neighbors<'a> {
        Neighbors {
            board: self,
            x,
            y,
            exclude,
            next_direction: 0,
        }
    }
}

pub struct Neighbors<'a> {
    board: &'a Board,
    x: usize,
    y: usize,
    exclude: &'a [Cell],
    next_direction: usize,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<&'a Cell> {
        loop {
            let &(dx, dy) = DIRECTIONS.get(self.next_direction)?;

            self.next_direction += 1;

            let (Some(x), Some(y)) = (
                self.x.checked_add_signed(dx),
                self.y.checked_add_signed(dy),
            )
            else {
                continue;
            };

            let Some(cell) = self.board.cell(x, y)
            else {
                continue;
            };

            if self.exclude.iter().any(|used| used.same_position(cell)) {
                continue;
            }

            break Some(cell);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }

            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }

                write!(f, "{}", cell.face)?;
            }
        }

        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Board, BoardParseError> {
        let mut rows = Vec::<Vec<Face>>::new();

        for (line_num, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let row = line.split_whitespace()
                .map(|text| {
                    text.parse::<Face>().map_err(|_| {
                        BoardParseError::BadFace(line_num, text.to_string())
                    })
                })
                .collect::<Result<Vec<Face>, BoardParseError>>()?;

            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(BoardParseError::RaggedLine(line_num));
                }
            }

            rows.push(row);
        }

        Board::check_rows(&rows)?;

        Ok(Board::from_rows(&rows))
    }
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardParseError::BadFace(line_num, text) => {
                write!(f, "line {}: “{}” is not a die face", line_num + 1, text)
            },
            BoardParseError::RaggedLine(line_num) => {
                write!(
                    f,
                    "line {}: row has a different length from the first row",
                    line_num + 1,
                )
            },
            BoardParseError::Empty => write!(f, "the board is empty"),
        }
    }
}

impl std::error::Error for BoardParseError {}

// In JSON a board is the list of rows of faces
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows().map(|row| {
            row.iter().map(|cell| cell.face).collect::<Vec<Face>>()
        }))
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Board, D::Error> {
        let rows = Vec::<Vec<Face>>::deserialize(deserializer)?;

        Board::check_rows(&rows).map_err(<D::Error as de::Error>::custom)?;

        Ok(Board::from_rows(&rows))
    }
}
