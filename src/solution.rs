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

use std::collections::BTreeSet;
use chrono::Duration;
use serde::{Serialize, Serializer};
use super::board::Board;
use super::path::Path;
use super::timer;

#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub board: Board,
    // In the order they were found. The same word can appear more
    // than once if there are different routes for it.
    pub paths: Vec<Path>,
    pub words: BTreeSet<String>,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_elapsed")]
    pub elapsed: Duration,
}

fn serialize_elapsed<S: Serializer>(
    elapsed: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(timer::milliseconds(*elapsed))
}

impl Solution {
    pub fn from_paths(board: Board, paths: Vec<Path>, elapsed: Duration) -> Solution {
        let words = paths.iter()
            .map(|path| path.word().to_string())
            .collect::<BTreeSet<String>>();

        Solution { board, paths, words, elapsed }
    }

    pub fn paths_for<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a Path> {
        self.paths.iter().filter(move |path| path.word() == word)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::Cell;
    use crate::face::Face::*;

    #[test]
    fn aggregate() {
        let board = Board::from_rows(&[[F, O], [O, F]]);
        let paths = crate::word_search::search_words(&["foo", "of", "oof"], &board)
            .unwrap();
        let n_paths = paths.len();

        let solution = Solution::from_paths(board, paths, Duration::zero());

        assert_eq!(solution.paths.len(), n_paths);
        assert_eq!(
            solution.words.iter().map(String::as_str).collect::<Vec<_>>(),
            &["foo", "of", "oof"],
        );
        assert_eq!(solution.paths_for("foo").count(), 4);
        assert_eq!(solution.paths_for("of").count(), 4);
        assert_eq!(solution.paths_for("bar").count(), 0);
    }

    #[test]
    fn json() {
        let board = Board::from_rows(&[[K, I]]);
        let path = Path::from_cells(vec![
            Cell { face: K, x: 0, y: 0 },
            Cell { face: I, x: 1, y: 0 },
        ]);
        let solution = Solution::from_paths(
            board,
            vec![path],
            Duration::microseconds(2500),
        );

        let value = serde_json::to_value(&solution).unwrap();

        assert_eq!(value["board"], serde_json::json!([["k", "i"]]));
        assert_eq!(value["words"], serde_json::json!(["ki"]));
        assert_eq!(value["paths"][0]["word"], "ki");
        assert_eq!(value["elapsed_ms"], 2.5);
    }
}
