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

use log::trace;
use super::board::{Board, Cell};
use super::error::SearchError;
use super::feasibility;
use super::lexer;
use super::path::Path;

/// Cells that could be added to the end of the path. At the start
/// that is any cell with the right face, afterwards it is only the
/// unused neighbours of the last cell.
pub fn next_cells<'a>(
    path: &'a Path,
    board: &'a Board,
) -> Result<impl Iterator<Item = &'a Cell>, SearchError> {
    let face = path.next_face()?;

    let (anywhere, adjacent) = match path.last_cell() {
        None => (Some(board.cells().iter()), None),
        Some(last) => (
            None,
            Some(board.neighbors(last.x, last.y, path.cells())),
        ),
    };

    Ok(anywhere.into_iter()
       .flatten()
       .chain(adjacent.into_iter().flatten())
       .filter(move |cell| cell.face == face))
}

/// Grows every path in the frontier by one cell. Paths that are
/// finished are moved to `found` and the rest are returned as the new
/// frontier.
fn extend_paths(
    frontier: &[Path],
    board: &Board,
    found: &mut Vec<Path>,
) -> Result<Vec<Path>, SearchError> {
    let mut next_frontier = Vec::new();

    for path in frontier {
        for &cell in next_cells(path, board)? {
            let new_path = path.extend(cell);

            if new_path.is_complete() {
                found.push(new_path);
            } else {
                next_frontier.push(new_path);
            }
        }
    }

    Ok(next_frontier)
}

/// Finds every route that spells `word` on the board.
pub fn search_word(word: &str, board: &Board) -> Result<Vec<Path>, SearchError> {
    let faces = lexer::word_faces(word)?;

    if faces.is_empty() {
        return Err(SearchError::EmptyWord);
    }

    let mut found = Vec::new();

    if !feasibility::is_possible_faces(&faces, board.inventory()) {
        trace!("skipping “{}”: not enough faces on the board", word);
        return Ok(found);
    }

    // Paths are labelled with the text of the faces so that the case
    // of the word doesn’t matter
    let text = lexer::faces_to_word(faces.iter().copied());
    let mut frontier = vec![Path::new(text.into(), faces.into())];

    while !frontier.is_empty() {
        frontier = extend_paths(&frontier, board, &mut found)?;
    }

    if !found.is_empty() {
        trace!("found {} paths for “{}”", found.len(), word);
    }

    Ok(found)
}

pub fn search_words<S>(words: &[S], board: &Board) -> Result<Vec<Path>, SearchError>
where
    S: AsRef<str>
{
    let mut paths = Vec::new();

    for word in words {
        paths.extend(search_word(word.as_ref(), board)?);
    }

    Ok(paths)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::face::Face::{self, *};

    fn sorted_positions(paths: &[Path]) -> Vec<Vec<(usize, usize)>> {
        let mut positions = paths.iter().map(Path::positions).collect::<Vec<_>>();
        positions.sort();
        positions
    }

    #[test]
    fn every_route_is_found() {
        let board = Board::from_rows(&[[F, O], [O, F]]);
        let paths = search_word("foo", &board).unwrap();

        assert_eq!(paths.len(), 4);
        assert!(paths.iter().all(|path| path.word() == "foo"));
        assert_eq!(
            sorted_positions(&paths),
            &[
                vec![(0, 0), (0, 1), (1, 0)],
                vec![(0, 0), (1, 0), (0, 1)],
                vec![(1, 1), (0, 1), (1, 0)],
                vec![(1, 1), (1, 0), (0, 1)],
            ],
        );
    }

    #[test]
    fn no_reuse() {
        let board = Board::from_rows(&[[F, O], [X, X]]);

        // There is only one “o” so “foo” would need to use it twice
        assert!(search_word("foo", &board).unwrap().is_empty());
        assert_eq!(search_word("fo", &board).unwrap().len(), 1);
        assert!(search_word("fof", &board).unwrap().is_empty());
    }

    #[test]
    fn adjacency_matters() {
        // Enough faces but the two “a”s aren’t next to the “b”
        let board = Board::from_rows(&[[B, X, A], [X, X, A]]);

        assert!(search_word("baa", &board).unwrap().is_empty());
        assert_eq!(search_word("xaa", &board).unwrap().len(), 4);
    }

    #[test]
    fn qu_face() {
        let board = Board::from_rows(&[[Qu, I], [K, Z]]);

        let paths = search_word("quiz", &board).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].faces(), &[Qu, I, Z]);
        assert_eq!(paths[0].positions(), &[(0, 0), (1, 0), (1, 1)]);

        // “qi” needs a plain “q” face
        assert!(search_word("qi", &board).unwrap().is_empty());
        assert!(search_word("quiqu", &board).unwrap().is_empty());
    }

    #[test]
    fn single_face_words() {
        let board = Board::from_rows(&[[A, Qu], [A, B]]);

        assert_eq!(search_word("a", &board).unwrap().len(), 2);
        assert_eq!(search_word("qu", &board).unwrap().len(), 1);
        assert!(search_word("q", &board).unwrap().is_empty());
    }

    #[test]
    fn not_found_is_not_an_error() {
        let board = Board::from_rows(&[[B, A], [R, K]]);

        assert_eq!(search_word("foo", &board).map(|p| p.len()), Ok(0));
        assert_eq!(search_word("bark", &board).map(|p| p.len()), Ok(1));
    }

    #[test]
    fn invalid_words() {
        let board = Board::from_rows(&[[B, A], [R, K]]);

        assert_eq!(search_word("", &board).unwrap_err(), SearchError::EmptyWord);
        assert!(matches!(
            search_word("b4r", &board),
            Err(SearchError::Word(_)),
        ));
        assert_eq!(
            search_words(&["bar", "", "ark"], &board).unwrap_err(),
            SearchError::EmptyWord,
        );
    }

    #[test]
    fn next_cells_past_the_end() {
        let board = Board::from_rows(&[[B, A], [R, K]]);
        let path = search_word("ba", &board).unwrap().pop().unwrap();

        assert!(path.is_complete());
        assert!(matches!(
            next_cells(&path, &board),
            Err(SearchError::PathComplete { length: 2, .. }),
        ));
    }

    #[test]
    fn word_is_normalised() {
        let board = Board::from_rows(&[[B, A], [R, K]]);

        let paths = search_word("BaR", &board).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].word(), "bar");

        let board = Board::from_rows(&[[Qu, I], [K, Z]]);
        let paths = search_word("QUIZ", &board).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].word(), "quiz");
    }

    #[test]
    fn search_list() {
        let board = Board::from_rows(&[[B, A], [R, K]]);
        let paths = search_words(&["foo", "bar", "baz", "eck"], &board)
            .unwrap();

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].word(), "bar");
        assert_eq!(paths[0].positions(), &[(0, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn path_faces_match_board() {
        let board = Board::from_rows(&[
            [T, E, S, T],
            [S, E, T, E],
            [E, T, S, E],
        ]);

        for word in ["test", "sets", "settee", "tee"] {
            let faces = lexer::word_faces(word).unwrap();

            for path in search_word(word, &board).unwrap() {
                assert_eq!(
                    path.cells().iter().map(|c| c.face).collect::<Vec<Face>>(),
                    faces,
                );

                for pair in path.cells().windows(2) {
                    assert!(pair[0].x.abs_diff(pair[1].x) <= 1);
                    assert!(pair[0].y.abs_diff(pair[1].y) <= 1);
                }

                for (i, a) in path.cells().iter().enumerate() {
                    for b in &path.cells()[i + 1..] {
                        assert!(!a.same_position(b));
                    }
                }
            }
        }
    }
}
