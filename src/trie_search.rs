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
use super::path::Path;
use super::trie::{Trie, NodeRef};

struct StackEntry<'a> {
    cell: Cell,
    // Trie node for the path before this cell is added
    parent: NodeRef<'a>,
    // Number of cells in the path before this one
    depth: usize,
}

/// Walks the board and the trie together starting from the cell at
/// (x, y) and returns a path for every word in the trie that it
/// spells.
pub fn search_from_cell(
    board: &Board,
    trie: &Trie,
    x: usize,
    y: usize,
) -> Vec<Path> {
    let mut found = Vec::new();

    let Some(&start) = board.cell(x, y)
    else {
        return found;
    };

    let mut path = Vec::<Cell>::new();
    let mut stack = vec![StackEntry {
        cell: start,
        parent: trie.root(),
        depth: 0,
    }];

    while let Some(entry) = stack.pop() {
        // Everything in the path after the depth belongs to a branch
        // that has already been explored
        path.truncate(entry.depth);

        let Some(node) = entry.parent.child(entry.cell.face)
        else {
            continue;
        };

        path.push(entry.cell);

        if node.is_terminal() {
            found.push(Path::from_cells(path.clone()));
        }

        if node.first_child().is_none() {
            continue;
        }

        let first_new = stack.len();

        for &neighbor in board.neighbors(entry.cell.x, entry.cell.y, &path) {
            stack.push(StackEntry {
                cell: neighbor,
                parent: node,
                depth: path.len(),
            });
        }

        // Visit the neighbours in the board’s order
        stack[first_new..].reverse();
    }

    trace!("found {} paths starting at ({}, {})", found.len(), x, y);

    found
}

/// Runs `search_from_cell` for every cell of the board in turn.
pub fn search_trie(board: &Board, trie: &Trie) -> Vec<Path> {
    board.cells()
        .iter()
        .flat_map(|cell| search_from_cell(board, trie, cell.x, cell.y))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::face::Face::*;

    fn words_of(paths: &[Path]) -> Vec<&str> {
        paths.iter().map(Path::word).collect()
    }

    #[test]
    fn quiz() {
        let board = Board::from_rows(&[[Qu, I], [K, Z]]);
        let trie = Trie::from_words(["quiz", "ki", "quick", "zoo", "qi"])
            .unwrap();

        let paths = search_trie(&board, &trie);

        let mut words = words_of(&paths);
        words.sort();
        assert_eq!(&words, &["ki", "quiz"]);

        let quiz = paths.iter().find(|p| p.word() == "quiz").unwrap();
        assert_eq!(quiz.positions(), &[(0, 0), (1, 0), (1, 1)]);
    }

    #[test]
    fn prefixes_and_longer_words() {
        let board = Board::from_rows(&[[H, O], [X, W]]);
        let trie = Trie::from_words(["ho", "how", "howl"]).unwrap();

        let paths = search_from_cell(&board, &trie, 0, 0);

        assert_eq!(words_of(&paths), &["ho", "how"]);
        assert!(search_from_cell(&board, &trie, 1, 0).is_empty());
    }

    #[test]
    fn every_route_is_found() {
        let board = Board::from_rows(&[[F, O], [O, F]]);
        let trie = Trie::from_words(["foo"]).unwrap();

        let mut positions = search_trie(&board, &trie)
            .iter()
            .map(Path::positions)
            .collect::<Vec<_>>();
        positions.sort();

        assert_eq!(
            positions,
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
        let board = Board::from_rows(&[[A, B]]);
        let trie = Trie::from_words(["aba", "ab", "ba"]).unwrap();

        let found = search_trie(&board, &trie);
        let mut words = words_of(&found);
        words.sort();

        assert_eq!(&words, &["ab", "ba"]);
    }

    #[test]
    fn single_face_words() {
        let board = Board::from_rows(&[[A, Qu], [A, B]]);
        let trie = Trie::from_words(["a", "qu", "q"]).unwrap();

        let found = search_trie(&board, &trie);
        let mut words = words_of(&found);
        words.sort();

        assert_eq!(&words, &["a", "a", "qu"]);
    }

    #[test]
    fn outside_the_board() {
        let board = Board::from_rows(&[[A]]);
        let trie = Trie::from_words(["a"]).unwrap();

        assert!(search_from_cell(&board, &trie, 1, 0).is_empty());
        assert_eq!(search_from_cell(&board, &trie, 0, 0).len(), 1);
    }

    #[test]
    fn empty_trie() {
        let board = Board::from_rows(&[[A, B], [C, D]]);
        assert!(search_trie(&board, &Trie::new()).is_empty());
    }
}
