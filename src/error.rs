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
use super::lexer::WordError;

/// Reasons a search stops without a result. Not finding a word is
/// not an error and gives an empty list of paths instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    EmptyWord,
    Word(WordError),
    // A path was asked for the face after its last one
    PathComplete { word: String, length: usize },
}

#[derive(Debug)]
pub enum SolveError {
    Search(SearchError),
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl From<WordError> for SearchError {
    fn from(e: WordError) -> SearchError {
        SearchError::Word(e)
    }
}

impl From<SearchError> for SolveError {
    fn from(e: SearchError) -> SolveError {
        SolveError::Search(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for SolveError {
    fn from(e: rayon::ThreadPoolBuildError) -> SolveError {
        SolveError::ThreadPool(e)
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchError::EmptyWord => write!(f, "can’t search for an empty word"),
            SearchError::Word(e) => write!(f, "{}", e),
            SearchError::PathComplete { word, length } => {
                write!(
                    f,
                    "path for “{}” already has all {} faces",
                    word,
                    length,
                )
            },
        }
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::Search(e) => write!(f, "{}", e),
            SolveError::ThreadPool(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Word(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Search(e) => Some(e),
            SolveError::ThreadPool(e) => Some(e),
        }
    }
}
