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

use log::debug;
use rayon::prelude::*;
use super::board::Board;
use super::error::{SearchError, SolveError};
use super::path::Path;
use super::solution::Solution;
use super::timer::Timer;
use super::trie::Trie;
use super::trie_search;
use super::word_search;

pub const DEFAULT_CHUNK_SIZE: usize = 1000;

#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Number of words that each parallel task searches for
    pub chunk_size: usize,
    /// Size of a dedicated thread pool. If this is `None` then
    /// rayon’s global pool is used.
    pub threads: Option<usize>,
}

impl Default for SolveOptions {
    fn default() -> SolveOptions {
        SolveOptions {
            chunk_size: DEFAULT_CHUNK_SIZE,
            threads: None,
        }
    }
}

fn run_in_pool<T, F>(options: &SolveOptions, job: F) -> Result<T, SolveError>
where
    F: FnOnce() -> T + Send,
    T: Send,
{
    match options.threads {
        None => Ok(job()),
        Some(n_threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n_threads)
                .build()?;
            Ok(pool.install(job))
        },
    }
}

/// Searches the board for every word in the list. The list is split
/// into chunks which are searched in parallel. If any word is invalid
/// the whole solve fails.
pub fn solve_words<S>(
    board: &Board,
    words: &[S],
    options: &SolveOptions,
) -> Result<Solution, SolveError>
where
    S: AsRef<str> + Sync
{
    let timer = Timer::start();
    let chunk_size = options.chunk_size.max(1);

    debug!(
        "searching for {} words in chunks of {}",
        words.len(),
        chunk_size,
    );

    let chunks = run_in_pool(options, || {
        words.par_chunks(chunk_size)
            .map(|chunk| word_search::search_words(chunk, board))
            .collect::<Result<Vec<Vec<Path>>, SearchError>>()
    })??;

    let paths = chunks.into_iter().flatten().collect::<Vec<Path>>();

    debug!("found {} paths", paths.len());

    Ok(Solution::from_paths(board.clone(), paths, timer.elapsed()))
}

/// Finds every word of the trie on the board by starting a search from
/// each cell in parallel.
pub fn solve_trie(
    board: &Board,
    trie: &Trie,
    options: &SolveOptions,
) -> Result<Solution, SolveError> {
    let timer = Timer::start();

    debug!(
        "searching a {}×{} board for {} words",
        board.width(),
        board.height(),
        trie.len(),
    );

    let per_cell = run_in_pool(options, || {
        board.cells()
            .par_iter()
            .map(|cell| trie_search::search_from_cell(board, trie, cell.x, cell.y))
            .collect::<Vec<Vec<Path>>>()
    })?;

    let paths = per_cell.into_iter().flatten().collect::<Vec<Path>>();

    debug!("found {} paths", paths.len());

    Ok(Solution::from_paths(board.clone(), paths, timer.elapsed()))
}
