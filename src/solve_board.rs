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

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use clap::{ArgGroup, Parser};
use env_logger::Env;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use boggler::{dice, timer, trie_format, word_list};
use boggler::{Board, Solution, SolveOptions, Trie};
use boggler::solve::DEFAULT_CHUNK_SIZE;

#[derive(Debug, Clone, Copy)]
struct BoardSize {
    width: usize,
    height: usize,
}

impl FromStr for BoardSize {
    type Err = String;

    fn from_str(s: &str) -> Result<BoardSize, String> {
        let Some((width, height)) = s.split_once(['x', 'X', '×'])
        else {
            return Err("size should be like 4x4".to_string());
        };

        let parse_part = |part: &str| match part.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(format!("invalid board dimension: {}", part)),
        };

        Ok(BoardSize {
            width: parse_part(width)?,
            height: parse_part(height)?,
        })
    }
}

#[derive(Debug, Parser)]
#[command(about = "Finds every word hidden in a board of letter dice")]
#[command(group(ArgGroup::new("source").required(true).args(["board", "random"])))]
#[command(group(ArgGroup::new("lexicon").required(true).args(["words", "trie"])))]
struct Args {
    /// File containing the board, either as rows of faces separated
    /// by spaces or as a JSON array of rows. Use “-” for stdin.
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Roll the standard dice to make a random board of the given
    /// size, eg 4x4
    #[arg(short, long)]
    random: Option<BoardSize>,

    /// Seed for the random board
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Word list to search for, either one word per line or a JSON
    /// array of strings
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Trie JSON file made with make-trie
    #[arg(short, long)]
    trie: Option<PathBuf>,

    /// Number of words that each thread searches for at a time
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Number of threads to use instead of one per CPU
    #[arg(long)]
    threads: Option<usize>,

    /// Print the route through the board for every word
    #[arg(short, long)]
    paths: bool,

    /// Print the solution as JSON
    #[arg(long)]
    json: bool,
}

fn read_input(path: &Path) -> Result<String, ()> {
    let mut text = String::new();

    let result = if path.as_os_str() == "-" {
        io::stdin().read_to_string(&mut text)
    } else {
        File::open(path).and_then(|mut file| file.read_to_string(&mut text))
    };

    match result {
        Ok(_) => Ok(text),
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            Err(())
        },
    }
}

fn load_board(path: &Path) -> Result<Board, ()> {
    let text = read_input(path)?;

    if text.trim_start().starts_with('[') {
        serde_json::from_str::<Board>(&text).map_err(|e| {
            eprintln!("{}: {}", path.display(), e);
        })
    } else {
        text.parse::<Board>().map_err(|e| {
            eprintln!("{}: {}", path.display(), e);
        })
    }
}

fn make_board(args: &Args) -> Result<Board, ()> {
    if let Some(path) = args.board.as_ref() {
        return load_board(path);
    }

    let Some(size) = args.random
    else {
        return Err(());
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    Ok(dice::roll_board(size.width, size.height, &mut rng))
}

fn load_words(path: &Path) -> Result<Vec<String>, ()> {
    let text = read_input(path)?;

    word_list::load_word_list(text.as_bytes()).map_err(|e| {
        eprintln!("{}: {}", path.display(), e);
    })
}

fn load_trie(path: &Path) -> Result<Trie, ()> {
    let result = File::open(path)
        .map_err(serde_json::Error::io)
        .and_then(|file| trie_format::read_trie(BufReader::new(file)));

    result.map_err(|e| {
        eprintln!("{}: {}", path.display(), e);
    })
}

fn solve(args: &Args, board: &Board) -> Result<Solution, ()> {
    let options = SolveOptions {
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    let result = if let Some(path) = args.words.as_ref() {
        let words = load_words(path)?;
        info!("loaded {} words from {}", words.len(), path.display());
        boggler::solve_words(board, &words, &options)
    } else if let Some(path) = args.trie.as_ref() {
        let trie = load_trie(path)?;
        info!("loaded {} words from {}", trie.len(), path.display());
        boggler::solve_trie(board, &trie, &options)
    } else {
        return Err(());
    };

    result.map_err(|e| eprintln!("{}", e))
}

fn print_solution(solution: &Solution, show_paths: bool) {
    println!("{}", solution.board);
    println!();

    if show_paths {
        for path in solution.paths.iter() {
            let route = path.positions()
                .iter()
                .map(|(x, y)| format!("({},{})", x, y))
                .collect::<Vec<_>>()
                .join(" ");
            println!("{} {}", path.word(), route);
        }
    } else {
        for word in solution.words.iter() {
            println!("{}", word);
        }
    }

    println!();
    println!(
        "{} words, {} paths, {:.3} ms",
        solution.words.len(),
        solution.paths.len(),
        timer::milliseconds(solution.elapsed),
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .init();

    let args = Args::parse();

    let Ok(board) = make_board(&args)
    else {
        return ExitCode::FAILURE;
    };

    let Ok(solution) = solve(&args, &board)
    else {
        return ExitCode::FAILURE;
    };

    if args.json {
        let stdout = io::stdout();

        if let Err(e) = serde_json::to_writer_pretty(stdout.lock(), &solution) {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }

        println!();
    } else {
        print_solution(&solution, args.paths);
    }

    ExitCode::SUCCESS
}
