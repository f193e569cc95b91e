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
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use clap::Parser;
use env_logger::Env;
use boggler::{trie_format, Trie};

#[derive(Debug, Parser)]
#[command(about = "Prints every word in a trie file")]
struct Args {
    #[arg(default_value = "data/trie.json")]
    trie: PathBuf,
}

fn load_trie(filename: &Path) -> Result<Trie, ()> {
    let result = File::open(filename)
        .map_err(serde_json::Error::io)
        .and_then(|file| trie_format::read_trie(BufReader::new(file)));

    result.map_err(|e| {
        eprintln!("{}: {}", filename.display(), e);
    })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .init();

    let args = Args::parse();

    let Ok(trie) = load_trie(&args.trie)
    else {
        return ExitCode::FAILURE;
    };

    let mut iterator = trie.words();

    while let Some(word) = iterator.next() {
        println!("{}", word);
    }

    ExitCode::SUCCESS
}
