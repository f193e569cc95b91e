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
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use env_logger::Env;
use log::info;
use boggler::{trie_format, word_list, Trie};

#[derive(Debug, Parser)]
#[command(about = "Compiles a word list into a trie for solve-board")]
struct Args {
    /// File to write the trie JSON to
    output: PathBuf,

    /// Word list to read. If this isn’t given the list is read from
    /// stdin.
    input: Option<PathBuf>,
}

fn load_words(args: &Args) -> Result<Vec<String>, ()> {
    let result = match args.input.as_ref() {
        Some(path) => File::open(path)
            .map_err(word_list::WordListError::Io)
            .and_then(|file| word_list::load_word_list(BufReader::new(file))),
        None => word_list::load_word_list(io::stdin().lock()),
    };

    result.map_err(|e| {
        let name = args.input.as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "stdin".to_string());
        eprintln!("{}: {}", name, e);
    })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .init();

    let args = Args::parse();

    let Ok(words) = load_words(&args)
    else {
        return ExitCode::FAILURE;
    };

    let trie = match Trie::from_words(&words) {
        Ok(trie) => trie,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    info!("{} words, {} unique", words.len(), trie.len());

    if let Err(e) = File::create(&args.output)
        .map_err(serde_json::Error::io)
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            trie_format::write_trie(&trie, &mut writer)?;
            writer.flush().map_err(serde_json::Error::io)
        })
    {
        eprintln!("{}: {}", args.output.display(), e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
