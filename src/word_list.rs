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
use std::io::{self, Read};
use log::warn;
use super::lexer::{self, WordError};

#[derive(Debug)]
pub enum WordListError {
    Io(io::Error),
    Json(serde_json::Error),
    BadWord(usize, WordError),
}

impl From<io::Error> for WordListError {
    fn from(e: io::Error) -> WordListError {
        WordListError::Io(e)
    }
}

impl From<serde_json::Error> for WordListError {
    fn from(e: serde_json::Error) -> WordListError {
        WordListError::Json(e)
    }
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WordListError::Io(e) => write!(f, "{}", e),
            WordListError::Json(e) => write!(f, "{}", e),
            WordListError::BadWord(line_num, e) => {
                write!(f, "line {}: {}", line_num, e)
            },
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WordListError::Io(e) => Some(e),
            WordListError::Json(e) => Some(e),
            WordListError::BadWord(_, e) => Some(e),
        }
    }
}

fn add_word(
    words: &mut Vec<String>,
    line_num: usize,
    word: &str,
) -> Result<(), WordListError> {
    let word = word.trim().to_lowercase();

    if word.is_empty() {
        return Ok(());
    }

    if let Err(e) = lexer::word_faces(&word) {
        return Err(WordListError::BadWord(line_num, e));
    }

    words.push(word);

    Ok(())
}

/// Reads a list of words. The list can either be a JSON array of
/// strings or plain text with one word per line. For a JSON array the
/// “line number” in errors is the position in the array.
pub fn load_word_list<R: Read>(mut reader: R) -> Result<Vec<String>, WordListError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut words = Vec::new();

    if text.trim_start().starts_with('[') {
        let entries = serde_json::from_str::<Vec<String>>(&text)?;

        for (i, entry) in entries.iter().enumerate() {
            if entry.trim().is_empty() {
                warn!("skipping blank entry {} in word list", i + 1);
                continue;
            }

            add_word(&mut words, i + 1, entry)?;
        }
    } else {
        for (line_num, line) in text.lines().enumerate() {
            add_word(&mut words, line_num + 1, line)?;
        }
    }

    Ok(words)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plain_text() {
        let words = load_word_list(
            "foo\n  Bar \n\nQUIZ\r\nqueue\n".as_bytes()
        ).unwrap();

        assert_eq!(&words, &["foo", "bar", "quiz", "queue"]);
    }

    #[test]
    fn json() {
        let words = load_word_list(
            "  [\"foo\", \"Bar\", \"\", \"banq\"]".as_bytes()
        ).unwrap();

        assert_eq!(&words, &["foo", "bar", "banq"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let words = load_word_list("ab\nab\n".as_bytes()).unwrap();
        assert_eq!(&words, &["ab", "ab"]);
    }

    #[test]
    fn bad_word() {
        let e = load_word_list("foo\nbar\nb@z\n".as_bytes()).unwrap_err();

        assert!(matches!(
            e,
            WordListError::BadWord(3, WordError::UnexpectedCharacter(1, '@')),
        ));
        assert_eq!(
            &e.to_string(),
            "line 3: position 2: unexpected character: @",
        );

        assert!(matches!(
            load_word_list("[\"ok\", \"two words\"]".as_bytes()),
            Err(WordListError::BadWord(2, _)),
        ));
    }

    #[test]
    fn bad_json() {
        assert!(matches!(
            load_word_list("[\"foo\", 3]".as_bytes()),
            Err(WordListError::Json(_)),
        ));
        assert!(matches!(
            load_word_list("[\"foo\"".as_bytes()),
            Err(WordListError::Json(_)),
        ));
    }

    #[test]
    fn empty() {
        assert!(load_word_list("".as_bytes()).unwrap().is_empty());
        assert!(load_word_list("[]".as_bytes()).unwrap().is_empty());
    }
}
