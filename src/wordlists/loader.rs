//! Word list loading utilities
//!
//! Lists are plain text, one word per line. Blank lines are skipped and
//! entries that are not five ASCII letters are dropped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use reverse_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/common.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_lines(&content);
    debug!(path = %path.display(), count = words.len(), "Loaded word list");
    Ok(words)
}

fn parse_lines(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        warn!(skipped, "Ignored word list entries that are not five-letter words");
    }
    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use reverse_wordle::wordlists::loader::words_from_slice;
/// use reverse_wordle::wordlists::COMMON;
///
/// let words = words_from_slice(COMMON);
/// assert_eq!(words.len(), COMMON.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{DICTIONARY, DICTIONARY_COUNT};

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_lines_normalizes_and_skips() {
        let words = parse_lines("  Crane\n\nSLATE \nab\nwörds\n  \nirate");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_from_file("data/no-such-list.txt").is_err());
    }

    #[test]
    fn load_from_data_dir() {
        let words = load_from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/data/dictionary.txt"))
            .unwrap();
        assert_eq!(words.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn embedded_dictionary_fully_parses() {
        assert_eq!(words_from_slice(DICTIONARY).len(), DICTIONARY_COUNT);
    }
}
